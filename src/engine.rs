//////////////////////////////////////////////////
// Using

use crate::file::Assets;

//////////////////////////////////////////////////
// Engine

/// The native rendering/audio subsystem behind the bridge.
///
/// The bridge never interprets these calls; it only guarantees their order.
/// Both host contexts (lifecycle and rendering) may call into the engine,
/// so implementations serialize their own internal state. None of the
/// operations can report failure: a fault inside the engine is fatal to
/// the process.
pub trait Engine: Send + Sync + 'static {
    /// Load startup resources from the given asset source. Called exactly
    /// once per process, during app creation. Must not block indefinitely.
    fn init(&self, assets: &Assets);

    /// Start background audio generation. Called exactly once per process,
    /// right after `init` and before any surface event, so audio does not
    /// wait for a valid surface. Engines without an audio subsystem keep
    /// the default no-op.
    fn init_audio(&self) {}

    /// A new or replaced drawable surface is ready; (re)acquire the
    /// GPU-side resources bound to it.
    fn surface_created(&self);

    /// The surface dimensions changed; update viewport/projection state.
    fn surface_changed(&self, width: u32, height: u32);

    /// Render one frame to the current surface.
    fn draw_frame(&self);

    /// The app is backgrounding; suspend CPU/GPU/audio work promptly.
    fn pause(&self);

    /// The app is foregrounding; resume suspended work. The host signals
    /// `surface_created`/`surface_changed` again afterwards if the platform
    /// discarded the surface while paused.
    fn resume(&self);
}
