//////////////////////////////////////////////////
// Using

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, Once};

use crate::engine::Engine;
use crate::file::Assets;
use crate::surface::{SurfaceEvents, SurfaceState};

//////////////////////////////////////////////////
// AppState

/// App lifecycle, observable externally. `Uninitialized` ends when
/// `on_create` completes; afterwards pause/resume toggle `Active`/`Paused`.
/// There is no terminal state: the engine is process-scoped and torn down
/// only at process exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Uninitialized,
    Active,
    Paused,
}

//////////////////////////////////////////////////
// Bridge

/// Forwards host lifecycle and surface events to the engine, in the order
/// the host delivers them, exactly once each. The only logic of its own is
/// the one-shot guard around `init`/`init_audio` and the two state machines
/// it keeps observable (app lifecycle and surface).
///
/// Two host contexts call in concurrently: the lifecycle context delivers
/// `on_create`/`on_app_pause`/`on_app_resume`, the rendering context
/// delivers the surface events. Initialization is mutually excluded; the
/// engine serializes everything else itself.
pub struct Bridge<E: Engine> {
    engine: E,
    init_guard: Once,
    initialized: AtomicBool,
    surface_seen: AtomicBool,
    app_state: Mutex<AppState>,
    surface_state: Mutex<SurfaceState>,
}

//////////////////////////////////////////////////
// Implementation

impl<E: Engine> Bridge<E> {
    /// Attach the engine handle. The bridge is its sole owner for the rest
    /// of the process lifetime.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            init_guard: Once::new(),
            initialized: AtomicBool::new(false),
            surface_seen: AtomicBool::new(false),
            app_state: Mutex::new(AppState::Uninitialized),
            surface_state: Mutex::new(SurfaceState::Absent),
        }
    }

    /// Run `init` and `init_audio` exactly once, then mark the app active.
    /// Safe against duplicate host callbacks and against a concurrent call
    /// from the other context: late callers return after the first call
    /// has completed, without re-running initialization.
    pub fn on_create(&self, assets: &Assets) {
        self.init_guard.call_once(|| {
            self.engine.init(assets);
            // audio starts now, before any surface exists
            self.engine.init_audio();
            self.initialized.store(true, Ordering::Release);
            *self.app_state.lock().unwrap() = AppState::Active;
        });
    }

    /// Forwarded verbatim every time the host signals a ready surface; the
    /// surface may be replaced any number of times, no deduplication.
    pub fn on_surface_created(&self) {
        self.engine.surface_created();
        self.surface_seen.store(true, Ordering::Release);
        self.surface_state.lock().unwrap().created();
    }

    /// Forwarded verbatim with the extents unmodified. The engine owns
    /// viewport semantics; nothing is validated here.
    pub fn on_surface_changed(&self, width: u32, height: u32) {
        self.engine.surface_changed(width, height);
        self.surface_state.lock().unwrap().changed(width, height);
    }

    /// Forwarded verbatim on every frame tick, never coalesced or
    /// rate-limited. A tick arriving before initialization has completed
    /// and a surface has been created is dropped, not queued.
    pub fn on_draw_frame(&self) {
        if self.initialized.load(Ordering::Acquire) && self.surface_seen.load(Ordering::Acquire) {
            self.engine.draw_frame();
        }
    }

    /// The surface was torn down. Bookkeeping only: the engine has no
    /// teardown entry point, it learns about the surface going away from
    /// `pause` and the next `surface_created`.
    pub fn on_surface_destroyed(&self) {
        self.surface_state.lock().unwrap().destroyed();
    }

    /// Forwarded verbatim, regardless of surface state, so the engine can
    /// suspend non-graphics subsystems (audio, timers) as well.
    pub fn on_app_pause(&self) {
        self.engine.pause();
        let mut state = self.app_state.lock().unwrap();
        if *state != AppState::Uninitialized {
            *state = AppState::Paused;
        }
    }

    /// Forwarded verbatim, regardless of surface state. The host signals
    /// `on_surface_created`/`on_surface_changed` again afterwards if the
    /// platform discarded the surface while paused.
    pub fn on_app_resume(&self) {
        self.engine.resume();
        let mut state = self.app_state.lock().unwrap();
        if *state != AppState::Uninitialized {
            *state = AppState::Active;
        }
    }

    pub fn app_state(&self) -> AppState {
        *self.app_state.lock().unwrap()
    }

    pub fn surface_state(&self) -> SurfaceState {
        *self.surface_state.lock().unwrap()
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: Engine> SurfaceEvents for Bridge<E> {
    fn created(&self) {
        self.on_surface_created();
    }

    fn changed(&self, width: u32, height: u32) {
        self.on_surface_changed(width, height);
    }

    fn drawn(&self) {
        self.on_draw_frame();
    }
}

//////////////////////////////////////////////////
// Test
