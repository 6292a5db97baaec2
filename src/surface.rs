//////////////////////////////////////////////////
// SurfaceEvents

/// Callbacks delivered by the host rendering context. The bridge implements
/// this and forwards each call to the engine; no buffering, no reordering.
pub trait SurfaceEvents {
    /// A new or replaced drawable surface is ready.
    fn created(&self);

    /// The surface was resized to the given pixel extents.
    fn changed(&self, width: u32, height: u32);

    /// One frame tick; render now.
    fn drawn(&self);
}

//////////////////////////////////////////////////
// SurfaceState

/// Whether a drawable surface currently exists, and its pixel extents.
/// Re-entrant across pause/resume cycles: the surface may be torn down and
/// created again any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    Absent,
    Present { width: u32, height: u32 },
}

//////////////////////////////////////////////////
// Implementation

impl SurfaceState {
    pub(crate) fn created(&mut self) {
        // extents are unknown until the first resize arrives
        *self = SurfaceState::Present { width: 0, height: 0 };
    }

    pub(crate) fn changed(&mut self, width: u32, height: u32) {
        *self = SurfaceState::Present { width, height };
    }

    pub(crate) fn destroyed(&mut self) {
        *self = SurfaceState::Absent;
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SurfaceState::Present { .. })
    }
}

impl Default for SurfaceState {
    fn default() -> Self {
        SurfaceState::Absent
    }
}
