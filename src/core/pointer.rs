use glam::DVec2;
use instant::Instant;
use std::time::Duration;

/// Pointer position in surface-local pixels and whether it is over the surface.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
    pub active: bool,
}

impl PointerState {
    pub fn at(position: DVec2) -> Self {
        Self {
            position,
            active: true,
        }
    }

    /// Position only when the pointer is over the surface.
    #[inline]
    pub fn active_position(&self) -> Option<DVec2> {
        self.active.then_some(self.position)
    }
}

/// Rate-limited pointer sampling.
///
/// Moves inside the throttle window after the last accepted move are dropped.
/// Enter/leave are never throttled.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    throttle: Duration,
    last_accepted: Option<Instant>,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(throttle: Duration) -> Self {
        Self {
            throttle,
            last_accepted: None,
            state: PointerState::default(),
        }
    }

    /// Record a move given in viewport coordinates. `surface_origin` yields the
    /// surface's current top-left in the same coordinates and is only called
    /// for accepted moves. Returns whether the move was accepted.
    pub fn track_move(
        &mut self,
        now: Instant,
        client: DVec2,
        surface_origin: impl FnOnce() -> DVec2,
    ) -> bool {
        if let Some(last) = self.last_accepted {
            if now < last + self.throttle {
                return false;
            }
        }
        self.state.position = client - surface_origin();
        self.last_accepted = Some(now);
        true
    }

    #[inline]
    pub fn enter(&mut self) {
        self.state.active = true;
    }

    #[inline]
    pub fn leave(&mut self) {
        self.state.active = false;
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }
}
