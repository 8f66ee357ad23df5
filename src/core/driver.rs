use glam::DVec2;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use super::effect::Effect;
use super::pointer::{PointerState, PointerTracker};
use super::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Uninitialized,
    Running,
    Stopped,
}

/// What a single `tick` did. Only `Stopped` ends the frame loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    Drawn,
    Skipped,
    Stopped,
}

/// Shared stop flag; clones observe the same cancellation.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Owns one background: pointer tracking, the active effect and its
/// lifecycle. The host calls `tick` once per display refresh.
pub struct AnimationDriver {
    state: DriverState,
    effect: Box<dyn Effect>,
    pointer: PointerTracker,
    size: DVec2,
    frames: u64,
    cancel: CancelToken,
}

impl AnimationDriver {
    pub fn new(effect: Box<dyn Effect>, throttle: Duration) -> Self {
        Self {
            state: DriverState::Uninitialized,
            effect,
            pointer: PointerTracker::new(throttle),
            size: DVec2::ZERO,
            frames: 0,
            cancel: CancelToken::default(),
        }
    }

    /// Enter `Running` with the initial surface size. No-op once started or stopped.
    pub fn start(&mut self, width: f64, height: f64) {
        if self.state != DriverState::Uninitialized || self.cancel.is_cancelled() {
            return;
        }
        self.resize(width, height);
        self.state = DriverState::Running;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width.max(0.0), height.max(0.0));
        self.effect.resize(self.size.x, self.size.y);
    }

    pub fn tick(&mut self, surface: &mut dyn Surface) -> Tick {
        if self.cancel.is_cancelled() {
            self.state = DriverState::Stopped;
        }
        match self.state {
            DriverState::Uninitialized => Tick::Skipped,
            DriverState::Stopped => Tick::Stopped,
            DriverState::Running => {
                surface.clear(self.size.x, self.size.y);
                let pointer = self.pointer.state();
                self.effect.frame(&pointer, surface);
                self.frames += 1;
                Tick::Drawn
            }
        }
    }

    pub fn stop(&mut self) {
        self.cancel.cancel();
        self.state = DriverState::Stopped;
    }

    pub fn pointer_move(
        &mut self,
        now: Instant,
        client: DVec2,
        surface_origin: impl FnOnce() -> DVec2,
    ) -> bool {
        self.pointer.track_move(now, client, surface_origin)
    }

    pub fn pointer_enter(&mut self) {
        self.pointer.enter();
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.leave();
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer.state()
    }

    pub fn state(&self) -> DriverState {
        if self.cancel.is_cancelled() {
            DriverState::Stopped
        } else {
            self.state
        }
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
