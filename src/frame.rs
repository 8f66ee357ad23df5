use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::core::{AnimationDriver, CancelToken, Tick};

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running `requestAnimationFrame` loop. Dropping it cancels the loop.
pub struct FrameLoop {
    window: web::Window,
    tick: FrameClosure,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the callback.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the closure's self-reference cycle.
        self.tick.borrow_mut().take();
    }
}

fn schedule(window: &web::Window, tick: &FrameClosure, pending: &Cell<Option<i32>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame error: {:?}", e),
        }
    }
}

pub fn start_loop(
    window: web::Window,
    driver: Rc<RefCell<AnimationDriver>>,
    mut surface: CanvasSurface,
    cancel: CancelToken,
) -> FrameLoop {
    let tick: FrameClosure = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let window_clone = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        if cancel.is_cancelled() {
            return;
        }
        let outcome = driver.borrow_mut().tick(&mut surface);
        if outcome != Tick::Stopped {
            schedule(&window_clone, &tick_clone, &pending_clone);
        }
    }) as Box<dyn FnMut()>));

    schedule(&window, &tick, &pending);
    FrameLoop {
        window,
        tick,
        pending,
    }
}
