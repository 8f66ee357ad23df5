//! Mouse-reactive canvas backgrounds for the web.
//!
//! `core` is platform independent and holds the simulation, pointer tracking
//! and drawing logic; the remaining modules wire it to the DOM on wasm32.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    use crate::canvas::CanvasSurface;
    use crate::core::constants::{DEFAULT_CANVAS_ID, DEFAULT_CONTAINER_ID};
    use crate::core::{build_effect, AnimationDriver};
    use crate::events::{self, pointer::PointerWiring, Listener};
    use crate::{dom, frame};

    /// Why a background could not be mounted.
    #[derive(Debug, thiserror::Error)]
    pub enum Unavailable {
        #[error("no window")]
        NoWindow,
        #[error("no document")]
        NoDocument,
        #[error("missing #{0}")]
        MissingCanvas(String),
        #[error("#{0} is not a canvas")]
        NotACanvas(String),
        #[error("missing #{0}")]
        MissingContainer(String),
        #[error("2d context unavailable")]
        NoContext,
    }

    /// A mounted background. Dropping it (or `free()` from JS) stops the
    /// background the same way `stop` does.
    #[wasm_bindgen]
    pub struct BackgroundHandle {
        driver: Rc<RefCell<AnimationDriver>>,
        listeners: Vec<Listener>,
        frames: Option<frame::FrameLoop>,
    }

    #[wasm_bindgen]
    impl BackgroundHandle {
        /// Cancel the frame loop and remove every listener.
        pub fn stop(&mut self) {
            self.teardown();
        }

        #[wasm_bindgen(getter)]
        pub fn frames(&self) -> f64 {
            self.driver.borrow().frames() as f64
        }
    }

    impl BackgroundHandle {
        // Idempotent; only the first call logs.
        fn teardown(&mut self) {
            let Some(frames) = self.frames.take() else {
                return;
            };
            self.driver.borrow_mut().stop();
            frames.cancel();
            for l in self.listeners.drain(..) {
                l.detach();
            }
            log::info!(
                "[background] stopped after {} frames",
                self.driver.borrow().frames()
            );
        }
    }

    impl Drop for BackgroundHandle {
        fn drop(&mut self) {
            self.teardown();
        }
    }

    thread_local! {
        static AUTO_MOUNTED: RefCell<Option<BackgroundHandle>> = const { RefCell::new(None) };
    }

    pub fn mount(canvas_id: &str, container_id: &str) -> Result<BackgroundHandle, Unavailable> {
        let window = web::window().ok_or(Unavailable::NoWindow)?;
        let document = window.document().ok_or(Unavailable::NoDocument)?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| Unavailable::MissingCanvas(canvas_id.to_string()))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| Unavailable::NotACanvas(canvas_id.to_string()))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| Unavailable::MissingContainer(container_id.to_string()))?;
        let ctx = dom::context_2d(&canvas).ok_or(Unavailable::NoContext)?;

        let config = dom::read_config(&canvas);
        let seed: u64 = rand::random();
        let effect = build_effect(&config, seed);
        let driver = Rc::new(RefCell::new(AnimationDriver::new(effect, config.throttle)));

        let (w, h) = dom::sync_canvas_to_container(&canvas, &container);
        driver.borrow_mut().start(w, h);
        log::info!(
            "[background] {:?} effect on #{} ({}x{})",
            config.effect,
            canvas_id,
            w,
            h
        );

        let mut listeners = events::wire_pointer_handlers(&PointerWiring {
            window: window.clone(),
            canvas: canvas.clone(),
            container: container.clone(),
            driver: driver.clone(),
        });
        listeners.push(events::wire_resize(&window, &canvas, &container, driver.clone()));

        let cancel = driver.borrow().cancel_token();
        let frames = frame::start_loop(window, driver.clone(), CanvasSurface::new(ctx), cancel);

        Ok(BackgroundHandle {
            driver,
            listeners,
            frames: Some(frames),
        })
    }

    /// Mount a background on `canvas_id`, tracking the pointer over `container_id`.
    #[wasm_bindgen]
    pub fn mount_background(
        canvas_id: &str,
        container_id: &str,
    ) -> Result<BackgroundHandle, JsValue> {
        mount(canvas_id, container_id).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Stop the background mounted by `start`, if any.
    #[wasm_bindgen]
    pub fn stop_background() {
        AUTO_MOUNTED.with(|slot| {
            if let Some(mut handle) = slot.borrow_mut().take() {
                handle.stop();
            }
        });
    }

    fn auto_mount() {
        // Pages without the hero canvas simply get no background.
        match mount(DEFAULT_CANVAS_ID, DEFAULT_CONTAINER_ID) {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::debug!("[background] not started: {}", e),
        }
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        match dom::window_document() {
            Some(document) if document.ready_state() == "loading" => {
                let cb = Closure::once_into_js(auto_mount);
                _ = document.add_event_listener_with_callback(
                    "DOMContentLoaded",
                    cb.unchecked_ref::<js_sys::Function>(),
                );
            }
            _ => auto_mount(),
        }
        Ok(())
    }
}
