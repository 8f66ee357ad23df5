pub mod pointer;
pub mod resize;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use pointer::wire_pointer_handlers;
pub use resize::wire_resize;

/// An attached DOM listener. It is removed from its target when dropped, so
/// the browser never calls into a freed closure.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }

    pub fn detach(self) {
        drop(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
