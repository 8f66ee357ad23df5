use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use super::Listener;
use crate::core::AnimationDriver;
use crate::dom;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub container: web::Element,
    pub driver: Rc<RefCell<AnimationDriver>>,
}

pub fn wire_pointer_handlers(w: &PointerWiring) -> Vec<Listener> {
    vec![wire_pointermove(w), wire_pointerenter(w), wire_pointerleave(w)]
}

// Listens on the window so moves keep tracking while the pointer is over
// content stacked above the canvas.
fn wire_pointermove(w: &PointerWiring) -> Listener {
    let w2 = w.clone();
    Listener::attach(w.window.as_ref(), "pointermove", move |ev: web::Event| {
        let Ok(ev) = ev.dyn_into::<web::PointerEvent>() else {
            return;
        };
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let canvas = &w2.canvas;
        w2.driver
            .borrow_mut()
            .pointer_move(Instant::now(), client, || dom::top_left(canvas));
    })
}

fn wire_pointerenter(w: &PointerWiring) -> Listener {
    let driver = w.driver.clone();
    Listener::attach(w.container.as_ref(), "pointerenter", move |_ev: web::Event| {
        driver.borrow_mut().pointer_enter();
    })
}

fn wire_pointerleave(w: &PointerWiring) -> Listener {
    let driver = w.driver.clone();
    Listener::attach(w.container.as_ref(), "pointerleave", move |_ev: web::Event| {
        driver.borrow_mut().pointer_leave();
    })
}
