use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

use super::Listener;
use crate::core::AnimationDriver;
use crate::dom;

/// Resync the canvas to its container on window resize and regenerate the effect.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
    driver: Rc<RefCell<AnimationDriver>>,
) -> Listener {
    let canvas = canvas.clone();
    let container = container.clone();
    Listener::attach(window.as_ref(), "resize", move |_ev: web::Event| {
        let (w, h) = dom::sync_canvas_to_container(&canvas, &container);
        log::debug!("[resize] {}x{}", w, h);
        driver.borrow_mut().resize(w, h);
    })
}
