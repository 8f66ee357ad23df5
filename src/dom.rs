use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::BackgroundConfig;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to the container's client size (CSS pixels)
/// and return that size.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> (f64, f64) {
    let w_px = container.client_width().max(1) as u32;
    let h_px = container.client_height().max(1) as u32;
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px as f64, h_px as f64)
}

#[inline]
pub fn top_left(element: &web::Element) -> DVec2 {
    let rect = element.get_bounding_client_rect();
    DVec2::new(rect.left(), rect.top())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

const OVERRIDE_KEYS: &[(&str, &str)] = &[
    ("effect", "effect"),
    ("accent", "accent"),
    ("particles", "particles"),
    ("attractionRadius", "attraction-radius"),
    ("connectionDistance", "connection-distance"),
    ("damping", "damping"),
    ("throttleMs", "throttle-ms"),
    ("gridSize", "grid-size"),
];

/// Defaults plus whatever `data-*` overrides the canvas carries. Bad values
/// are skipped; a combination that fails validation falls back to defaults.
pub fn read_config(canvas: &web::HtmlCanvasElement) -> BackgroundConfig {
    let dataset = canvas.dataset();
    let mut config = BackgroundConfig::default();
    for (prop, key) in OVERRIDE_KEYS {
        if let Some(value) = dataset.get(prop) {
            if let Err(e) = config.apply_override(key, &value) {
                log::warn!("[config] ignoring data-{}: {}", key, e);
            }
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            BackgroundConfig::default()
        }
    }
}
