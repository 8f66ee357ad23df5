use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::core::{GradientStop, Rgba, Stroke, Surface};

/// `Surface` backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    #[allow(deprecated)]
    fn set_stroke(&self, stroke: &Stroke) {
        self.ctx
            .set_stroke_style(&JsValue::from_str(&stroke.color.to_string()));
        self.ctx.set_line_width(stroke.width);
    }

    #[allow(deprecated)]
    fn set_fill(&self, color: &Rgba) {
        self.ctx.set_fill_style(&JsValue::from_str(&color.to_string()));
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.set_stroke(&stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn polygon(&mut self, points: &[DVec2], stroke: Option<Stroke>, fill: Option<Rgba>) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x, first.y);
        for p in rest {
            self.ctx.line_to(p.x, p.y);
        }
        self.ctx.close_path();
        if let Some(s) = stroke {
            self.set_stroke(&s);
            self.ctx.stroke();
        }
        if let Some(c) = fill {
            self.set_fill(&c);
            self.ctx.fill();
        }
    }

    fn circle(&mut self, center: DVec2, radius: f64, fill: Rgba) {
        self.set_fill(&fill);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }

    #[allow(deprecated)]
    fn radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        let gradient = match self.ctx.create_radial_gradient(
            center.x,
            center.y,
            0.0,
            center.x,
            center.y,
            radius.max(0.0),
        ) {
            Ok(g) => g,
            Err(e) => {
                log::error!("radial gradient error: {:?}", e);
                return;
            }
        };
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
        }
        self.ctx.set_fill_style(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius.max(0.0), 0.0, TAU);
        self.ctx.fill();
    }
}
