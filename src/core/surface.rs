//! The 2D drawing seam between the effects and whatever raster they target.
//!
//! The browser front-end implements this on top of `CanvasRenderingContext2d`;
//! tests implement it with a recorder. All coordinates are surface pixels.

use glam::DVec2;

use super::color::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

/// One colour stop of a radial gradient; `offset` is in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Rgba,
}

pub trait Surface {
    /// Erase the rectangle `[0, width] × [0, height]` to transparent.
    fn clear(&mut self, width: f64, height: f64);

    fn line(&mut self, from: DVec2, to: DVec2, stroke: Stroke);

    /// Closed polygon. When both are given the outline is stroked before the fill.
    fn polygon(&mut self, points: &[DVec2], stroke: Option<Stroke>, fill: Option<Rgba>);

    fn circle(&mut self, center: DVec2, radius: f64, fill: Rgba);

    /// Disc of `radius` filled with a gradient running from the centre outward.
    fn radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]);
}
