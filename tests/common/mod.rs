// Recording surface shared by the host-side tests.

#![allow(dead_code)]
use glam::DVec2;
use neuron_canvas::core::{GradientStop, Rgba, Stroke, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear(f64, f64),
    Line(DVec2, DVec2, Stroke),
    Polygon(Vec<DVec2>, Option<Stroke>, Option<Rgba>),
    Circle(DVec2, f64, Rgba),
    Glow(DVec2, f64, Vec<GradientStop>),
}

#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Draw>,
}

impl Recorder {
    pub fn lines(&self) -> Vec<(DVec2, DVec2, Stroke)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Line(a, b, s) => Some((*a, *b, *s)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(DVec2, f64, Rgba)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Draw::Circle(p, r, c) => Some((*p, *r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Draw) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(Draw::Clear(width, height));
    }

    fn line(&mut self, from: DVec2, to: DVec2, stroke: Stroke) {
        self.calls.push(Draw::Line(from, to, stroke));
    }

    fn polygon(&mut self, points: &[DVec2], stroke: Option<Stroke>, fill: Option<Rgba>) {
        self.calls.push(Draw::Polygon(points.to_vec(), stroke, fill));
    }

    fn circle(&mut self, center: DVec2, radius: f64, fill: Rgba) {
        self.calls.push(Draw::Circle(center, radius, fill));
    }

    fn radial_glow(&mut self, center: DVec2, radius: f64, stops: &[GradientStop]) {
        self.calls.push(Draw::Glow(center, radius, stops.to_vec()));
    }
}
