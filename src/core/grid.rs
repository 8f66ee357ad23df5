//! Grid-twist background: a static guide grid whose cells and vertices near
//! the pointer light up and lean toward it.

use glam::DVec2;

use super::color::Rgb;
use super::config::GridConfig;
use super::effect::Effect;
use super::pointer::PointerState;
use super::surface::{Stroke, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Twist {
    pub offset: DVec2,
    /// Pointer-distance fade in `[0, 1]`; 1 at the pointer.
    pub opacity: f64,
    pub visible: bool,
}

/// Offset of a grid point at `base` toward `pointer`, eased so that it
/// falls off faster than the opacity does.
pub fn twist(base: DVec2, pointer: DVec2, config: &GridConfig) -> Twist {
    let delta = pointer - base;
    let distance = delta.length();
    let opacity = (1.0 - distance / config.influence_radius).max(0.0);
    let eased = opacity.powf(config.ease_exponent);
    let offset = if distance > 0.0 {
        delta / distance * config.twist_strength * eased * eased
    } else {
        DVec2::ZERO
    };
    Twist {
        offset,
        opacity,
        visible: distance <= config.influence_radius,
    }
}

pub struct GridTwist {
    config: GridConfig,
    accent: Rgb,
    size: DVec2,
}

impl GridTwist {
    pub fn new(config: GridConfig, accent: Rgb) -> Self {
        Self {
            config,
            accent,
            size: DVec2::ZERO,
        }
    }

    /// Cell columns and rows covering the surface.
    pub fn dimensions(&self) -> (usize, usize) {
        let s = self.config.cell_size;
        if !s.is_finite() || s <= 0.0 {
            return (0, 0);
        }
        (
            (self.size.x / s).ceil() as usize,
            (self.size.y / s).ceil() as usize,
        )
    }

    fn draw_cells(&self, pointer: DVec2, surface: &mut dyn Surface) {
        let cfg = &self.config;
        let s = cfg.cell_size;
        let (cols, rows) = self.dimensions();
        for i in 0..cols {
            for j in 0..rows {
                let base = DVec2::new(i as f64 * s, j as f64 * s);
                let t = twist(base + DVec2::splat(s / 2.0), pointer, cfg);
                if !t.visible {
                    continue;
                }
                let o = base + t.offset;
                let corners = [
                    o,
                    o + DVec2::new(s, 0.0),
                    o + DVec2::new(s, s),
                    o + DVec2::new(0.0, s),
                ];
                let stroke = Stroke {
                    color: self.accent.with_alpha(t.opacity * cfg.cell_alpha),
                    width: cfg.cell_line_width,
                };
                let fill = (cfg.fill_every > 0 && (i + j) % cfg.fill_every == 0)
                    .then(|| self.accent.with_alpha(t.opacity * cfg.fill_alpha));
                surface.polygon(&corners, Some(stroke), fill);
            }
        }
    }

    fn draw_guides(&self, surface: &mut dyn Surface) {
        let cfg = &self.config;
        let (cols, rows) = self.dimensions();
        let stroke = Stroke {
            color: self.accent.with_alpha(cfg.guide_alpha),
            width: cfg.guide_line_width,
        };
        for i in 0..=cols {
            let x = i as f64 * cfg.cell_size;
            surface.line(DVec2::new(x, 0.0), DVec2::new(x, self.size.y), stroke);
        }
        for j in 0..=rows {
            let y = j as f64 * cfg.cell_size;
            surface.line(DVec2::new(0.0, y), DVec2::new(self.size.x, y), stroke);
        }
    }

    fn draw_vertices(&self, pointer: DVec2, surface: &mut dyn Surface) {
        let cfg = &self.config;
        let (cols, rows) = self.dimensions();
        for i in 0..=cols {
            for j in 0..=rows {
                let vertex = DVec2::new(i as f64 * cfg.cell_size, j as f64 * cfg.cell_size);
                let t = twist(vertex, pointer, cfg);
                if t.visible {
                    surface.circle(
                        vertex + t.offset,
                        cfg.point_radius,
                        self.accent.with_alpha(t.opacity * cfg.point_alpha),
                    );
                }
            }
        }
    }
}

impl Effect for GridTwist {
    fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width.max(0.0), height.max(0.0));
    }

    fn frame(&mut self, pointer: &PointerState, surface: &mut dyn Surface) {
        let active = pointer.active_position();
        if let Some(p) = active {
            self.draw_cells(p, surface);
        }
        self.draw_guides(surface);
        if let Some(p) = active {
            self.draw_vertices(p, surface);
        }
    }
}
