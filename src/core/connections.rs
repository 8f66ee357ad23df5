use glam::DVec2;

use super::color::Rgb;
use super::config::ConnectionStyle;
use super::particle::Particle;
use super::pointer::PointerState;
use super::surface::{Stroke, Surface};

/// Opacity of the line between `a` and `b`, or `None` when they are too far
/// apart to connect. Pointer proximity can only raise it.
pub fn connection_opacity(
    a: DVec2,
    b: DVec2,
    pointer: &PointerState,
    style: &ConnectionStyle,
) -> Option<f64> {
    let distance = a.distance(b);
    if distance >= style.max_distance {
        return None;
    }
    let base = (1.0 - distance / style.max_distance) * style.base_alpha;

    let Some(p) = pointer.active_position() else {
        return Some(base);
    };
    let nearest = a.distance(p).min(b.distance(p));
    if nearest >= style.pointer_radius {
        return Some(base);
    }
    let influence = 1.0 - nearest / style.pointer_radius;
    Some(base.max(style.boosted_alpha * influence))
}

/// Exact scan over every unordered pair. Quadratic in the particle count;
/// fine for the few dozen nodes the background uses.
pub fn draw_connections(
    particles: &[Particle],
    pointer: &PointerState,
    style: &ConnectionStyle,
    accent: Rgb,
    surface: &mut dyn Surface,
) -> usize {
    let mut drawn = 0;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            if let Some(opacity) = connection_opacity(a.position, b.position, pointer, style) {
                surface.line(
                    a.position,
                    b.position,
                    Stroke {
                        color: accent.with_alpha(opacity),
                        width: style.line_width,
                    },
                );
                drawn += 1;
            }
        }
    }
    drawn
}
