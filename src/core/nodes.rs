use glam::DVec2;

use super::color::Rgb;
use super::config::NodeStyle;
use super::constants::{NODE_GLOW_MID_ALPHA, NODE_GLOW_MID_STOP};
use super::particle::Particle;
use super::pointer::PointerState;
use super::surface::{GradientStop, Surface};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeAppearance {
    pub radius: f64,
    pub opacity: f64,
}

pub fn node_appearance(
    position: DVec2,
    base_radius: f64,
    pointer: &PointerState,
    style: &NodeStyle,
) -> NodeAppearance {
    let influence = pointer
        .active_position()
        .map(|p| (1.0 - position.distance(p) / style.influence_radius).max(0.0))
        .unwrap_or(0.0);
    NodeAppearance {
        radius: base_radius + influence * style.radius_boost,
        opacity: style.base_opacity + influence * (1.0 - style.base_opacity),
    }
}

/// Glow first, solid core on top. Each particle's `radius` is overwritten
/// with the value drawn this frame.
pub fn draw_nodes(
    particles: &mut [Particle],
    pointer: &PointerState,
    style: &NodeStyle,
    accent: Rgb,
    surface: &mut dyn Surface,
) {
    for p in particles.iter_mut() {
        let look = node_appearance(p.position, p.base_radius(), pointer, style);
        p.radius = look.radius;

        let stops = [
            GradientStop {
                offset: 0.0,
                color: accent.with_alpha(look.opacity),
            },
            GradientStop {
                offset: NODE_GLOW_MID_STOP,
                color: accent.with_alpha(look.opacity * NODE_GLOW_MID_ALPHA),
            },
            GradientStop {
                offset: 1.0,
                color: accent.with_alpha(0.0),
            },
        ];
        surface.radial_glow(p.position, look.radius * style.glow_scale, &stops);
        surface.circle(p.position, look.radius, accent.with_alpha(look.opacity));
    }
}
