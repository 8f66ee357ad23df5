use glam::DVec2;

use super::config::AttractionParams;
use super::pointer::PointerState;

/// Velocity adjustment pulling a particle at `position` toward the pointer.
///
/// Linear falloff from `gain` at the pointer to zero at `params.radius`.
/// Zero when the pointer is inactive, out of range, or exactly on the particle.
pub fn force(pointer: &PointerState, position: DVec2, params: &AttractionParams) -> DVec2 {
    let Some(target) = pointer.active_position() else {
        return DVec2::ZERO;
    };
    let delta = target - position;
    let distance = delta.length();
    if distance <= 0.0 || distance >= params.radius {
        return DVec2::ZERO;
    }
    let falloff = (params.radius - distance) / params.radius;
    delta / distance * falloff * params.gain
}
