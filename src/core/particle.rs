use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Radius drawn this frame; rewritten by the node renderer from `base_radius`.
    pub radius: f64,
    base_radius: f64,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, base_radius: f64) -> Self {
        Self {
            position,
            velocity,
            radius: base_radius,
            base_radius,
        }
    }

    #[inline]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Reflect velocity on every axis where the particle left `[0, bounds]`,
    /// then clamp the position back inside.
    #[inline]
    pub fn contain(&mut self, bounds: DVec2) {
        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
        self.position = self.position.clamp(DVec2::ZERO, bounds.max(DVec2::ZERO));
    }
}
