use glam::DVec2;
use rand::prelude::*;

use super::config::NeuronConfig;
use super::force::force;
use super::particle::Particle;
use super::pointer::PointerState;

/// Owns the particle set and steps its kinematics.
pub struct ParticleField {
    config: NeuronConfig,
    bounds: DVec2,
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    /// Empty field; particles appear on the first `resize`.
    pub fn new(config: NeuronConfig, seed: u64) -> Self {
        Self {
            config,
            bounds: DVec2::ZERO,
            particles: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Discard every particle and scatter a fresh set over `width × height`.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.bounds = DVec2::new(width.max(0.0), height.max(0.0));
        let cfg = &self.config;
        let rng = &mut self.rng;
        let bounds = self.bounds;
        self.particles = (0..cfg.particle_count)
            .map(|_| {
                let position = DVec2::new(
                    sample_extent(rng, bounds.x),
                    sample_extent(rng, bounds.y),
                );
                let velocity = DVec2::new(
                    sample_symmetric(rng, cfg.initial_speed),
                    sample_symmetric(rng, cfg.initial_speed),
                );
                let base_radius =
                    sample_between(rng, cfg.base_radius_min, cfg.base_radius_max);
                Particle::new(position, velocity, base_radius)
            })
            .collect();
    }

    /// One integration step for every particle. Particles never read each
    /// other, so the update order does not matter.
    pub fn advance(&mut self, pointer: &PointerState) {
        let bounds = self.bounds;
        let attraction = self.config.attraction;
        let damping = self.config.damping;
        for p in &mut self.particles {
            p.contain(bounds);
            p.position += p.velocity;
            p.contain(bounds);
            p.velocity += force(pointer, p.position, &attraction);
            p.velocity *= damping;
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Replace the particle set wholesale (used for scripted layouts).
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    #[inline]
    pub fn config(&self) -> &NeuronConfig {
        &self.config
    }
}

// Uniform over [0, extent); degenerate extents collapse to 0.
fn sample_extent(rng: &mut StdRng, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

fn sample_between(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        min
    }
}

fn sample_symmetric(rng: &mut StdRng, half_range: f64) -> f64 {
    if half_range > 0.0 {
        rng.gen_range(-half_range..=half_range)
    } else {
        0.0
    }
}
