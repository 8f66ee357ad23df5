// Host-side tests for particle generation and kinematics.

use glam::DVec2;
use neuron_canvas::core::force::force;
use neuron_canvas::core::{NeuronConfig, Particle, ParticleField, PointerState};

fn field(width: f64, height: f64, seed: u64) -> ParticleField {
    let mut f = ParticleField::new(NeuronConfig::default(), seed);
    f.resize(width, height);
    f
}

fn in_bounds(p: &Particle, bounds: DVec2) -> bool {
    p.position.x >= 0.0 && p.position.x <= bounds.x && p.position.y >= 0.0 && p.position.y <= bounds.y
}

#[test]
fn resize_generates_configured_count_within_bounds() {
    let cfg = NeuronConfig::default();
    let f = field(800.0, 600.0, 7);
    assert_eq!(f.particles().len(), cfg.particle_count);
    for p in f.particles() {
        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        assert!(p.velocity.x.abs() <= cfg.initial_speed);
        assert!(p.velocity.y.abs() <= cfg.initial_speed);
        assert!(p.base_radius() >= cfg.base_radius_min && p.base_radius() <= cfg.base_radius_max);
        assert_eq!(p.radius, p.base_radius());
    }
}

#[test]
fn resize_discards_previous_particles() {
    let mut f = field(800.0, 600.0, 11);
    let before = f.particles().to_vec();
    f.resize(300.0, 200.0);
    let after = f.particles();
    assert_eq!(after.len(), before.len());
    assert!(after.iter().all(|p| in_bounds(p, DVec2::new(300.0, 200.0))));
    for p in after {
        assert!(!before.contains(p), "particle carried over a resize: {p:?}");
    }
}

#[test]
fn same_seed_reproduces_layout() {
    let a = field(640.0, 480.0, 42);
    let b = field(640.0, 480.0, 42);
    assert_eq!(a.particles(), b.particles());
    let c = field(640.0, 480.0, 43);
    assert_ne!(a.particles(), c.particles());
}

#[test]
fn zero_sized_surface_collapses_positions() {
    let f = field(0.0, 0.0, 1);
    assert_eq!(f.particles().len(), NeuronConfig::default().particle_count);
    assert!(f.particles().iter().all(|p| p.position == DVec2::ZERO));
}

#[test]
fn advance_keeps_particles_in_bounds() {
    let bounds = DVec2::new(320.0, 240.0);
    let mut f = field(bounds.x, bounds.y, 3);
    for step in 0..2000 {
        // Sweep an active pointer around so attraction keeps injecting energy.
        let t = step as f64 * 0.01;
        let pointer = PointerState::at(DVec2::new(160.0 + 150.0 * t.cos(), 120.0 + 110.0 * t.sin()));
        f.advance(&pointer);
        for p in f.particles() {
            assert!(in_bounds(p, bounds), "out of bounds at step {step}: {p:?}");
        }
    }
}

#[test]
fn speed_never_grows_without_pointer() {
    let mut f = field(500.0, 500.0, 9);
    let inactive = PointerState::default();
    let mut prev: Vec<f64> = f.particles().iter().map(|p| p.velocity.length()).collect();
    for _ in 0..500 {
        f.advance(&inactive);
        for (p, before) in f.particles().iter().zip(&prev) {
            assert!(p.velocity.length() <= *before + 1e-12);
        }
        prev = f.particles().iter().map(|p| p.velocity.length()).collect();
    }
}

#[test]
fn particle_at_rest_stays_put() {
    let mut f = field(100.0, 100.0, 0);
    f.set_particles(vec![Particle::new(DVec2::new(10.0, 10.0), DVec2::ZERO, 3.0)]);
    f.advance(&PointerState::default());
    let p = &f.particles()[0];
    assert_eq!(p.position, DVec2::new(10.0, 10.0));
    assert_eq!(p.velocity, DVec2::ZERO);
}

#[test]
fn pointer_attracts_particle_toward_it() {
    let mut f = field(400.0, 400.0, 0);
    f.set_particles(vec![Particle::new(DVec2::new(50.0, 0.0), DVec2::ZERO, 3.0)]);
    f.advance(&PointerState::at(DVec2::ZERO));
    let v = f.particles()[0].velocity;
    assert!(v.x < 0.0, "expected pull toward -x, got {v:?}");
    assert_eq!(v.y, 0.0);
    // (200 - 50) / 200 * 0.02, damped once
    assert!((v.x + 0.015 * 0.98).abs() < 1e-12);
}

#[test]
fn pointer_on_top_of_particle_exerts_no_force() {
    let mut f = field(400.0, 400.0, 0);
    f.set_particles(vec![Particle::new(DVec2::new(120.0, 80.0), DVec2::ZERO, 3.0)]);
    f.advance(&PointerState::at(DVec2::new(120.0, 80.0)));
    let p = &f.particles()[0];
    assert!(p.velocity.is_finite());
    assert_eq!(p.velocity, DVec2::ZERO);
}

#[test]
fn wall_hit_reflects_and_clamps() {
    let mut f = field(100.0, 100.0, 0);
    f.set_particles(vec![Particle::new(DVec2::new(99.95, 50.0), DVec2::new(0.1, 0.0), 3.0)]);
    f.advance(&PointerState::default());
    let p = &f.particles()[0];
    assert_eq!(p.position.x, 100.0);
    assert!((p.velocity.x + 0.1 * 0.98).abs() < 1e-12);
}

#[test]
fn force_vanishes_outside_radius_and_when_inactive() {
    let params = NeuronConfig::default().attraction;
    let at = DVec2::new(10.0, 10.0);
    assert_eq!(force(&PointerState::default(), at, &params), DVec2::ZERO);
    let far = PointerState::at(at + DVec2::new(params.radius, 0.0));
    assert_eq!(force(&far, at, &params), DVec2::ZERO);
    let near = PointerState::at(at + DVec2::new(0.0, params.radius * 0.5));
    let f = force(&near, at, &params);
    assert!(f.y > 0.0 && f.x == 0.0);
    assert!((f.length() - 0.5 * params.gain).abs() < 1e-12);
}
