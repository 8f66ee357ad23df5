// Host-side tests for connection and node rendering.

mod common;

use common::{Draw, Recorder};
use glam::DVec2;
use neuron_canvas::core::connections::{connection_opacity, draw_connections};
use neuron_canvas::core::nodes::{draw_nodes, node_appearance};
use neuron_canvas::core::{NeuronConfig, Particle, PointerState, Rgb};

const ACCENT: Rgb = Rgb::new(59, 130, 246);

fn at(x: f64, y: f64) -> Particle {
    Particle::new(DVec2::new(x, y), DVec2::ZERO, 3.0)
}

#[test]
fn only_nearby_pairs_are_connected() {
    let style = NeuronConfig::default().connections;
    let particles = vec![at(0.0, 0.0), at(50.0, 0.0), at(200.0, 200.0)];
    let mut rec = Recorder::default();
    let drawn = draw_connections(&particles, &PointerState::default(), &style, ACCENT, &mut rec);
    assert_eq!(drawn, 1);
    let lines = rec.lines();
    assert_eq!(lines.len(), 1);
    let (a, b, stroke) = lines[0];
    assert_eq!((a, b), (DVec2::new(0.0, 0.0), DVec2::new(50.0, 0.0)));
    assert_eq!(stroke.width, style.line_width);
    assert_eq!(stroke.color.rgb, ACCENT);
    assert!((stroke.color.alpha - (1.0 - 50.0 / 160.0) * 0.08).abs() < 1e-12);
}

#[test]
fn pairs_at_the_threshold_are_not_connected() {
    let style = NeuronConfig::default().connections;
    let a = DVec2::ZERO;
    let b = DVec2::new(style.max_distance, 0.0);
    assert_eq!(connection_opacity(a, b, &PointerState::default(), &style), None);
    assert_eq!(connection_opacity(a, b, &PointerState::at(a), &style), None);
}

#[test]
fn opacity_falls_with_distance_when_pointer_is_away() {
    let style = NeuronConfig::default().connections;
    let inactive = PointerState::default();
    let mut prev = f64::INFINITY;
    for step in 0..160 {
        let b = DVec2::new(step as f64, 0.0);
        let o = connection_opacity(DVec2::ZERO, b, &inactive, &style).unwrap_or(0.0);
        assert!(o <= prev, "opacity rose at distance {step}");
        prev = o;
    }
}

#[test]
fn pointer_never_dims_a_connection() {
    let style = NeuronConfig::default().connections;
    let pairs = [
        (DVec2::new(10.0, 10.0), DVec2::new(60.0, 40.0)),
        (DVec2::new(100.0, 100.0), DVec2::new(240.0, 100.0)),
        (DVec2::new(0.0, 0.0), DVec2::new(5.0, 0.0)),
    ];
    for (a, b) in pairs {
        let base = connection_opacity(a, b, &PointerState::default(), &style);
        for px in (0..400).step_by(25) {
            for py in (0..400).step_by(25) {
                let boosted = connection_opacity(
                    a,
                    b,
                    &PointerState::at(DVec2::new(px as f64, py as f64)),
                    &style,
                );
                match (base, boosted) {
                    (Some(lo), Some(hi)) => assert!(hi >= lo),
                    (None, None) => {}
                    other => panic!("connectivity changed with pointer: {other:?}"),
                }
            }
        }
    }
}

#[test]
fn pointer_on_an_endpoint_uses_the_boosted_ceiling() {
    let style = NeuronConfig::default().connections;
    let a = DVec2::new(100.0, 100.0);
    let b = DVec2::new(150.0, 100.0);
    let o = connection_opacity(a, b, &PointerState::at(a), &style).unwrap();
    assert!((o - style.boosted_alpha).abs() < 1e-12);
}

#[test]
fn node_appearance_scales_with_pointer_proximity() {
    let style = NeuronConfig::default().nodes;
    let p = DVec2::new(200.0, 200.0);

    let idle = node_appearance(p, 3.0, &PointerState::default(), &style);
    assert_eq!(idle.radius, 3.0);
    assert_eq!(idle.opacity, style.base_opacity);

    let on_top = node_appearance(p, 3.0, &PointerState::at(p), &style);
    assert!((on_top.radius - (3.0 + style.radius_boost)).abs() < 1e-12);
    assert!((on_top.opacity - 1.0).abs() < 1e-12);

    let half = node_appearance(p, 3.0, &PointerState::at(p + DVec2::new(50.0, 0.0)), &style);
    assert!((half.radius - (3.0 + style.radius_boost * 0.5)).abs() < 1e-12);
    assert!((half.opacity - 0.75).abs() < 1e-12);

    let far = node_appearance(p, 3.0, &PointerState::at(p + DVec2::new(150.0, 0.0)), &style);
    assert_eq!(far.radius, 3.0);
    assert_eq!(far.opacity, style.base_opacity);
}

#[test]
fn nodes_draw_glow_under_core() {
    let style = NeuronConfig::default().nodes;
    let mut particles = vec![at(20.0, 30.0), at(80.0, 30.0)];
    let mut rec = Recorder::default();
    draw_nodes(&mut particles, &PointerState::default(), &style, ACCENT, &mut rec);

    assert_eq!(rec.calls.len(), 4);
    for pair in rec.calls.chunks(2) {
        match (&pair[0], &pair[1]) {
            (Draw::Glow(gc, gr, stops), Draw::Circle(cc, cr, fill)) => {
                assert_eq!(gc, cc);
                assert!((gr - cr * style.glow_scale).abs() < 1e-12);
                assert_eq!(stops.len(), 3);
                assert_eq!(stops[0].color.alpha, fill.alpha);
                assert_eq!(stops[2].offset, 1.0);
                assert_eq!(stops[2].color.alpha, 0.0);
            }
            other => panic!("unexpected draw order: {other:?}"),
        }
    }
}

#[test]
fn rendered_radius_is_recomputed_each_frame() {
    let style = NeuronConfig::default().nodes;
    let mut particles = vec![at(50.0, 50.0)];
    let pointer = PointerState::at(DVec2::new(50.0, 50.0));
    for _ in 0..3 {
        draw_nodes(&mut particles, &pointer, &style, ACCENT, &mut Recorder::default());
        assert!((particles[0].radius - (3.0 + style.radius_boost)).abs() < 1e-12);
    }
    draw_nodes(
        &mut particles,
        &PointerState::default(),
        &style,
        ACCENT,
        &mut Recorder::default(),
    );
    assert_eq!(particles[0].radius, particles[0].base_radius());
}
