use super::color::Rgb;
use super::config::{BackgroundConfig, EffectKind, NeuronConfig};
use super::connections::draw_connections;
use super::field::ParticleField;
use super::grid::GridTwist;
use super::nodes::draw_nodes;
use super::pointer::PointerState;
use super::surface::Surface;

/// A background animation driven one frame at a time.
pub trait Effect {
    /// New surface size. May arrive between any two frames.
    fn resize(&mut self, width: f64, height: f64);

    /// Step the simulation (if any) and draw onto an already cleared surface.
    fn frame(&mut self, pointer: &PointerState, surface: &mut dyn Surface);
}

pub fn build_effect(config: &BackgroundConfig, seed: u64) -> Box<dyn Effect> {
    match config.effect {
        EffectKind::Neuron => Box::new(NeuronNetwork::new(
            config.neuron.clone(),
            config.accent,
            seed,
        )),
        EffectKind::Grid => Box::new(GridTwist::new(config.grid.clone(), config.accent)),
    }
}

/// Particle field plus connection and node rendering.
pub struct NeuronNetwork {
    field: ParticleField,
    accent: Rgb,
}

impl NeuronNetwork {
    pub fn new(config: NeuronConfig, accent: Rgb, seed: u64) -> Self {
        Self {
            field: ParticleField::new(config, seed),
            accent,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut ParticleField {
        &mut self.field
    }
}

impl Effect for NeuronNetwork {
    fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
        log::debug!(
            "[neuron] regenerated {} particles for {}x{}",
            self.field.particles().len(),
            width,
            height
        );
    }

    fn frame(&mut self, pointer: &PointerState, surface: &mut dyn Surface) {
        self.field.advance(pointer);
        let connections = self.field.config().connections;
        let nodes = self.field.config().nodes;
        draw_connections(
            self.field.particles(),
            pointer,
            &connections,
            self.accent,
            surface,
        );
        draw_nodes(
            self.field.particles_mut(),
            pointer,
            &nodes,
            self.accent,
            surface,
        );
    }
}
