//! Typed configuration for the background effects.
//!
//! Every default comes from `constants.rs`. The web front-end layers
//! `data-*` attribute overrides on top through [`BackgroundConfig::apply_override`].

use std::str::FromStr;
use std::time::Duration;

use super::color::Rgb;
use super::constants::*;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("invalid colour `{0}` (expected #rrggbb or r,g,b)")]
    InvalidColor(String),
    #[error("unknown effect `{0}` (expected neuron or grid)")]
    UnknownEffect(String),
    #[error("{0}")]
    OutOfRange(&'static str),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EffectKind {
    #[default]
    Neuron,
    Grid,
}

impl FromStr for EffectKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "neuron" | "network" | "particles" => Ok(EffectKind::Neuron),
            "grid" | "grid-twist" => Ok(EffectKind::Grid),
            other => Err(ConfigError::UnknownEffect(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttractionParams {
    pub radius: f64,
    pub gain: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionStyle {
    pub max_distance: f64,
    pub base_alpha: f64,
    pub pointer_radius: f64,
    pub boosted_alpha: f64,
    pub line_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeStyle {
    pub influence_radius: f64,
    pub radius_boost: f64,
    pub base_opacity: f64,
    pub glow_scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NeuronConfig {
    pub particle_count: usize,
    pub initial_speed: f64,
    pub base_radius_min: f64,
    pub base_radius_max: f64,
    pub damping: f64,
    pub attraction: AttractionParams,
    pub connections: ConnectionStyle,
    pub nodes: NodeStyle,
}

impl Default for NeuronConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            initial_speed: INITIAL_SPEED,
            base_radius_min: BASE_RADIUS_MIN,
            base_radius_max: BASE_RADIUS_MAX,
            damping: DAMPING,
            attraction: AttractionParams {
                radius: ATTRACTION_RADIUS,
                gain: ATTRACTION_GAIN,
            },
            connections: ConnectionStyle {
                max_distance: CONNECTION_MAX_DISTANCE,
                base_alpha: CONNECTION_BASE_ALPHA,
                pointer_radius: CONNECTION_POINTER_RADIUS,
                boosted_alpha: CONNECTION_BOOSTED_ALPHA,
                line_width: CONNECTION_LINE_WIDTH,
            },
            nodes: NodeStyle {
                influence_radius: NODE_INFLUENCE_RADIUS,
                radius_boost: NODE_RADIUS_BOOST,
                base_opacity: NODE_BASE_OPACITY,
                glow_scale: NODE_GLOW_SCALE,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub cell_size: f64,
    pub influence_radius: f64,
    pub twist_strength: f64,
    pub ease_exponent: f64,
    pub cell_alpha: f64,
    pub cell_line_width: f64,
    pub fill_alpha: f64,
    pub fill_every: usize,
    pub guide_alpha: f64,
    pub guide_line_width: f64,
    pub point_radius: f64,
    pub point_alpha: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: GRID_CELL_SIZE,
            influence_radius: GRID_INFLUENCE_RADIUS,
            twist_strength: GRID_TWIST_STRENGTH,
            ease_exponent: GRID_EASE_EXPONENT,
            cell_alpha: GRID_CELL_ALPHA,
            cell_line_width: GRID_CELL_LINE_WIDTH,
            fill_alpha: GRID_FILL_ALPHA,
            fill_every: GRID_FILL_EVERY,
            guide_alpha: GRID_GUIDE_ALPHA,
            guide_line_width: GRID_GUIDE_LINE_WIDTH,
            point_radius: GRID_POINT_RADIUS,
            point_alpha: GRID_POINT_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub effect: EffectKind,
    pub accent: Rgb,
    pub throttle: Duration,
    pub neuron: NeuronConfig,
    pub grid: GridConfig,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            effect: EffectKind::default(),
            accent: Rgb::from_array(ACCENT_RGB),
            throttle: Duration::from_millis(POINTER_THROTTLE_MS),
            neuron: NeuronConfig::default(),
            grid: GridConfig::default(),
        }
    }
}

fn parse_num<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

impl BackgroundConfig {
    /// Apply one `data-*` style override. Keys are the attribute names
    /// without the `data-` prefix, in kebab case.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "effect" => self.effect = value.parse()?,
            "accent" => self.accent = value.parse()?,
            "particles" => self.neuron.particle_count = parse_num(key, value)?,
            "attraction-radius" => self.neuron.attraction.radius = parse_num(key, value)?,
            "connection-distance" => {
                self.neuron.connections.max_distance = parse_num(key, value)?
            }
            "damping" => self.neuron.damping = parse_num(key, value)?,
            "throttle-ms" => self.throttle = Duration::from_millis(parse_num(key, value)?),
            "grid-size" => self.grid.cell_size = parse_num(key, value)?,
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let n = &self.neuron;
        let g = &self.grid;
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if n.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::OutOfRange("particle count must be <= 500"));
        }
        if !(n.damping.is_finite() && n.damping > 0.0 && n.damping <= 1.0) {
            return Err(ConfigError::OutOfRange("damping must be in (0, 1]"));
        }
        if !(n.initial_speed.is_finite() && n.initial_speed >= 0.0) {
            return Err(ConfigError::OutOfRange("initial speed must be >= 0"));
        }
        if !(positive(n.base_radius_min) && n.base_radius_min <= n.base_radius_max) {
            return Err(ConfigError::OutOfRange(
                "base radius range must be positive and ordered",
            ));
        }
        if !positive(n.attraction.radius)
            || !positive(n.connections.max_distance)
            || !positive(n.connections.pointer_radius)
            || !positive(n.nodes.influence_radius)
        {
            return Err(ConfigError::OutOfRange("interaction radii must be > 0"));
        }
        if !positive(g.cell_size) || !positive(g.influence_radius) || g.fill_every == 0 {
            return Err(ConfigError::OutOfRange("grid dimensions must be > 0"));
        }
        if g.cell_size < GRID_MIN_CELL_SIZE {
            return Err(ConfigError::OutOfRange("grid cell size must be >= 4"));
        }
        Ok(())
    }
}
