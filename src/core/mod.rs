pub mod color;
pub mod config;
pub mod connections;
pub mod constants;
pub mod driver;
pub mod effect;
pub mod field;
pub mod force;
pub mod grid;
pub mod nodes;
pub mod particle;
pub mod pointer;
pub mod surface;

pub use color::*;
pub use config::*;
pub use driver::*;
pub use effect::*;
pub use field::ParticleField;
pub use particle::Particle;
pub use pointer::*;
pub use surface::*;
