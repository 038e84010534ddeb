//! Domain - particles, repellers and their settings

pub mod config;
pub mod constants;
pub mod particle;
pub mod repeller;

pub use config::{RepellerConfig, SimulationConfig};
pub use particle::{repel_force, Particle};
pub use repeller::Repeller;
