//! Public JS API

pub mod animation;

pub mod wasm {
    pub use crate::simulation::{PerfStats, Simulation};
}
