//! Repulse Engine - falling particles and repeller fields in WASM
//!
//! Architecture:
//! - core/       - Logging macros, RNG, vector math
//! - domain/     - Particle, Repeller, settings
//! - render/     - Drawing surfaces (canvas, recording, null)
//! - simulation/ - The per-frame tick and its state
//! - api/        - Public JS API and the animation driver

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod render;
pub mod simulation;
pub mod api;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Repulse WASM engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::animation::{start, start_with_config};
pub use api::wasm::{PerfStats, Simulation};
pub use domain::{Particle, Repeller, SimulationConfig};
pub use simulation::SimulationCore;
