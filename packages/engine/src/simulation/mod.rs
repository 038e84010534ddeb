//! Simulation - owns the particle collection and the repeller set
//!
//! - init/     - construction from a `SimulationConfig`
//! - step/     - the per-frame tick
//! - commands/ - external edits (add particle, clear)
//! - render/   - flat position buffer for JS-side rendering
//! - perf/     - optional per-tick metrics
//!
//! `SimulationCore` is plain Rust and runs natively; `Simulation` in
//! facade.rs is the wasm-bindgen wrapper handed to JS.

use crate::domain::{Particle, Repeller, SimulationConfig};
use crate::render::{NullSurface, Surface};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// Simulation state for one viewport
pub struct SimulationCore {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    repellers: Vec<Repeller>,
    max_particles: usize,

    // State
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,

    // Render extract buffer
    positions: Vec<f64>,
}

impl SimulationCore {
    /// Create a simulation with the default settings
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_config(width, height, &SimulationConfig::default())
    }

    /// Create a simulation from validated settings
    pub fn with_config(width: f64, height: f64, config: &SimulationConfig) -> Self {
        init::create_simulation_core(width, height, config)
    }

    pub fn width(&self) -> f64 { self.width }

    pub fn height(&self) -> f64 { self.height }

    pub fn particle_count(&self) -> usize { self.particles.len() }

    pub fn repeller_count(&self) -> usize { self.repellers.len() }

    pub fn max_particles(&self) -> usize { self.max_particles }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn particles(&self) -> &[Particle] { &self.particles }

    pub fn repellers(&self) -> &[Repeller] { &self.repellers }

    /// Run one frame, drawing through `surface`
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<(), String> {
        step::tick(self, surface)
    }

    /// Run one frame without drawing anything
    pub fn step(&mut self) {
        // NullSurface never fails
        let _ = step::tick(self, &mut NullSurface);
    }

    /// Add a particle at (x, y) with the usual spawn velocity.
    /// Refused once the particle cap is reached.
    pub fn add_particle(&mut self, x: f64, y: f64) -> bool {
        commands::add_particle(self, x, y)
    }

    /// Drop every particle; repellers stay
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Flat `[x0, y0, x1, y1, ...]` positions in collection order
    pub fn particle_positions(&mut self) -> &[f64] {
        render_extract::extract_positions(self)
    }

    /// Length of the position buffer as last extracted (not refreshed)
    pub fn positions_len(&self) -> usize {
        self.positions.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
