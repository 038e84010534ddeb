use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use crate::domain::SimulationConfig;
use crate::render::CanvasSurface;

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation for a viewport of the given size
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    /// Create a simulation from a JSON settings object
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(width: f64, height: f64, json: String) -> Result<Simulation, JsValue> {
        let config = SimulationConfig::from_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self {
            core: SimulationCore::with_config(width, height, &config),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn repeller_count(&self) -> u32 { self.core.repeller_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Advance one frame without drawing
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Advance one frame and draw it on a 2D canvas context
    pub fn render(&mut self, ctx: CanvasRenderingContext2d) -> Result<(), JsValue> {
        let mut surface = CanvasSurface::new(ctx);
        self.core.tick(&mut surface).map_err(|e| JsValue::from_str(&e))
    }

    /// Add a particle at position
    pub fn add_particle(&mut self, x: f64, y: f64) -> bool {
        self.core.add_particle(x, y)
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Copy of the particle positions as `[x0, y0, x1, y1, ...]`
    pub fn particle_positions(&mut self) -> Vec<f64> {
        self.core.particle_positions().to_vec()
    }

    /// Get pointer to the position buffer (valid until the next call that mutates the simulation)
    pub fn positions_ptr(&mut self) -> *const f64 {
        self.core.particle_positions().as_ptr()
    }

    /// Number of f64 values behind the last `positions_ptr`
    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }
}
