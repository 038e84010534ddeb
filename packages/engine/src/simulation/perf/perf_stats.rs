use wasm_bindgen::prelude::*;

/// Per-tick counters and timing (all zeros while perf metrics are off)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) particles_spawned: u32,
    pub(super) particles_updated: u32,
    pub(super) particles_removed: u32,
    pub(super) repel_pushes: u32,
    pub(super) particle_count: u32,
    pub(super) repeller_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_spawned(&self) -> u32 { self.particles_spawned }
    #[wasm_bindgen(getter)]
    pub fn particles_updated(&self) -> u32 { self.particles_updated }
    #[wasm_bindgen(getter)]
    pub fn particles_removed(&self) -> u32 { self.particles_removed }
    /// Number of (particle, repeller) pairs that exchanged force
    #[wasm_bindgen(getter)]
    pub fn repel_pushes(&self) -> u32 { self.repel_pushes }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn repeller_count(&self) -> u32 { self.repeller_count }
}
