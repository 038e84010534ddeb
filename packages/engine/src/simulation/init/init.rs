use crate::core::random::sanitize_seed;
use crate::domain::constants::MAX_PARTICLES;
use crate::domain::SimulationConfig;

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(width: f64, height: f64, config: &SimulationConfig) -> SimulationCore {
    let repellers = config.resolve_repellers(width, height);
    console_log!(
        "simulation {}x{}: {} repellers, cap {} particles, seed {}",
        width,
        height,
        repellers.len(),
        config.max_particles,
        config.seed
    );

    // Configs built in Rust skip `validate`; never reserve past the default cap.
    let reserve = config.max_particles.min(MAX_PARTICLES);

    SimulationCore {
        width,
        height,
        particles: Vec::with_capacity(reserve),
        repellers,
        max_particles: config.max_particles,
        frame: 0,
        rng_state: sanitize_seed(config.seed),
        perf_enabled: config.perf_metrics,
        perf_stats: PerfStats::default(),
        positions: Vec::with_capacity(reserve.saturating_mul(2)),
    }
}
