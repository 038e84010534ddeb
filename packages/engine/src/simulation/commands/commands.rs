use crate::domain::Particle;

use super::SimulationCore;

pub(super) fn add_particle(sim: &mut SimulationCore, x: f64, y: f64) -> bool {
    if sim.particles.len() >= sim.max_particles {
        return false;
    }
    if !x.is_finite() || !y.is_finite() {
        return false;
    }

    sim.particles.push(Particle::new(x, y, &mut sim.rng_state));
    true
}

pub(super) fn clear(sim: &mut SimulationCore) {
    sim.particles.clear();
    sim.positions.clear();
    sim.perf_stats.reset();
    sim.frame = 0;
}
