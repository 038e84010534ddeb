use super::SimulationCore;

/// Refill the flat `[x0, y0, x1, y1, ...]` buffer from the live particles
pub(super) fn extract_positions(sim: &mut SimulationCore) -> &[f64] {
    sim.positions.clear();
    for p in &sim.particles {
        sim.positions.push(p.pos.x);
        sim.positions.push(p.pos.y);
    }
    &sim.positions
}
