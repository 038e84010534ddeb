use crate::core::random::next_f64;
use crate::domain::Particle;
use crate::render::Surface;

use super::{PerfTimer, SimulationCore};

/// One frame: clear, spawn, update/draw/prune particles, draw repellers.
///
/// Physics always runs to the end of the frame. A failed draw call does not
/// stop it; the first drawing error is returned once the frame is complete.
pub(super) fn tick<S: Surface + ?Sized>(sim: &mut SimulationCore, surface: &mut S) -> Result<(), String> {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let mut draw_err: Option<String> = None;
    note_err(&mut draw_err, surface.clear(0.0, 0.0, sim.width, sim.height));

    let spawned = spawn(sim);

    // Walk backwards so removing index i never shifts a particle we have
    // yet to visit.
    let updated = sim.particles.len();
    let mut removed = 0u32;
    let mut pushes = 0u32;
    for i in (0..sim.particles.len()).rev() {
        let particle = &mut sim.particles[i];
        pushes += particle.update_counted(&sim.repellers);
        note_err(&mut draw_err, particle.draw(surface));

        if particle.is_off_screen(sim.height) {
            sim.particles.remove(i);
            removed += 1;
        }
    }

    for repeller in &sim.repellers {
        note_err(&mut draw_err, repeller.draw(surface));
    }

    if let Some(start) = step_start {
        let stats = &mut sim.perf_stats;
        stats.step_ms = start.elapsed_ms();
        stats.particles_spawned = spawned as u32;
        stats.particles_updated = updated as u32;
        stats.particles_removed = removed;
        stats.repel_pushes = pushes;
        stats.particle_count = sim.particles.len() as u32;
        stats.repeller_count = sim.repellers.len() as u32;
    }

    sim.frame += 1;
    match draw_err {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Keep the first error, drop the rest
fn note_err(slot: &mut Option<String>, result: Result<(), String>) {
    if let Err(e) = result {
        slot.get_or_insert(e);
    }
}

/// Add one particle along the top edge if below the cap.
fn spawn(sim: &mut SimulationCore) -> bool {
    if sim.particles.len() >= sim.max_particles {
        return false;
    }
    let x = next_f64(&mut sim.rng_state) * sim.width;
    sim.particles.push(Particle::new(x, 0.0, &mut sim.rng_state));
    true
}
