use repulse_engine::Simulation;

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(1280.0, 720.0);
    sim.enable_perf_metrics(true);
    for _ in 0..600 {
        sim.step();
    }
    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.repeller_count(), 2);
    assert_eq!(stats.particle_count(), sim.particle_count());
    assert!(sim.particle_count() <= 300);
    assert_eq!(sim.frame(), 600);
}
