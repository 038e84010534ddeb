//! Physics and presentation constants

/// Downward acceleration added to vy every frame
pub const GRAVITY: f64 = 0.05;

/// Particle radius (drawing units)
pub const PARTICLE_RADIUS: f64 = 3.0;

/// Base fall speed of a freshly spawned particle
pub const SPAWN_SPEED_MIN: f64 = 1.0;
/// Random extra fall speed, scaled by a [0, 1) sample
pub const SPAWN_SPEED_JITTER: f64 = 2.0;

/// Default live particle cap
pub const MAX_PARTICLES: usize = 300;
/// Largest cap a configuration may ask for
pub const MAX_PARTICLES_LIMIT: usize = 100_000;

/// Distance below the viewport after which a particle is dropped
pub const OFFSCREEN_MARGIN: f64 = 100.0;

/// Repeller field reaches this far past its drawn radius
pub const REPEL_MARGIN: f64 = 50.0;
/// Numerator of the inverse-square repel force
pub const REPEL_STRENGTH: f64 = 100.0;
/// Closer than this the repeller is ignored (singularity guard)
pub const REPEL_MIN_DISTANCE: f64 = 0.1;

pub const DEFAULT_REPELLER_RADIUS: f64 = 50.0;

pub const PARTICLE_COLOR: &str = "white";
pub const REPELLER_COLOR: &str = "rgba(255, 100, 100, 0.2)";
pub const REPELLER_LINE_WIDTH: f64 = 3.0;
