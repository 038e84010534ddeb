use crate::core::random::next_f64;
use crate::core::Vec2;
use crate::render::Surface;

use super::constants::{
    GRAVITY, OFFSCREEN_MARGIN, PARTICLE_COLOR, PARTICLE_RADIUS, REPEL_MIN_DISTANCE, REPEL_STRENGTH,
    SPAWN_SPEED_JITTER, SPAWN_SPEED_MIN,
};
use super::repeller::Repeller;

/// A falling point mass
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Canvas position (y grows downward)
    pub pos: Vec2,
    /// Velocity (units per frame)
    pub velocity: Vec2,
}

impl Particle {
    /// Spawn at (x, y) with no sideways speed and a jittered fall speed.
    /// The jitter is drawn once here and never re-applied.
    pub fn new(x: f64, y: f64, rng: &mut u32) -> Self {
        let vy = next_f64(rng) * SPAWN_SPEED_JITTER + SPAWN_SPEED_MIN;
        Self::with_velocity(x, y, 0.0, vy)
    }

    pub fn with_velocity(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            velocity: Vec2::new(vx, vy),
        }
    }

    pub fn radius(&self) -> f64 {
        PARTICLE_RADIUS
    }

    /// Advance one frame: gravity, repeller forces, then Euler integration.
    pub fn update(&mut self, repellers: &[Repeller]) {
        self.update_counted(repellers);
    }

    /// Same as `update`, returns how many repellers pushed the particle.
    pub(crate) fn update_counted(&mut self, repellers: &[Repeller]) -> u32 {
        self.velocity.y += GRAVITY;

        // Position is untouched until integration, so every repeller sees
        // the same start-of-frame offset.
        let mut pushes = 0;
        for repeller in repellers {
            if let Some(push) = repel_force(self.pos, repeller) {
                self.velocity += push;
                pushes += 1;
            }
        }

        self.pos += self.velocity;
        pushes
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        surface.fill_circle(self.pos.x, self.pos.y, PARTICLE_RADIUS, PARTICLE_COLOR)
    }

    pub fn is_off_screen(&self, viewport_height: f64) -> bool {
        self.pos.y > viewport_height + OFFSCREEN_MARGIN
    }
}

/// Velocity change a repeller imparts on a particle at `pos`, or `None`
/// when the particle is out of range or sitting on the center.
#[inline]
pub fn repel_force(pos: Vec2, repeller: &Repeller) -> Option<Vec2> {
    let offset = pos - repeller.pos();
    let dist = offset.length();

    if dist < repeller.influence_radius() && dist > REPEL_MIN_DISTANCE {
        let force = REPEL_STRENGTH / (dist * dist);
        Some(Vec2::from_polar(force, offset.angle()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::DEFAULT_SEED;
    use crate::render::{DrawCommand, RecordingSurface};

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn gravity_only_without_repellers() {
        let mut p = Particle::with_velocity(10.0, 20.0, 0.5, 1.5);
        p.update(&[]);

        assert!(approx(p.velocity.y, 1.55));
        assert_eq!(p.velocity.x, 0.5);
        assert!(approx(p.pos.x, 10.5));
        assert!(approx(p.pos.y, 21.55));
    }

    #[test]
    fn spawn_jitter_is_within_range() {
        let mut rng = DEFAULT_SEED;
        for _ in 0..1000 {
            let p = Particle::new(0.0, 0.0, &mut rng);
            assert_eq!(p.velocity.x, 0.0);
            assert!(p.velocity.y >= 1.0 && p.velocity.y < 3.0);
        }
    }

    #[test]
    fn force_is_inverse_square_and_points_away() {
        let repeller = Repeller::new(0.0, 0.0, 50.0);
        // 3-4-5 triangle, distance 50 < 100
        let pos = Vec2::new(30.0, 40.0);
        let push = repel_force(pos, &repeller).expect("in range");

        let expected = 100.0 / (50.0 * 50.0);
        assert!(approx(push.length(), expected));
        assert!(approx(push.x, expected * 0.6));
        assert!(approx(push.y, expected * 0.8));
    }

    #[test]
    fn update_applies_force_on_top_of_gravity() {
        let repeller = Repeller::new(100.0, 100.0, 50.0);
        let mut p = Particle::with_velocity(100.0, 90.0, 0.0, 0.0);
        p.update(&[repeller]);

        // Sitting 10 above the center: pushed straight up with force 1.
        let force = 100.0 / 100.0;
        assert!(approx(p.velocity.x, 0.0));
        assert!(approx(p.velocity.y, 0.05 - force));
        assert!(approx(p.pos.y, 90.0 + 0.05 - force));
    }

    #[test]
    fn no_force_at_or_beyond_influence_radius() {
        let repeller = Repeller::new(0.0, 0.0, 50.0);
        assert!(repel_force(Vec2::new(100.0, 0.0), &repeller).is_none());
        assert!(repel_force(Vec2::new(0.0, 150.0), &repeller).is_none());
        assert!(repel_force(Vec2::new(99.9, 0.0), &repeller).is_some());
    }

    #[test]
    fn no_force_near_center() {
        let repeller = Repeller::new(5.0, 5.0, 50.0);
        assert!(repel_force(Vec2::new(5.0, 5.0), &repeller).is_none());
        assert!(repel_force(Vec2::new(5.1, 5.0), &repeller).is_none());
        assert!(repel_force(Vec2::new(5.2, 5.0), &repeller).is_some());

        let mut p = Particle::with_velocity(5.0, 5.0, 0.0, 1.0);
        p.update(&[repeller]);
        assert!(approx(p.velocity.y, 1.05));
        assert_eq!(p.velocity.x, 0.0);
    }

    #[test]
    fn forces_from_several_repellers_add_up() {
        let left = Repeller::new(-20.0, 0.0, 50.0);
        let right = Repeller::new(20.0, 0.0, 50.0);
        let mut p = Particle::with_velocity(0.0, 0.0, 0.0, 0.0);
        let pushes = p.update_counted(&[left, right]);

        // Equal and opposite horizontal pushes cancel.
        assert_eq!(pushes, 2);
        assert!(approx(p.velocity.x, 0.0));
        assert!(approx(p.velocity.y, 0.05));

        let mut q = Particle::with_velocity(0.0, 0.0, 0.0, 0.0);
        q.update(&[left, left]);
        assert!(approx(q.velocity.x, 2.0 * 100.0 / 400.0));
    }

    #[test]
    fn repeller_out_of_range_leaves_spawned_particle_alone() {
        // (50, 0) is ~111.8 from (100, 100), beyond 50 + 50.
        let repeller = Repeller::new(100.0, 100.0, 50.0);
        let mut p = Particle::with_velocity(50.0, 0.0, 0.0, 0.0);
        p.update(&[repeller]);

        assert_eq!(p.velocity.x, 0.0);
        assert!(approx(p.velocity.y, 0.05));
        assert!(approx(p.pos.x, 50.0));
        assert!(approx(p.pos.y, 0.05));
    }

    #[test]
    fn off_screen_is_strictly_past_margin() {
        let height = 600.0;
        assert!(!Particle::with_velocity(0.0, 700.0, 0.0, 0.0).is_off_screen(height));
        assert!(Particle::with_velocity(0.0, 700.001, 0.0, 0.0).is_off_screen(height));
        assert!(!Particle::with_velocity(0.0, -50.0, 0.0, 0.0).is_off_screen(height));
    }

    #[test]
    fn draws_white_filled_circle() {
        let p = Particle::with_velocity(12.0, 34.0, 0.0, 0.0);
        let mut surface = RecordingSurface::new();
        p.draw(&mut surface).unwrap();

        assert_eq!(
            surface.commands(),
            &[DrawCommand::FillCircle {
                x: 12.0,
                y: 34.0,
                radius: 3.0,
                color: "white".to_string(),
            }]
        );
    }
}
