use crate::core::Vec2;
use crate::render::Surface;

use super::constants::{DEFAULT_REPELLER_RADIUS, REPELLER_COLOR, REPELLER_LINE_WIDTH, REPEL_MARGIN};

/// Static circular field that pushes particles away
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Repeller {
    pos: Vec2,
    radius: f64,
}

impl Repeller {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { pos: Vec2::new(x, y), radius }
    }

    pub fn with_default_radius(x: f64, y: f64) -> Self {
        Self::new(x, y, DEFAULT_REPELLER_RADIUS)
    }

    pub fn x(&self) -> f64 { self.pos.x }

    pub fn y(&self) -> f64 { self.pos.y }

    pub fn pos(&self) -> Vec2 { self.pos }

    pub fn radius(&self) -> f64 { self.radius }

    /// Distance at which the field stops acting (exclusive)
    pub fn influence_radius(&self) -> f64 {
        self.radius + REPEL_MARGIN
    }

    /// Outline of the repeller's drawn radius
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), String> {
        surface.stroke_circle(self.pos.x, self.pos.y, self.radius, REPELLER_COLOR, REPELLER_LINE_WIDTH)
    }
}
