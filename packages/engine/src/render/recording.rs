use super::surface::Surface;

/// A single captured draw call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear { x: f64, y: f64, w: f64, h: f64 },
    FillCircle { x: f64, y: f64, radius: f64, color: String },
    StrokeCircle { x: f64, y: f64, radius: f64, color: String, line_width: f64 },
}

/// Surface that records every call in order
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), String> {
        self.commands.push(DrawCommand::Clear { x, y, w, h });
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) -> Result<(), String> {
        self.commands.push(DrawCommand::FillCircle {
            x,
            y,
            radius,
            color: color.to_string(),
        });
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: &str,
        line_width: f64,
    ) -> Result<(), String> {
        self.commands.push(DrawCommand::StrokeCircle {
            x,
            y,
            radius,
            color: color.to_string(),
            line_width,
        });
        Ok(())
    }
}
