/// Drawing operations consumed by the simulation.
///
/// Colors are CSS color strings, the same values a canvas `fillStyle` /
/// `strokeStyle` accepts.
pub trait Surface {
    /// Clear the rectangle at (x, y) with size (w, h)
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), String>;

    /// Fill a full circle
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) -> Result<(), String>;

    /// Stroke the outline of a full circle
    fn stroke_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: &str,
        line_width: f64,
    ) -> Result<(), String>;
}

/// Surface that discards everything (headless stepping)
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _x: f64, _y: f64, _w: f64, _h: f64) -> Result<(), String> {
        Ok(())
    }

    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: &str) -> Result<(), String> {
        Ok(())
    }

    fn stroke_circle(
        &mut self,
        _x: f64,
        _y: f64,
        _radius: f64,
        _color: &str,
        _line_width: f64,
    ) -> Result<(), String> {
        Ok(())
    }
}
