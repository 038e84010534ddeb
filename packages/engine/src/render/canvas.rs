use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::surface::Surface;

/// Browser 2D canvas backend
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

impl Surface for CanvasSurface {
    fn clear(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), String> {
        self.ctx.clear_rect(x, y, w, h);
        Ok(())
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) -> Result<(), String> {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(color);
        self.ctx.arc(x, y, radius, 0.0, TAU).map_err(js_err)?;
        self.ctx.fill();
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
        self.ctx.begin_path();
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(line_width);
        self.ctx.arc(x, y, radius, 0.0, TAU).map_err(js_err)?;
        self.ctx.stroke();
        Ok(())
    }
}
