//! Drawing surfaces
//!
//! - surface   - the `Surface` trait and a no-op backend
//! - canvas    - `CanvasRenderingContext2d` backend (browser)
//! - recording - captures draw calls for tests and inspection

mod canvas;
mod recording;
mod surface;

pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{NullSurface, Surface};
