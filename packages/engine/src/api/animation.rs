//! requestAnimationFrame driver
//!
//! Sizes the canvas to the window once, then ticks the simulation on every
//! display frame. The loop has no stop condition; the callback re-schedules
//! itself from inside its own body, so exactly one frame request is
//! pending at any time.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::domain::SimulationConfig;
use crate::render::CanvasSurface;
use crate::simulation::SimulationCore;

/// Start the default simulation on the canvas with the given element id
#[wasm_bindgen]
pub fn start(canvas_id: &str) -> Result<(), JsValue> {
    run(canvas_id, SimulationConfig::default())
}

/// Start a simulation configured by a JSON settings object
#[wasm_bindgen(js_name = startWithConfig)]
pub fn start_with_config(canvas_id: &str, json: &str) -> Result<(), JsValue> {
    let config = SimulationConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
    run(canvas_id, config)
}

fn run(canvas_id: &str, config: SimulationConfig) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let canvas = find_canvas(&window, canvas_id)?;

    // Viewport size is read once; resizing is not tracked.
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;

    let sim = SimulationCore::with_config(width, height, &config);
    let surface = CanvasSurface::new(ctx);
    console_log!("animation started on #{}", canvas_id);

    animate(window, sim, surface)
}

fn find_canvas(window: &Window, canvas_id: &str) -> Result<HtmlCanvasElement, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    let element = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", canvas_id)))?;
    element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| JsValue::from_str(&format!("#{} is not a canvas", canvas_id)))
}

fn request_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

fn animate(window: Window, mut sim: SimulationCore, mut surface: CanvasSurface) -> Result<(), JsValue> {
    // The closure owns a handle to itself so it can re-register each frame.
    let frame_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let self_ref = frame_cb.clone();
    let loop_window = window.clone();

    *frame_cb.borrow_mut() = Some(Closure::new(move || {
        if let Err(e) = sim.tick(&mut surface) {
            console_error!("tick {} failed: {}", sim.frame(), e);
        }

        if let Some(cb) = self_ref.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, cb) {
                console_error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }));

    let first = frame_cb.borrow();
    let scheduled = match first.as_ref() {
        Some(cb) => request_frame(&window, cb).map(|_| ()),
        None => Err(JsValue::from_str("animation callback missing")),
    };
    scheduled
}
