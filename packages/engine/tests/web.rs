//! Browser tests: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use repulse_engine::Simulation;

wasm_bindgen_test_configure!(run_in_browser);

fn context_2d(width: u32, height: u32) -> CanvasRenderingContext2d {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
        .get_context("2d")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap()
}

#[wasm_bindgen_test]
fn renders_frames_on_a_canvas() {
    let ctx = context_2d(320, 240);
    // No repellers: nothing can be flung off-screen within 30 frames.
    let mut sim = Simulation::with_config(320.0, 240.0, r#"{ "repellers": [] }"#.to_string()).unwrap();
    for _ in 0..30 {
        sim.render(ctx.clone()).unwrap();
    }
    assert_eq!(sim.particle_count(), 30);
    assert_eq!(sim.frame(), 30);
}

#[wasm_bindgen_test]
fn bad_config_throws() {
    assert!(Simulation::with_config(100.0, 100.0, "{ \"max_particles\": 0 }".to_string()).is_err());
}
