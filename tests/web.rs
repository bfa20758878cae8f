// Browser-side checks for the DOM-facing pieces: container sizing, context
// attachment, and session lifecycle. Run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use particle_network::renderer::Renderer;
use particle_network::simulation::Simulation;
use particle_network::surface::{self, SurfaceError};
use particle_network::{NetworkConfig, ParticleNetwork};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

// A canvas inside a 300x150 container appended to the body.
fn mounted_canvas() -> (HtmlElement, HtmlCanvasElement) {
    let container: HtmlElement = document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap();
    container
        .style()
        .set_property("width", "300px")
        .unwrap();
    container
        .style()
        .set_property("height", "150px")
        .unwrap();
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    container.append_child(&canvas).unwrap();
    document().body().unwrap().append_child(&container).unwrap();
    (container, canvas)
}

#[wasm_bindgen_test]
fn sizing_a_detached_canvas_reports_container_unavailable() {
    let canvas: HtmlCanvasElement = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    match surface::fit_to_container(&canvas) {
        Err(SurfaceError::ContainerUnavailable) => {}
        other => panic!("expected ContainerUnavailable, got {:?}", other),
    }
}

#[wasm_bindgen_test]
fn sizing_scales_the_backing_buffer_by_device_pixel_ratio() {
    let (container, canvas) = mounted_canvas();
    let viewport = surface::fit_to_container(&canvas).unwrap();
    assert_eq!(viewport.width, 300.0);
    assert_eq!(viewport.height, 150.0);

    let ratio = web_sys::window().unwrap().device_pixel_ratio();
    assert_eq!(canvas.width(), (300.0 * ratio) as u32);
    assert_eq!(canvas.height(), (150.0 * ratio) as u32);
    assert_eq!(canvas.style().get_property_value("width").unwrap(), "300px");
    container.remove();
}

#[wasm_bindgen_test]
fn an_empty_frame_draws_without_throwing() {
    let (container, canvas) = mounted_canvas();
    let config = NetworkConfig {
        particle_count: 0,
        ..NetworkConfig::default()
    };
    let mut simulation = Simulation::new(config);
    simulation.reseed(300.0, 150.0);

    let renderer = Renderer::attach(&canvas).unwrap();
    let bounds = [f64::from(canvas.width()), f64::from(canvas.height())];
    renderer.clear(bounds);
    simulation.step(bounds);
    renderer.draw_links(&simulation);
    renderer.draw_dots(&simulation).unwrap();
    container.remove();
}

#[wasm_bindgen_test]
fn cancel_is_idempotent_and_survives_a_resize() {
    let (container, canvas) = mounted_canvas();
    let mut session = ParticleNetwork::new(canvas);
    session.start().unwrap();
    assert!(session.is_running());

    session.cancel();
    session.cancel();
    assert!(!session.is_running());

    // A resize after teardown must neither throw nor revive the loop.
    let resize = Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&resize).unwrap();
    assert!(!session.is_running());
    container.remove();
}

#[wasm_bindgen_test]
fn start_refuses_a_second_run() {
    let (container, canvas) = mounted_canvas();
    let mut session = ParticleNetwork::new(canvas);
    session.start().unwrap();
    assert!(session.start().is_err());
    session.cancel();
    assert!(session.start().is_err());
    container.remove();
}
