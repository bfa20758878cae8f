// Animated "particle network" visual: points drift across a canvas, bounce
// off its edges, and link up to nearby neighbors with distance-faded lines.
// The JS host supplies a canvas inside a sized container and owns
// mount/unmount; sizing, seeding, and the frame loop all live here.

pub mod color;
pub mod config;
pub mod particle;
pub mod renderer;
pub mod simulation;
pub mod surface;
mod utils;

pub use crate::color::{Color, ColorError};
pub use crate::config::NetworkConfig;
pub use crate::particle::Particle;
pub use crate::simulation::Simulation;

use crate::renderer::Renderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
    console_log::init_with_level(log::Level::Info).ok();
}

// One running loop instance over one canvas and one immutable config. To
// change a configuration value, cancel this session and build a new one;
// resizes are handled in place by reseeding.
#[wasm_bindgen]
pub struct ParticleNetwork {
    canvas: HtmlCanvasElement,
    simulation: Rc<RefCell<Simulation>>,
    cancelled: Rc<Cell<bool>>,
    raf_handle: Rc<Cell<Option<i32>>>,
    resize_hook: Option<Closure<dyn FnMut()>>,
    started: bool,
}

#[wasm_bindgen]
impl ParticleNetwork {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> ParticleNetwork {
        ParticleNetwork::with_config(canvas, NetworkConfig::default())
    }

    // JS-facing constructor taking the optional knobs. Hex colors are parsed
    // and rejected here, never mid-frame.
    pub fn with_options(
        canvas: HtmlCanvasElement,
        particle_color: Option<String>,
        line_color: Option<String>,
        particle_count: Option<u32>,
        max_distance: Option<f64>,
        particle_size: Option<f64>,
        speed: Option<f64>,
    ) -> Result<ParticleNetwork, JsValue> {
        let config = NetworkConfig::from_options(
            particle_color.as_deref(),
            line_color.as_deref(),
            particle_count,
            max_distance,
            particle_size,
            speed,
        )
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(ParticleNetwork::with_config(canvas, config))
    }

    // Size the canvas, seed the particles, hook the window resize event, and
    // spawn the animation-frame loop.
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.started {
            return Err(JsValue::from_str("particle network already started"));
        }
        if self.cancelled.get() {
            return Err(JsValue::from_str(
                "particle network was cancelled; create a new instance",
            ));
        }
        self.started = true;

        // A canvas with no container yet is not fatal: the loop starts over
        // an empty set and the resize hook seeds once sizing succeeds.
        match surface::fit_to_container(&self.canvas) {
            Ok(viewport) => self
                .simulation
                .borrow_mut()
                .reseed(viewport.width, viewport.height),
            Err(err) => log::warn!("initial seeding skipped: {}", err),
        }

        self.install_resize_hook()?;
        self.spawn_frame_loop()
    }

    // Stop the loop: no further tick runs, any pending frame is revoked, and
    // the resize listener is removed. Safe to call more than once.
    pub fn cancel(&mut self) {
        self.cancelled.set(true);
        if let Some(handle) = self.raf_handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        if let Some(hook) = self.resize_hook.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", hook.as_ref().unchecked_ref());
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.cancelled.get()
    }
}

impl ParticleNetwork {
    pub fn with_config(canvas: HtmlCanvasElement, config: NetworkConfig) -> ParticleNetwork {
        ParticleNetwork {
            canvas,
            simulation: Rc::new(RefCell::new(Simulation::new(config))),
            cancelled: Rc::new(Cell::new(false)),
            raf_handle: Rc::new(Cell::new(None)),
            resize_hook: None,
            started: false,
        }
    }

    // Exactly one resize listener per session; removed again in cancel().
    // Resizing regenerates the whole particle set at the new dimensions.
    fn install_resize_hook(&mut self) -> Result<(), JsValue> {
        let canvas = self.canvas.clone();
        let simulation = Rc::clone(&self.simulation);
        let cancelled = Rc::clone(&self.cancelled);

        let hook = Closure::wrap(Box::new(move || {
            if cancelled.get() {
                return;
            }
            match surface::fit_to_container(&canvas) {
                Ok(viewport) => simulation
                    .borrow_mut()
                    .reseed(viewport.width, viewport.height),
                Err(err) => log::warn!("reseed on resize skipped: {}", err),
            }
        }) as Box<dyn FnMut()>);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.add_event_listener_with_callback("resize", hook.as_ref().unchecked_ref())?;
        self.resize_hook = Some(hook);
        Ok(())
    }

    fn spawn_frame_loop(&mut self) -> Result<(), JsValue> {
        let canvas = self.canvas.clone();
        let simulation = Rc::clone(&self.simulation);
        let cancelled = Rc::clone(&self.cancelled);
        let raf_handle = Rc::clone(&self.raf_handle);

        // The closure holds a handle to itself so each tick can schedule the
        // next one.
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_ref = Rc::clone(&tick);

        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_handle.set(None);
            if cancelled.get() {
                return;
            }

            let renderer = match Renderer::attach(&canvas) {
                Ok(renderer) => renderer,
                Err(err) => {
                    // Torn down mid-flight: go quiet instead of erroring.
                    log::warn!("frame loop stopped: {}", err);
                    return;
                }
            };

            // Clear and bounce against the backing buffer, which the device-
            // pixel-ratio scaling makes larger than the CSS area the set was
            // seeded in.
            let bounds = [f64::from(canvas.width()), f64::from(canvas.height())];
            renderer.clear(bounds);
            {
                let mut simulation = simulation.borrow_mut();
                simulation.step(bounds);
                renderer.draw_links(&simulation);
                if let Err(err) = renderer.draw_dots(&simulation) {
                    log::warn!("frame loop stopped, dot drawing failed: {:?}", err);
                    return;
                }
            }

            let window = match web_sys::window() {
                Some(window) => window,
                None => return,
            };
            if let Some(callback) = tick_ref.borrow().as_ref() {
                match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
                    Ok(handle) => raf_handle.set(Some(handle)),
                    Err(err) => log::warn!("failed to schedule next frame: {:?}", err),
                }
            }
        }) as Box<dyn FnMut()>));

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let first = match tick.borrow().as_ref() {
            Some(callback) => {
                window.request_animation_frame(callback.as_ref().unchecked_ref())?
            }
            None => return Err(JsValue::from_str("frame callback missing")),
        };
        self.raf_handle.set(Some(first));
        Ok(())
    }
}

impl Drop for ParticleNetwork {
    fn drop(&mut self) {
        self.cancel();
    }
}
