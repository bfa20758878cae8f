// Renderer struct that handles the 2d-canvas calls for one frame: wipe the
// buffer, stroke the links between nearby particles, then fill the dots.
// The context is re-acquired each tick so a torn-down canvas shows up as an
// error instead of a stale handle.

use crate::simulation::{link_alpha, Simulation};
use crate::surface::SurfaceError;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct Renderer {
    context: CanvasRenderingContext2d,
}

impl Renderer {
    // Grabs the 2d context from the canvas on the DOM.
    pub fn attach(canvas: &HtmlCanvasElement) -> Result<Renderer, SurfaceError> {
        let context = canvas
            .get_context("2d")
            .map_err(|_| SurfaceError::ContextUnavailable)?
            .ok_or(SurfaceError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::ContextUnavailable)?;
        Ok(Renderer { context })
    }

    pub fn clear(&self, bounds: [f64; 2]) {
        self.context.clear_rect(0.0, 0.0, bounds[0], bounds[1]);
    }

    // One 1px stroked segment per pair closer than the link threshold,
    // fading out linearly with distance. O(n^2) over the set; fine for the
    // low hundreds of particles this runs with.
    pub fn draw_links(&self, simulation: &Simulation) {
        let particles = simulation.particles();
        let config = simulation.config();
        self.context.set_line_width(1.0);
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = &particles[i];
                let b = &particles[j];
                let distance = a.distance_to(b);
                if let Some(alpha) = link_alpha(distance, config.max_distance) {
                    let stroke = config.line_color.rgba(alpha);
                    #[allow(deprecated)]
                    self.context.set_stroke_style(&JsValue::from_str(&stroke));
                    self.context.begin_path();
                    self.context.move_to(a.pos[0], a.pos[1]);
                    self.context.line_to(b.pos[0], b.pos[1]);
                    self.context.stroke();
                }
            }
        }
    }

    pub fn draw_dots(&self, simulation: &Simulation) -> Result<(), JsValue> {
        let config = simulation.config();
        let fill = config.particle_color.rgba(1.0);
        #[allow(deprecated)]
        self.context.set_fill_style(&JsValue::from_str(&fill));
        for particle in simulation.particles() {
            self.context.begin_path();
            self.context.arc(
                particle.pos[0],
                particle.pos[1],
                config.particle_size,
                0.0,
                2.0 * PI,
            )?;
            self.context.fill();
        }
        Ok(())
    }
}
