// Owns the particle set and the per-frame physics. Rendering stays out of
// this module so the same core runs under native tests.

use crate::config::NetworkConfig;
use crate::particle::Particle;
use rand::Rng;

pub struct Simulation {
    config: NetworkConfig,
    particles: Vec<Particle>,
}

impl Simulation {
    pub fn new(config: NetworkConfig) -> Simulation {
        Simulation {
            config,
            particles: Vec::new(),
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    // Throw away the current set and seed a fresh one across the given
    // CSS-pixel area. Runs at start and again after every resize.
    pub fn reseed(&mut self, width: f64, height: f64) {
        let mut rng = rand::thread_rng();
        self.reseed_with(width, height, &mut rng);
    }

    pub fn reseed_with<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        let count = self.config.particle_count as usize;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            self.particles
                .push(Particle::random(width, height, self.config.speed, rng));
        }
    }

    // Advance every particle one frame. `bounds` is the backing-buffer size,
    // which on dense displays is larger than the CSS area the set was seeded
    // in; particles drift out of the seeded region before their first bounce.
    pub fn step(&mut self, bounds: [f64; 2]) {
        for particle in &mut self.particles {
            particle.advance(bounds);
        }
    }
}

/// Opacity for a line between two particles `distance` apart: 1 at zero
/// distance, fading linearly to nothing at `max_distance`. The comparison is
/// strict, so a pair exactly at the threshold draws no line.
pub fn link_alpha(distance: f64, max_distance: f64) -> Option<f64> {
    if distance < max_distance {
        Some(1.0 - distance / max_distance)
    } else {
        None
    }
}
