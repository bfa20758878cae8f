// Simple particle struct to keep track of individual position and velocity

use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
}

impl Particle {
    // Random position inside the seeding area, velocity uniform in
    // [-speed/2, speed/2] on each axis.
    pub fn random<R: Rng>(width: f64, height: f64, speed: f64, rng: &mut R) -> Particle {
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                (rng.gen::<f64>() - 0.5) * speed,
                (rng.gen::<f64>() - 0.5) * speed,
            ],
        }
    }

    // Advance one frame, flipping the velocity sign on any axis whose
    // position has left [0, bound]. The position itself is not clamped, so a
    // particle can overshoot the edge by one frame's travel before it turns
    // around.
    pub fn advance(&mut self, bounds: [f64; 2]) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];

        if self.pos[0] < 0.0 || self.pos[0] > bounds[0] {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < 0.0 || self.pos[1] > bounds[1] {
            self.vel[1] = -self.vel[1];
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        let dx = self.pos[0] - other.pos[0];
        let dy = self.pos[1] - other.pos[1];
        dx.hypot(dy)
    }
}
