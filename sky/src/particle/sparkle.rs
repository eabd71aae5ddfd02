use super::{Emissions, Particle};
use crate::{Color, Random, Surface};

const SCATTER: f64 = 6.0;
const DRIFT: f64 = 1.5;
const DAMPING: f64 = 0.98;

/// A short-lived glint shed by a comet.
#[derive(Clone, Debug)]
pub struct Sparkle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub life: f64,
    decay: f64,
    size: f64,
    color: Color,
}

impl Sparkle {
    pub fn new<R: Random>(origin: (f64, f64), color: Color, rng: &mut R) -> Sparkle {
        let position = (origin.0 + rng.jitter(SCATTER), origin.1 + rng.jitter(SCATTER));
        let velocity = (rng.jitter(DRIFT), rng.jitter(DRIFT));

        Sparkle {
            position,
            velocity,
            life: rng.range(0.6, 1.0),
            decay: rng.range(0.015, 0.04),
            size: rng.range(0.5, 2.0),
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Particle for Sparkle {
    fn update<R: Random>(&mut self, _: &mut R, _: &mut Emissions) {
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.velocity.0 *= DAMPING;
        self.velocity.1 *= DAMPING;
        self.life -= self.decay;
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.is_dead() {
            return Ok(());
        }

        surface.fill_circle(
            self.position,
            self.size * self.life,
            self.color,
            self.life * self.life,
        )
    }

    fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}
