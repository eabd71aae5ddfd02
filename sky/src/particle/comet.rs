use super::{Emissions, Particle, Sparkle};
use crate::{Color, ColorStop, Random, Surface, Trail, Viewport};

const TOP_EDGE_CHANCE: f64 = 0.7;
const EDGE_MARGIN: f64 = 10.0;
/// Right-edge spawns are limited to this upper share of the viewport.
const RIGHT_EDGE_SPAN: f64 = 0.4;
const HEADING_DEGREES: (f64, f64) = (215.0, 255.0);
const SPEED: (f64, f64) = (6.0, 14.0);
const DECAY: (f64, f64) = (0.003, 0.007);
const SIZE: (f64, f64) = (2.0, 4.0);
const TAIL_LENGTH: usize = 25;
const TAIL_SPREAD: f64 = 35.0;
const SPARKLE_CHANCE: f64 = 0.4;
const SPARKLE_MIN_LIFE: f64 = 0.2;

/// A streaking light falling diagonally across the sky, shedding sparkles.
#[derive(Clone, Debug)]
pub struct Comet {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub life: f64,
    decay: f64,
    size: f64,
    color: Color,
    trail: Trail,
}

impl Comet {
    pub fn new<R: Random>(viewport: &Viewport, rng: &mut R) -> Comet {
        let position = if rng.random() < TOP_EDGE_CHANCE {
            (rng.random() * viewport.width, -EDGE_MARGIN)
        } else {
            (
                viewport.width + EDGE_MARGIN,
                rng.random() * viewport.height * RIGHT_EDGE_SPAN,
            )
        };

        let angle = rng.range(HEADING_DEGREES.0, HEADING_DEGREES.1).to_radians();
        let speed = rng.range(SPEED.0, SPEED.1);

        let decay = rng.range(DECAY.0, DECAY.1);
        let size = rng.range(SIZE.0, SIZE.1);
        let tail_length = TAIL_LENGTH + (rng.random() * TAIL_SPREAD) as usize;
        let color = Color::WHITE.mix(&Color::DEEP_GOLD, rng.random());

        Comet {
            position,
            // Screen y grows downward, so the heading's sine is flipped.
            velocity: (angle.cos() * speed, -angle.sin() * speed),
            life: 1.0,
            decay,
            size,
            color,
            trail: Trail::new(tail_length),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

impl Particle for Comet {
    fn update<R: Random>(&mut self, rng: &mut R, emissions: &mut Emissions) {
        self.trail.push(self.position);

        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.life -= self.decay;

        if rng.random() < SPARKLE_CHANCE && self.life > SPARKLE_MIN_LIFE {
            emissions
                .sparkles
                .push(Sparkle::new(self.position, self.color, rng));
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.is_dead() {
            return Ok(());
        }

        for (i, newer, older) in self.trail.segments() {
            let t = self.trail.fade(i);

            surface.stroke_line(
                newer,
                older,
                self.size * t,
                self.color,
                t * t * self.life * 0.8,
            )?;
        }

        surface.fill_radial(
            self.position,
            self.size * 8.0 * self.life,
            &[
                ColorStop(0.0, self.color, 0.3 * self.life),
                ColorStop(0.4, self.color, 0.1 * self.life),
                ColorStop::clear(1.0),
            ],
        )?;

        surface.fill_radial(
            self.position,
            self.size * 2.0 * self.life,
            &[
                ColorStop(0.0, Color::WHITE, self.life),
                ColorStop(0.5, self.color, self.life * 0.8),
                ColorStop::clear(1.0),
            ],
        )?;

        Ok(())
    }

    fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}
