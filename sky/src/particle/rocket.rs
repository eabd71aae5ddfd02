use std::f64::consts::TAU;

use super::{Emissions, FireworkParticle, Particle};
use crate::{Color, ColorStop, Random, Surface, Trail, Viewport, PALETTE};

const LAUNCH_SPREAD: f64 = 60.0;
const LAUNCH_DEPTH: f64 = 10.0;
const SPEED: (f64, f64) = (4.0, 7.0);
const TRAIL_LENGTH: usize = 12;
const HEAD_RADIUS: f64 = 6.0;

const BURST_BASE: usize = 60;
const BURST_SPREAD: f64 = 50.0;
/// White sparks added to every burst on top of the colored fragments.
pub const BURST_SPARKS: usize = 20;

/// Shape of a detonation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BurstSort {
    /// Evenly spaced ring, single color.
    Ring,
    /// Random directions, every fragment its own palette color.
    Scatter,
    /// Random directions, single color.
    Sphere,
}

impl BurstSort {
    fn from_roll(roll: f64) -> BurstSort {
        if roll < 0.3 {
            BurstSort::Ring
        } else if roll < 0.6 {
            BurstSort::Scatter
        } else {
            BurstSort::Sphere
        }
    }
}

/// A shell flying straight at its target, bursting into fragments on arrival.
#[derive(Clone, Debug)]
pub struct FireworkRocket {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    target: (f64, f64),
    speed: f64,
    color: Color,
    trail: Trail,
    detonated: bool,
}

impl FireworkRocket {
    pub fn new<R: Random>(target: (f64, f64), viewport: &Viewport, rng: &mut R) -> FireworkRocket {
        let position = (
            target.0 + rng.jitter(LAUNCH_SPREAD),
            viewport.height + LAUNCH_DEPTH,
        );
        let speed = rng.range(SPEED.0, SPEED.1);
        let angle = (target.1 - position.1).atan2(target.0 - position.0);

        FireworkRocket {
            position,
            velocity: (angle.cos() * speed, angle.sin() * speed),
            target,
            speed,
            color: PALETTE[rng.index(PALETTE.len())],
            trail: Trail::new(TRAIL_LENGTH),
            detonated: false,
        }
    }

    pub fn target(&self) -> (f64, f64) {
        self.target
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    fn distance_to_target(&self) -> f64 {
        (self.position.0 - self.target.0).hypot(self.position.1 - self.target.1)
    }

    /// Bursts into `60..=109` colored fragments plus [`BURST_SPARKS`] white sparks.
    pub fn explode<R: Random>(&self, rng: &mut R) -> Vec<FireworkParticle> {
        let count = BURST_BASE + (rng.random() * BURST_SPREAD) as usize;
        let sort = BurstSort::from_roll(rng.random());

        let mut fragments = Vec::with_capacity(count + BURST_SPARKS);

        for i in 0..count {
            let (angle, speed, color) = match sort {
                BurstSort::Ring => (
                    i as f64 / count as f64 * TAU + rng.jitter(0.3),
                    rng.range(3.0, 5.0),
                    self.color,
                ),
                BurstSort::Scatter => (
                    rng.random() * TAU,
                    rng.range(1.0, 6.0),
                    PALETTE[rng.index(PALETTE.len())],
                ),
                BurstSort::Sphere => (rng.random() * TAU, rng.range(1.0, 5.5), self.color),
            };

            fragments.push(FireworkParticle::new(
                self.position,
                angle,
                speed,
                color,
                false,
                rng,
            ));
        }

        for _ in 0..BURST_SPARKS {
            let angle = rng.random() * TAU;
            let speed = rng.range(0.5, 2.0);

            fragments.push(FireworkParticle::new(
                self.position,
                angle,
                speed,
                Color::WHITE,
                true,
                rng,
            ));
        }

        fragments
    }
}

impl Particle for FireworkRocket {
    fn update<R: Random>(&mut self, rng: &mut R, emissions: &mut Emissions) {
        if self.detonated {
            return;
        }

        self.trail.push(self.position);

        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;

        // Discrete steps may overshoot, so arrival is a proximity test.
        if self.distance_to_target() < self.speed * 2.0 {
            emissions.fragments.append(&mut self.explode(rng));
            self.detonated = true;
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        for (i, point) in self.trail.iter().enumerate() {
            let t = self.trail.fade(i);
            surface.fill_circle(*point, 1.5 * t, self.color, t * 0.6)?;
        }

        surface.fill_radial(
            self.position,
            HEAD_RADIUS,
            &[
                ColorStop(0.0, Color::WHITE, 0.9),
                ColorStop(0.5, self.color, 0.4),
                ColorStop::clear(1.0),
            ],
        )
    }

    fn is_dead(&self) -> bool {
        self.detonated
    }
}
