use super::{Emissions, Particle};
use crate::{Color, ColorStop, Random, Surface, Trail};

const GRAVITY: (f64, f64) = (0.03, 0.05);
/// Below this life, fragments start flickering out.
const TWINKLE_LIFE: f64 = 0.3;
const TWINKLE_CHANCE: f64 = 0.1;
const TWINKLE_PENALTY: f64 = 0.05;

/// A single piece of a firework burst.
#[derive(Clone, Debug)]
pub struct FireworkParticle {
    pub position: (f64, f64),
    pub velocity: (f64, f64),
    pub life: f64,
    gravity: f64,
    friction: f64,
    decay: f64,
    size: f64,
    color: Color,
    spark: bool,
    trail: Trail,
}

impl FireworkParticle {
    pub fn new<R: Random>(
        origin: (f64, f64),
        angle: f64,
        speed: f64,
        color: Color,
        spark: bool,
        rng: &mut R,
    ) -> FireworkParticle {
        let gravity = rng.range(GRAVITY.0, GRAVITY.1);

        let (friction, life, decay, size, trail_length) = if spark {
            (0.96, 0.6, 0.02, rng.range(0.5, 1.5), 4)
        } else {
            let life = rng.range(0.8, 1.3);
            let decay = rng.range(0.006, 0.014);
            (0.975, life, decay, rng.range(1.5, 3.5), 8)
        };

        FireworkParticle {
            position: origin,
            velocity: (angle.cos() * speed, angle.sin() * speed),
            life,
            gravity,
            friction,
            decay,
            size,
            color,
            spark,
            trail: Trail::new(trail_length),
        }
    }

    pub fn is_spark(&self) -> bool {
        self.spark
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

impl Particle for FireworkParticle {
    fn update<R: Random>(&mut self, rng: &mut R, _: &mut Emissions) {
        self.trail.push(self.position);

        self.velocity.1 += self.gravity;
        self.velocity.0 *= self.friction;
        self.velocity.1 *= self.friction;
        self.position.0 += self.velocity.0;
        self.position.1 += self.velocity.1;
        self.life -= self.decay;

        if self.life < TWINKLE_LIFE && rng.random() < TWINKLE_CHANCE {
            self.life -= TWINKLE_PENALTY;
        }
    }

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        if self.is_dead() {
            return Ok(());
        }

        let alpha = self.life * self.life;

        if !self.spark {
            for (i, newer, older) in self.trail.segments() {
                let t = self.trail.fade(i);

                surface.stroke_line(
                    newer,
                    older,
                    self.size * t * self.life,
                    self.color,
                    t * alpha * 0.4,
                )?;
            }
        }

        surface.fill_radial(
            self.position,
            self.size * 3.0 * self.life,
            &[
                ColorStop(0.0, self.color, alpha * 0.6),
                ColorStop::clear(1.0),
            ],
        )?;

        surface.fill_circle(self.position, self.size * self.life, self.color, alpha)
    }

    fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    use super::*;
    use crate::{testing::Recorder, Fixed};

    fn fragment(spark: bool, rng: &mut impl Random) -> FireworkParticle {
        FireworkParticle::new((0.0, 0.0), 0.0, 3.0, Color(255, 100, 100), spark, rng)
    }

    #[test]
    fn spark_and_regular_presets() {
        let spark = fragment(true, &mut Fixed(0.5));
        assert_eq!(spark.life, 0.6);
        assert_eq!(spark.decay, 0.02);
        assert_eq!(spark.friction, 0.96);
        assert_eq!(spark.trail().capacity(), 4);
        assert_eq!(spark.size(), 1.0);

        let regular = fragment(false, &mut Fixed(0.5));
        assert!((regular.life - 1.05).abs() < 1e-12);
        assert_eq!(regular.friction, 0.975);
        assert_eq!(regular.trail().capacity(), 8);
        assert_eq!(regular.size(), 2.5);
        assert!((regular.decay - 0.01).abs() < 1e-12);
    }

    #[test]
    fn gravity_accumulates_and_friction_slows() {
        let mut particle = FireworkParticle::new(
            (0.0, 0.0),
            -PI / 2.0,
            4.0,
            Color::WHITE,
            false,
            &mut Fixed(0.5),
        );
        let mut previous = particle.velocity.1;

        for _ in 0..100 {
            particle.update(&mut Fixed(0.5), &mut Emissions::default());
            assert!(particle.velocity.1 > previous);
            previous = particle.velocity.1;
        }

        assert!(particle.velocity.1 > 0.0);
    }

    #[test]
    fn life_only_decreases_with_bounded_twinkle() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        for spark in [true, false] {
            let mut particle = fragment(spark, &mut rng);

            while !particle.is_dead() {
                let before = particle.life;
                particle.update(&mut rng, &mut Emissions::default());
                let drop = before - particle.life;

                assert!(drop > 0.0);
                assert!(drop <= particle.decay + TWINKLE_PENALTY + 1e-12);
                assert!(particle.trail().len() <= particle.trail().capacity());

                if before - particle.decay >= TWINKLE_LIFE {
                    assert!((drop - particle.decay).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn twinkle_needs_low_life_and_low_roll() {
        let mut particle = fragment(true, &mut Fixed(0.5));
        particle.life = 0.25;
        particle.update(&mut Fixed(0.05), &mut Emissions::default());
        assert!((particle.life - (0.25 - 0.02 - 0.05)).abs() < 1e-12);

        particle.life = 0.25;
        particle.update(&mut Fixed(0.5), &mut Emissions::default());
        assert!((particle.life - 0.23).abs() < 1e-12);
    }

    #[test]
    fn sparks_skip_trail_rendering() {
        let mut spark = fragment(true, &mut Fixed(0.5));
        let mut regular = fragment(false, &mut Fixed(0.5));

        for _ in 0..3 {
            spark.update(&mut Fixed(0.5), &mut Emissions::default());
            regular.update(&mut Fixed(0.5), &mut Emissions::default());
        }

        let mut recorder = Recorder::default();
        spark.draw(&mut recorder).unwrap();
        assert_eq!((recorder.lines, recorder.radials, recorder.circles), (0, 1, 1));

        let mut recorder = Recorder::default();
        regular.draw(&mut recorder).unwrap();
        assert_eq!((recorder.lines, recorder.radials, recorder.circles), (2, 1, 1));

        regular.life = -0.01;
        let mut recorder = Recorder::default();
        regular.draw(&mut recorder).unwrap();
        assert!(recorder.is_empty());
    }
}
