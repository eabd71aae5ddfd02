mod comet;
mod fragment;
mod rocket;
mod sparkle;

pub use comet::*;
pub use fragment::*;
pub use rocket::*;
pub use sparkle::*;

use crate::{Random, Surface};

/// Shared contract of everything the scene simulates.
pub trait Particle {
    /// Advances one step. Anything spawned as a side effect goes into `emissions`.
    fn update<R: Random>(&mut self, rng: &mut R, emissions: &mut Emissions);

    fn draw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error>;

    fn is_dead(&self) -> bool;
}

/// Particles spawned during a scan, appended to their collections once the
/// scan that produced them is over.
#[derive(Default)]
pub struct Emissions {
    pub sparkles: Vec<Sparkle>,
    pub fragments: Vec<FireworkParticle>,
}

impl Emissions {
    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty() && self.fragments.is_empty()
    }
}
