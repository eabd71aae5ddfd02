//! Particle simulation behind the credits: falling comets shedding sparkles,
//! and a firework barrage set off once the closing section scrolls into view.
//!
//! Nothing here touches the browser. Drawing goes through [`Surface`] and
//! randomness through [`Random`], so a [`Scene`] runs the same natively as it
//! does on a canvas.

mod color;
pub use color::*;

mod config;
pub use config::*;

mod particle;
pub use particle::*;

mod random;
pub use random::*;

mod scene;
pub use scene::*;

mod surface;
pub use surface::*;

mod trail;
pub use trail::*;

#[cfg(test)]
mod testing;
