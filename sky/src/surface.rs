use std::convert::Infallible;

use crate::{Color, ColorStop};

/// Dimensions of the area particles are spawned into.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Viewport {
        Viewport { width, height }
    }
}

/// A 2D drawing target, cleared and redrawn every frame.
///
/// Alphas are in `[0, 1]`. Implementors decide how colors are encoded.
pub trait Surface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn fill_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    /// A single segment with round caps.
    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), Self::Error>;

    /// A disc filled with a radial gradient running from `center` out to `radius`.
    fn fill_radial(
        &mut self,
        center: (f64, f64),
        radius: f64,
        stops: &[ColorStop],
    ) -> Result<(), Self::Error>;
}

/// Discards every draw call. Drives the simulation when nothing is displayed.
pub(crate) struct Headless;

impl Surface for Headless {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_circle(&mut self, _: (f64, f64), _: f64, _: Color, _: f64) -> Result<(), Infallible> {
        Ok(())
    }

    fn stroke_line(
        &mut self,
        _: (f64, f64),
        _: (f64, f64),
        _: f64,
        _: Color,
        _: f64,
    ) -> Result<(), Infallible> {
        Ok(())
    }

    fn fill_radial(&mut self, _: (f64, f64), _: f64, _: &[ColorStop]) -> Result<(), Infallible> {
        Ok(())
    }
}
