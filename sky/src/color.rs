/// An opaque RGB color. Transparency is passed separately at draw time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const BLACK: Color = Color(0, 0, 0);
    /// The deepest shade a comet can take.
    pub const DEEP_GOLD: Color = Color(212, 175, 55);

    /// Linear interpolation towards `other`, rounded per channel.
    pub fn mix(&self, other: &Color, t: f64) -> Color {
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

        Color(
            lerp(self.0, other.0),
            lerp(self.1, other.1),
            lerp(self.2, other.2),
        )
    }
}

/// Firework colors: gold, red, sky blue, orange, purple, mint, peach and white.
pub const PALETTE: [Color; 8] = [
    Color(255, 215, 0),
    Color(255, 100, 100),
    Color(100, 200, 255),
    Color(255, 150, 50),
    Color(200, 130, 255),
    Color(100, 255, 180),
    Color(255, 200, 150),
    Color(255, 255, 255),
];

/// A radial gradient stop: offset in `[0, 1]`, color and alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop(pub f64, pub Color, pub f64);

impl ColorStop {
    /// Fully transparent stop, used to fade glows out at their rim.
    pub const fn clear(offset: f64) -> ColorStop {
        ColorStop(offset, Color::BLACK, 0.0)
    }
}
