//! Test doubles for randomness and drawing.

use crate::{Color, ColorStop, Random, Surface};

/// Yields the given values in order, then repeats the last one forever.
pub struct Sequence {
    values: Vec<f64>,
    next: usize,
}

impl Sequence {
    pub fn new(values: Vec<f64>) -> Sequence {
        assert!(!values.is_empty());
        Sequence { values, next: 0 }
    }
}

impl Random for Sequence {
    fn random(&mut self) -> f64 {
        let value = self.values[self.next.min(self.values.len() - 1)];
        self.next += 1;
        value
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear,
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Line {
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        alpha: f64,
    },
    Radial {
        center: (f64, f64),
        radius: f64,
        stops: Vec<ColorStop>,
    },
}

/// Records draw calls. A failing recorder keeps only the counters and errors
/// on every primitive but `clear`.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    pub clears: usize,
    pub circles: usize,
    pub lines: usize,
    pub radials: usize,
    failing: bool,
}

impl Recorder {
    pub fn failing() -> Recorder {
        Recorder {
            failing: true,
            ..Default::default()
        }
    }

    /// No primitive has been drawn. Clears do not count.
    pub fn is_empty(&self) -> bool {
        self.circles + self.lines + self.radials == 0
    }

    fn record(&mut self, call: Call) -> Result<(), String> {
        if self.failing {
            return Err("surface lost".to_string());
        }

        self.calls.push(call);
        Ok(())
    }
}

impl Surface for Recorder {
    type Error = String;

    fn clear(&mut self) -> Result<(), String> {
        self.clears += 1;
        self.calls.push(Call::Clear);
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: (f64, f64),
        radius: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), String> {
        self.circles += 1;
        self.record(Call::Circle {
            center,
            radius,
            color,
            alpha,
        })
    }

    fn stroke_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        width: f64,
        _: Color,
        alpha: f64,
    ) -> Result<(), String> {
        self.lines += 1;
        self.record(Call::Line {
            from,
            to,
            width,
            alpha,
        })
    }

    fn fill_radial(
        &mut self,
        center: (f64, f64),
        radius: f64,
        stops: &[ColorStop],
    ) -> Result<(), String> {
        self.radials += 1;
        self.record(Call::Radial {
            center,
            radius,
            stops: stops.to_vec(),
        })
    }
}
