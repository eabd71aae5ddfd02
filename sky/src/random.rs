use rand_chacha::{rand_core::RngCore, ChaCha8Rng};

/// Source of uniformly distributed values in `[0, 1)`.
pub trait Random {
    fn random(&mut self) -> f64;

    /// Uniform value in `[low, high)`.
    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + self.random() * (high - low)
    }

    /// Centered jitter in `[-spread / 2, spread / 2)`.
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.random() - 0.5) * spread
    }

    /// Uniform index into a collection of length `len`, which must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        ((self.random() * len as f64) as usize).min(len - 1)
    }
}

impl Random for ChaCha8Rng {
    fn random(&mut self) -> f64 {
        // Top 53 bits fill the mantissa exactly.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Always yields the same value. Useful for reproducing a scene exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fixed(pub f64);

impl Random for Fixed {
    fn random(&mut self) -> f64 {
        self.0
    }
}
