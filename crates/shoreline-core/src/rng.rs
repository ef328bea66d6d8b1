//! Random number generator abstraction for determinism.
//!
//! Searches draw every random value through [`DeterministicRng`]. In
//! production that is a [`SeededSequence`] built from the caller's seed; in
//! tests a scripted implementation is injected.

/// Abstraction over random number generation.
pub trait DeterministicRng: Send {
    /// Generate the next `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;
}

/// LCG multiplier.
pub const MULTIPLIER: u64 = 9301;
/// LCG increment.
pub const INCREMENT: u64 = 49297;
/// LCG modulus. Every state lies in `[0, MODULUS)`.
pub const MODULUS: u64 = 233_280;

/// Seeded linear congruential sequence.
///
/// `state = (state * 9301 + 49297) mod 233280`, and each draw is
/// `state / 233280`. These constants are part of the public seed contract:
/// a seed shared in a URL must map to the same location forever, so they
/// must never change.
///
/// The seed is reduced with a Euclidean remainder before the first step.
/// For non-negative seeds this produces exactly the sequence of the raw
/// recurrence; for negative seeds it keeps every draw inside `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SeededSequence {
    state: u64,
}

impl SeededSequence {
    /// Creates a sequence positioned before its first draw.
    #[must_use]
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn new(seed: i64) -> Self {
        // rem_euclid with a positive modulus is always in [0, MODULUS).
        Self {
            state: seed.rem_euclid(MODULUS as i64) as u64,
        }
    }

    /// Returns the current internal state.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl DeterministicRng for SeededSequence {
    #[allow(clippy::cast_precision_loss)]
    fn next_f64(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}
