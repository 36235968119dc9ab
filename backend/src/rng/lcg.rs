//! Linear congruential generator modulo 2^64
//!
//! `state = 6364136223846793005 * state + 1 (mod 2^64)`. The increment is
//! fixed at 1.

use super::{seed_or, BitGenerator, DEFAULT_SEED};

/// Knuth's MMIX multiplier.
pub const LCG_MULTIPLIER: u64 = 6364136223846793005;

/// LCG increment.
pub const LCG_INCREMENT: u64 = 1;

/// Linear congruential generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    /// Create a new generator, falling back to [`DEFAULT_SEED`] for a
    /// missing or zero seed.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            state: seed_or(seed, DEFAULT_SEED),
        }
    }

    /// Current internal state
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BitGenerator for Lcg {
    fn next64(&mut self) -> u64 {
        self.state = LCG_MULTIPLIER
            .wrapping_mul(self.state)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }
}
