//! Classic 64-bit xorshift generator
//!
//! # Algorithm
//!
//! Three XOR-with-shifted-self steps with shift amounts 13 (left),
//! 7 (right) and 17 (left). The returned word is the new state.
//!
//! # Determinism
//!
//! Same seed → same sequence. A zero state is a fixed point, so a zero
//! seed is replaced by [`DEFAULT_SEED`].

use super::{seed_or, BitGenerator, DEFAULT_SEED};

/// Xorshift generator with 13/7/17 shifts
///
/// # Example
/// ```
/// use randprime_core::rng::{BitGenerator, Xorshift};
///
/// let mut rng = Xorshift::new(Some(12345));
/// let value = rng.next64();
/// assert_ne!(value, 12345);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xorshift {
    /// Internal state (64-bit)
    state: u64,
}

impl Xorshift {
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

impl Default for Xorshift {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BitGenerator for Xorshift {
    fn next64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}
