//! 64-bit linear feedback shift register
//!
//! Each step XORs the state bits at positions 0, 1, 3 and 4 into a
//! feedback bit, shifts the state right by one and inserts the feedback
//! bit at position 63.
//!
//! The all-zero state is absorbing, so this variant carries its own
//! non-zero default seed instead of [`super::DEFAULT_SEED`].

use super::{seed_or, BitGenerator};

/// Default LFSR seed.
pub const LFSR_DEFAULT_SEED: u64 = 0xA3B1_C7D2_E4F5_A678;

/// Fibonacci LFSR with taps 0, 1, 3, 4
///
/// # Example
/// ```
/// use randprime_core::rng::{BitGenerator, Lfsr};
///
/// let mut rng = Lfsr::new(None);
/// let first = rng.next64();
/// assert_eq!(first, rng.state());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lfsr {
    state: u64,
}

impl Lfsr {
    /// Create a new register, falling back to [`LFSR_DEFAULT_SEED`] for a
    /// missing or zero seed.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            state: seed_or(seed, LFSR_DEFAULT_SEED),
        }
    }

    /// Current register contents
    pub fn state(&self) -> u64 {
        self.state
    }
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BitGenerator for Lfsr {
    fn next64(&mut self) -> u64 {
        let s = self.state;
        let feedback = (s ^ (s >> 1) ^ (s >> 3) ^ (s >> 4)) & 1;
        self.state = (s >> 1) | (feedback << 63);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_is_lfsr_specific() {
        assert_eq!(Lfsr::default().state(), LFSR_DEFAULT_SEED);
        assert_eq!(Lfsr::new(Some(0)).state(), LFSR_DEFAULT_SEED);
    }

    #[test]
    fn test_feedback_bit_inserted_at_top() {
        // bits 0 and 1 set: feedback = 1 ^ 1 = 0
        let mut rng = Lfsr::new(Some(0b11));
        assert_eq!(rng.next64(), 0b1);

        // only bit 0 set: feedback = 1
        let mut rng = Lfsr::new(Some(0b1));
        assert_eq!(rng.next64(), 1u64 << 63);
    }

    #[test]
    fn test_state_shifts_right() {
        let mut rng = Lfsr::new(Some(0b1_0000_0000));
        // no tap bits set: plain shift
        assert_eq!(rng.next64(), 0b1000_0000);
    }
}
