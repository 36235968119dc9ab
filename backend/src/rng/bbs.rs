//! Blum Blum Shub generator
//!
//! Squares the state modulo `M = (2^89 - 1)(2^107 - 1)` once per output bit
//! and emits the low bit of each new state. A 64-bit word therefore costs
//! 64 modular squarings; prefer [`super::Xorshift`] or [`super::Lcg`] when
//! throughput matters.
//!
//! The modulus is fixed regardless of the sampler's bit-width.

use num_bigint::BigUint;
use num_traits::One;

use super::{seed_or, BitGenerator, DEFAULT_SEED};

/// Exponent of the Mersenne prime `p = 2^89 - 1`.
pub const BBS_P_EXPONENT: u32 = 89;

/// Exponent of the Mersenne prime `q = 2^107 - 1`.
pub const BBS_Q_EXPONENT: u32 = 107;

/// Blum Blum Shub generator over a fixed 196-bit modulus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlumBlumShub {
    /// Current residue mod `modulus`
    state: BigUint,
    modulus: BigUint,
}

impl BlumBlumShub {
    /// Create a generator over the fixed modulus `M`, falling back to
    /// [`DEFAULT_SEED`] for a missing or zero seed.
    pub fn new(seed: Option<u64>) -> Self {
        let p = (BigUint::one() << BBS_P_EXPONENT) - 1u32;
        let q = (BigUint::one() << BBS_Q_EXPONENT) - 1u32;
        Self {
            state: BigUint::from(seed_or(seed, DEFAULT_SEED)),
            modulus: p * q,
        }
    }

    /// The modulus `M = p * q`
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Current residue `x mod M`
    pub fn state(&self) -> &BigUint {
        &self.state
    }
}

impl Default for BlumBlumShub {
    fn default() -> Self {
        Self::new(None)
    }
}

impl BitGenerator for BlumBlumShub {
    fn next64(&mut self) -> u64 {
        let mut word = 0u64;
        for _ in 0..64 {
            self.state = (&self.state * &self.state) % &self.modulus;
            word = (word << 1) | u64::from(self.state.bit(0));
        }
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_is_product_of_mersenne_primes() {
        let rng = BlumBlumShub::default();
        assert_eq!(rng.modulus().bits(), 89 + 107);
    }

    #[test]
    fn test_bits_emitted_msb_first() {
        let mut rng = BlumBlumShub::new(Some(3));
        let mut shadow = BigUint::from(3u32);
        let modulus = rng.modulus().clone();

        let first_bit = {
            shadow = (&shadow * &shadow) % &modulus;
            shadow.bit(0)
        };
        let word = rng.next64();
        assert_eq!(word >> 63 == 1, first_bit);
    }

    #[test]
    fn test_state_stays_below_modulus() {
        let mut rng = BlumBlumShub::new(Some(u64::MAX));
        for _ in 0..4 {
            rng.next64();
            assert!(rng.state() < rng.modulus());
        }
    }
}
