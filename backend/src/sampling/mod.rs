//! Uniform sampling over arbitrary bit-widths and ranges
//!
//! [`UniformSampler`] turns a 64-bit [`BitGenerator`] into:
//! - `random_bits(b)`: uniform over `[0, 2^b)` for any `b`
//! - `uniform_below(s)`: uniform over `[0, s)` for any `s > 0`
//!
//! # Rejection sampling
//!
//! Range draws use Lemire's multiply-high method. A `w`-bit draw `x` is
//! multiplied by `s`; the high part `m >> w` is the candidate and the low
//! part `l = m mod 2^w` decides acceptance. Draws with `l < 2^w mod s` are
//! rejected, which leaves every value in `[0, s)` with exactly the same
//! number of accepted `x`.
//!
//! The retry loop is never capped: capping would reintroduce bias.
//!
//! # Cost
//!
//! `random_bits(b)` with `b` not a multiple of 64 costs one extra range draw;
//! `uniform_below` is dominated by the `bits × bits` multiplication, so it is
//! O(bits²) per call.

mod range;

pub use range::RangeRandom;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use thiserror::Error;

use crate::rng::BitGenerator;

/// Errors raised by sampler construction and range queries
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("Invalid bit-width {0}: must be at least 1")]
    InvalidBitWidth(u64),

    #[error("Range size must be positive")]
    EmptyRange,

    #[error("Invalid range: high ({high}) must be greater than low ({low})")]
    InvalidRange { low: BigUint, high: BigUint },

    #[error("Unknown generator: {0}")]
    UnknownGenerator(String),

    #[error("Range bound {bound} exceeds the {bits}-bit sampler width")]
    RangeExceedsWidth { bits: u64, bound: BigUint },

    #[error("Too few samples: need at least {required}, got {got}")]
    TooFewSamples { required: usize, got: usize },
}

/// Unbiased sampler over a 64-bit generator
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use randprime_core::rng::Lcg;
/// use randprime_core::sampling::UniformSampler;
///
/// let mut sampler = UniformSampler::new(Lcg::new(Some(1)), 100).unwrap();
/// let die = sampler.uniform_below(&BigUint::from(6u32)).unwrap();
/// assert!(die < BigUint::from(6u32));
/// ```
pub struct UniformSampler<G> {
    generator: G,
    /// Configured width of `random()` and of the draws behind `uniform_below`
    bits: u64,
}

impl<G: BitGenerator> UniformSampler<G> {
    /// Wrap `generator` with a target width of `bits`.
    ///
    /// # Errors
    /// [`SamplerError::InvalidBitWidth`] if `bits` is zero.
    pub fn new(generator: G, bits: u64) -> Result<Self, SamplerError> {
        if bits == 0 {
            return Err(SamplerError::InvalidBitWidth(bits));
        }
        Ok(Self { generator, bits })
    }

    /// Configured bit-width
    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn into_generator(self) -> G {
        self.generator
    }

    /// Next raw 64-bit word from the underlying generator
    pub fn next64(&mut self) -> u64 {
        self.generator.next64()
    }

    /// Uniform value in `[0, 2^bits)` for the configured width.
    pub fn random(&mut self) -> BigUint {
        self.random_bits(self.bits)
    }

    /// Uniform value in `[0, 2^b)`.
    ///
    /// Full 64-bit chunks are taken straight from the generator, chunk `i`
    /// at bits `[64i, 64i + 64)`. A trailing partial chunk of `b mod 64`
    /// bits is drawn as a range value below `2^(b mod 64)` and placed on top.
    pub fn random_bits(&mut self, b: u64) -> BigUint {
        let full_chunks = b / 64;
        let remainder = b % 64;

        let mut digits: Vec<u32> = Vec::with_capacity(2 * (full_chunks as usize + 1));
        for _ in 0..full_chunks {
            push_word(&mut digits, self.generator.next64());
        }
        if remainder != 0 {
            let top = self.partial_chunk(remainder);
            push_word(&mut digits, top);
        }

        BigUint::new(digits)
    }

    /// Uniform value in `[0, 2^width)` for `0 < width < 64`.
    fn partial_chunk(&mut self, width: u64) -> u64 {
        debug_assert!(width > 0 && width < 64);
        let s = 1u64 << width;
        lemire64(&mut self.generator, s)
    }

    /// Unbiased value in `[0, s)` from a single-word multiply.
    ///
    /// # Errors
    /// [`SamplerError::EmptyRange`] if `s` is zero.
    pub fn uniform_below64(&mut self, s: u64) -> Result<u64, SamplerError> {
        if s == 0 {
            return Err(SamplerError::EmptyRange);
        }
        Ok(lemire64(&mut self.generator, s))
    }

    /// Unbiased value in `[0, s)` using `bits`-wide draws.
    ///
    /// # Errors
    /// [`SamplerError::EmptyRange`] if `s` is zero,
    /// [`SamplerError::RangeExceedsWidth`] if `s > 2^bits` (every draw
    /// would fall in the rejection region).
    pub fn uniform_below(&mut self, s: &BigUint) -> Result<BigUint, SamplerError> {
        if s.is_zero() {
            return Err(SamplerError::EmptyRange);
        }

        let width = self.bits;
        if s > &(BigUint::one() << width) {
            return Err(SamplerError::RangeExceedsWidth {
                bits: width,
                bound: s.clone(),
            });
        }

        Ok(self.below_at_width(s, width))
    }

    /// Unbiased value in `[0, s)`, widening the draws to `s.bits()` when `s`
    /// does not fit the configured width.
    ///
    /// # Errors
    /// [`SamplerError::EmptyRange`] if `s` is zero.
    pub fn uniform_below_covering(&mut self, s: &BigUint) -> Result<BigUint, SamplerError> {
        if s.is_zero() {
            return Err(SamplerError::EmptyRange);
        }
        let width = self.bits.max(s.bits());
        Ok(self.below_at_width(s, width))
    }

    /// Lemire rejection over `width`-bit draws. Requires `0 < s <= 2^width`.
    fn below_at_width(&mut self, s: &BigUint, width: u64) -> BigUint {
        let mut m = self.random_bits(width) * s;
        let mut low = low_bits(&m, width);

        if &low < s {
            let threshold = (BigUint::one() << width) % s;
            let mut redraws = 0u64;
            while low < threshold {
                m = self.random_bits(width) * s;
                low = low_bits(&m, width);
                redraws += 1;
            }
            if redraws > 0 {
                tracing::trace!(bits = width, redraws, "uniform_below rejected draws");
            }
        }

        m >> width
    }
}

impl<G> std::fmt::Debug for UniformSampler<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformSampler")
            .field("bits", &self.bits)
            .finish_non_exhaustive()
    }
}

/// Append a 64-bit word as two little-endian 32-bit digits.
fn push_word(digits: &mut Vec<u32>, word: u64) {
    digits.push(word as u32);
    digits.push((word >> 32) as u32);
}

/// `m mod 2^width`
fn low_bits(m: &BigUint, width: u64) -> BigUint {
    if m.bits() <= width {
        return m.clone();
    }
    let mask = (BigUint::one() << width) - 1u32;
    m & mask
}

/// Lemire multiply-high rejection for a single 64-bit word. `s` must be
/// non-zero.
fn lemire64<G: BitGenerator + ?Sized>(generator: &mut G, s: u64) -> u64 {
    let mut m = u128::from(generator.next64()) * u128::from(s);
    let mut low = m as u64;

    if low < s {
        // 2^64 mod s
        let threshold = s.wrapping_neg() % s;
        while low < threshold {
            m = u128::from(generator.next64()) * u128::from(s);
            low = m as u64;
        }
    }

    (m >> 64) as u64
}
