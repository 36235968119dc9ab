//! Integer range draws backed by one generator

use num_bigint::BigUint;

use super::{SamplerError, UniformSampler};
use crate::rng::{new_generator, BitGenerator, DynGenerator, GeneratorKind};

/// Random integers in `[low, high)`
///
/// Owns a single [`UniformSampler`]; the three draw methods mirror the
/// no-argument, one-bound and two-bound forms of a range query.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use randprime_core::rng::GeneratorKind;
/// use randprime_core::sampling::RangeRandom;
///
/// let mut rng = RangeRandom::with_kind(GeneratorKind::Lfsr, 64, None).unwrap();
/// let roll = rng.draw_range(&BigUint::from(1u32), &BigUint::from(7u32)).unwrap();
/// assert!(roll >= BigUint::from(1u32) && roll < BigUint::from(7u32));
/// ```
pub struct RangeRandom<G> {
    sampler: UniformSampler<G>,
}

impl<G> std::fmt::Debug for RangeRandom<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeRandom")
            .field("sampler", &self.sampler)
            .finish()
    }
}

impl<G: BitGenerator> RangeRandom<G> {
    pub fn new(generator: G, bits: u64) -> Result<Self, SamplerError> {
        Ok(Self::from_sampler(UniformSampler::new(generator, bits)?))
    }

    pub fn from_sampler(sampler: UniformSampler<G>) -> Self {
        Self { sampler }
    }

    pub fn sampler(&mut self) -> &mut UniformSampler<G> {
        &mut self.sampler
    }

    pub fn bits(&self) -> u64 {
        self.sampler.bits()
    }

    /// Uniform value of the configured bit-width.
    pub fn draw(&mut self) -> BigUint {
        self.sampler.random()
    }

    /// Uniform value in `[0, high)`.
    ///
    /// # Errors
    /// [`SamplerError::EmptyRange`] if `high` is zero.
    pub fn draw_below(&mut self, high: &BigUint) -> Result<BigUint, SamplerError> {
        self.sampler.uniform_below(high)
    }

    /// Uniform value in `[low, high)`.
    ///
    /// # Errors
    /// [`SamplerError::InvalidRange`] if `high <= low`.
    pub fn draw_range(&mut self, low: &BigUint, high: &BigUint) -> Result<BigUint, SamplerError> {
        if high <= low {
            return Err(SamplerError::InvalidRange {
                low: low.clone(),
                high: high.clone(),
            });
        }
        let amplitude = high - low;
        Ok(low + self.sampler.uniform_below(&amplitude)?)
    }

    /// Uniform value in `[low, high)` for ranges that may outgrow the
    /// configured width; see [`UniformSampler::uniform_below_covering`].
    ///
    /// # Errors
    /// [`SamplerError::InvalidRange`] if `high <= low`.
    pub fn draw_range_covering(
        &mut self,
        low: &BigUint,
        high: &BigUint,
    ) -> Result<BigUint, SamplerError> {
        if high <= low {
            return Err(SamplerError::InvalidRange {
                low: low.clone(),
                high: high.clone(),
            });
        }
        let amplitude = high - low;
        Ok(low + self.sampler.uniform_below_covering(&amplitude)?)
    }
}

impl RangeRandom<DynGenerator> {
    /// Range source over a generator selected at runtime.
    pub fn with_kind(kind: GeneratorKind, bits: u64, seed: Option<u64>) -> Result<Self, SamplerError> {
        Ok(Self::from_sampler(new_generator(kind, bits, seed)?))
    }
}
