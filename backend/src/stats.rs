//! Statistical self-test for samplers
//!
//! Draws values of the sampler's configured width, scales them to `[0, 1)`
//! and compares the observed mean and standard deviation against the
//! continuous uniform targets `1/2` and `1/sqrt(12)`.
//!
//! This is a sanity check, not a randomness test suite.

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use serde::Serialize;

use crate::rng::BitGenerator;
use crate::sampling::{SamplerError, UniformSampler};

/// Mean of the uniform distribution on `[0, 1)`.
pub const UNIFORM_MEAN: f64 = 0.5;

/// Standard deviation of the uniform distribution on `[0, 1)`.
pub fn uniform_stdev() -> f64 {
    1.0 / 12f64.sqrt()
}

/// Observed moments and their relative error in percent
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UniformityReport {
    pub bits: u64,
    pub samples: usize,
    pub mean: f64,
    pub stdev: f64,
    pub mean_error_pct: f64,
    pub stdev_error_pct: f64,
}

/// Running mean and variance of unit fractions (Welford's method)
#[derive(Debug, Clone, Default)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Moments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Summarize against the uniform targets.
    ///
    /// # Errors
    /// [`SamplerError::TooFewSamples`] for fewer than two values.
    pub fn report(&self, bits: u64) -> Result<UniformityReport, SamplerError> {
        if self.count < 2 {
            return Err(SamplerError::TooFewSamples {
                required: 2,
                got: self.count,
            });
        }

        let stdev = (self.m2 / (self.count as f64 - 1.0)).sqrt();
        let target_stdev = uniform_stdev();
        Ok(UniformityReport {
            bits,
            samples: self.count,
            mean: self.mean,
            stdev,
            mean_error_pct: 100.0 * (self.mean - UNIFORM_MEAN).abs() / UNIFORM_MEAN,
            stdev_error_pct: 100.0 * (stdev - target_stdev).abs() / target_stdev,
        })
    }
}

/// Draw `samples` values and summarize them.
///
/// # Errors
/// [`SamplerError::TooFewSamples`] for fewer than two samples.
///
/// # Example
/// ```
/// use randprime_core::rng::Xorshift;
/// use randprime_core::sampling::UniformSampler;
/// use randprime_core::stats::uniformity_report;
///
/// let mut sampler = UniformSampler::new(Xorshift::default(), 64).unwrap();
/// let report = uniformity_report(&mut sampler, 10_000).unwrap();
/// assert!(report.mean_error_pct < 5.0);
/// ```
pub fn uniformity_report<G: BitGenerator>(
    sampler: &mut UniformSampler<G>,
    samples: usize,
) -> Result<UniformityReport, SamplerError> {
    if samples < 2 {
        return Err(SamplerError::TooFewSamples {
            required: 2,
            got: samples,
        });
    }

    let bits = sampler.bits();
    let mut moments = Moments::new();
    for _ in 0..samples {
        moments.push(unit_fraction(&sampler.random(), bits));
    }

    let report = moments.report(bits)?;
    tracing::debug!(?report, "uniformity report");
    Ok(report)
}

/// `value / 2^bits` using the top 53 bits of `value`.
pub fn unit_fraction(value: &BigUint, bits: u64) -> f64 {
    const MANTISSA: u64 = 53;
    let (top, width) = if bits > MANTISSA {
        (value >> (bits - MANTISSA), MANTISSA)
    } else {
        (value.clone(), bits)
    };
    let numerator = top.to_f64().unwrap_or(0.0);
    numerator / 2f64.powi(width as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Lcg, Xorshift};

    #[test]
    fn test_too_few_samples() {
        let mut sampler = UniformSampler::new(Lcg::default(), 64).unwrap();
        assert_eq!(
            uniformity_report(&mut sampler, 1),
            Err(SamplerError::TooFewSamples {
                required: 2,
                got: 1
            })
        );
    }

    #[test]
    fn test_moments_of_known_values() {
        let mut moments = Moments::new();
        for x in [0.0, 0.5, 1.0] {
            moments.push(x);
        }
        let report = moments.report(8).unwrap();
        assert_eq!(report.samples, 3);
        assert!((report.mean - 0.5).abs() < 1e-12);
        assert!((report.stdev - 0.5).abs() < 1e-12);
        assert!(report.mean_error_pct < 1e-9);
    }

    #[test]
    fn test_unit_fraction_scaling() {
        assert_eq!(unit_fraction(&BigUint::from(8u32), 4), 0.5);
        let half = BigUint::from(1u32) << 199u32;
        assert_eq!(unit_fraction(&half, 200), 0.5);
        assert_eq!(unit_fraction(&BigUint::from(0u32), 1024), 0.0);
    }

    #[test]
    fn test_wide_sampler_moments_close_to_uniform() {
        let mut sampler = UniformSampler::new(Xorshift::default(), 200).unwrap();
        let report = uniformity_report(&mut sampler, 20_000).unwrap();
        assert!(report.mean_error_pct < 2.0, "{:?}", report);
        assert!(report.stdev_error_pct < 2.0, "{:?}", report);
    }
}
