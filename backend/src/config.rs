//! Declarative generator configuration
//!
//! A [`GeneratorConfig`] names a generator variant, the sampler bit-width
//! and an optional seed. It deserializes from JSON so callers can keep
//! sampling setups in files.

use serde::{Deserialize, Serialize};

use crate::rng::{new_generator, DynGenerator, GeneratorKind};
use crate::sampling::{RangeRandom, SamplerError, UniformSampler};

/// Default sampler width in bits.
pub const DEFAULT_BITS: u64 = 64;

fn default_bits() -> u64 {
    DEFAULT_BITS
}

/// Generator selection for one sampling session
///
/// # Example
/// ```
/// use randprime_core::config::GeneratorConfig;
/// use randprime_core::rng::GeneratorKind;
///
/// let config: GeneratorConfig =
///     serde_json::from_str(r#"{"kind": "xorshift", "bits": 256}"#).unwrap();
/// assert_eq!(config.kind, GeneratorKind::Xorshift);
/// assert_eq!(config.seed, None);
///
/// let mut sampler = config.build().unwrap();
/// assert!(sampler.random().bits() <= 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub kind: GeneratorKind,

    #[serde(default = "default_bits")]
    pub bits: u64,

    /// Missing or zero selects the variant's default seed
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            kind: GeneratorKind::Lfsr,
            bits: DEFAULT_BITS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(kind: GeneratorKind, bits: u64, seed: Option<u64>) -> Self {
        Self { kind, bits, seed }
    }

    /// Check the configuration without building a generator.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if self.bits == 0 {
            return Err(SamplerError::InvalidBitWidth(self.bits));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<UniformSampler<DynGenerator>, SamplerError> {
        self.validate()?;
        new_generator(self.kind, self.bits, self.seed)
    }

    pub fn build_range(&self) -> Result<RangeRandom<DynGenerator>, SamplerError> {
        Ok(RangeRandom::from_sampler(self.build()?))
    }
}
