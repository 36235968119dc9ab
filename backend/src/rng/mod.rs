//! Fixed-width pseudo-random bit generators
//!
//! Every generator produces one 64-bit word per call to
//! [`BitGenerator::next64`]. Wider values and ranges are built on top of that
//! word by [`crate::sampling::UniformSampler`].
//!
//! CRITICAL: None of these generators are cryptographically secure.
//! Blum Blum Shub is the closest, but its modulus is fixed and small.

mod bbs;
mod lcg;
mod lfsr;
mod xorshift;

pub use bbs::BlumBlumShub;
pub use lcg::Lcg;
pub use lfsr::Lfsr;
pub use xorshift::Xorshift;

use serde::{Deserialize, Serialize};

use crate::sampling::{SamplerError, UniformSampler};

/// Seed used by Xorshift, LCG and Blum Blum Shub when none is given (2^61 - 1).
pub const DEFAULT_SEED: u64 = (1 << 61) - 1;

/// Source of 64-bit pseudo-random words.
///
/// Implementations own their state exclusively; `next64` mutates it
/// non-atomically, so a generator must never be shared across threads
/// without external locking.
pub trait BitGenerator {
    /// Advance the state and return the next 64-bit word.
    fn next64(&mut self) -> u64;
}

impl<G: BitGenerator + ?Sized> BitGenerator for Box<G> {
    fn next64(&mut self) -> u64 {
        (**self).next64()
    }
}

impl<G: BitGenerator + ?Sized> BitGenerator for &mut G {
    fn next64(&mut self) -> u64 {
        (**self).next64()
    }
}

/// Generator variants selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Lfsr,
    Xorshift,
    Lcg,
    BlumBlumShub,
}

impl GeneratorKind {
    /// All variants, in benchmark order.
    pub const ALL: [GeneratorKind; 4] = [
        GeneratorKind::Lfsr,
        GeneratorKind::Xorshift,
        GeneratorKind::Lcg,
        GeneratorKind::BlumBlumShub,
    ];

    /// Display name used in reports and CSV rows.
    pub fn name(self) -> &'static str {
        match self {
            GeneratorKind::Lfsr => "LFSR",
            GeneratorKind::Xorshift => "Xorshift",
            GeneratorKind::Lcg => "LCG",
            GeneratorKind::BlumBlumShub => "BlumBlumShub",
        }
    }

    /// Construct a boxed generator of this kind.
    ///
    /// A missing or zero seed selects the variant's default seed.
    pub fn boxed(self, seed: Option<u64>) -> DynGenerator {
        match self {
            GeneratorKind::Lfsr => Box::new(Lfsr::new(seed)),
            GeneratorKind::Xorshift => Box::new(Xorshift::new(seed)),
            GeneratorKind::Lcg => Box::new(Lcg::new(seed)),
            GeneratorKind::BlumBlumShub => Box::new(BlumBlumShub::new(seed)),
        }
    }
}

impl std::fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for GeneratorKind {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "").as_str() {
            "lfsr" => Ok(GeneratorKind::Lfsr),
            "xorshift" => Ok(GeneratorKind::Xorshift),
            "lcg" => Ok(GeneratorKind::Lcg),
            "blumblumshub" | "bbs" => Ok(GeneratorKind::BlumBlumShub),
            _ => Err(SamplerError::UnknownGenerator(s.to_string())),
        }
    }
}

/// Boxed generator chosen at runtime.
pub type DynGenerator = Box<dyn BitGenerator + Send>;

/// Build a sampler of `bit_width` bits over a generator of the given kind.
///
/// # Errors
/// Returns [`SamplerError::InvalidBitWidth`] if `bit_width` is zero.
///
/// # Example
/// ```
/// use randprime_core::rng::{new_generator, GeneratorKind};
///
/// let mut sampler = new_generator(GeneratorKind::Xorshift, 128, Some(7)).unwrap();
/// let value = sampler.random();
/// assert!(value.bits() <= 128);
/// ```
pub fn new_generator(
    kind: GeneratorKind,
    bit_width: u64,
    seed: Option<u64>,
) -> Result<UniformSampler<DynGenerator>, SamplerError> {
    tracing::debug!(generator = %kind, bit_width, ?seed, "creating generator");
    UniformSampler::new(kind.boxed(seed), bit_width)
}

/// Resolve an optional seed, treating zero as "not given".
pub(crate) fn seed_or(seed: Option<u64>, default: u64) -> u64 {
    match seed {
        Some(s) if s != 0 => s,
        _ => default,
    }
}
