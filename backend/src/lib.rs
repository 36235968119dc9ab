//! Randprime Core - Random Sampling and Primality Engine
//!
//! Pseudo-random bit generators, unbiased arbitrary-width sampling on top of
//! them, and probabilistic primality tests that draw their witnesses from
//! that sampler.
//!
//! # Architecture
//!
//! - **rng**: 64-bit generators (LFSR, Xorshift, LCG, Blum Blum Shub)
//! - **sampling**: arbitrary bit-width values and rejection-sampled ranges
//! - **primality**: Miller-Rabin, Solovay-Strassen, Jacobi symbol, prime search
//! - **config**: serde-backed generator configuration
//! - **stats**: mean/stdev sanity check for samplers
//!
//! # Critical Invariants
//!
//! 1. `random_bits(b)` is always below `2^b`
//! 2. `uniform_below(s)` is always below `s`, with no modulo bias
//! 3. Same generator variant + same seed → same sequence
//! 4. A `false` primality verdict is always correct
//!
//! # Example
//! ```
//! use num_bigint::BigUint;
//! use randprime_core::{miller_rabin, GeneratorKind, RangeRandom};
//!
//! let mut rng = RangeRandom::with_kind(GeneratorKind::Xorshift, 64, Some(42)).unwrap();
//! assert!(miller_rabin(&BigUint::from(97u32), &mut rng, 5).unwrap());
//! ```

pub mod config;
pub mod primality;
pub mod rng;
pub mod sampling;
pub mod stats;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use primality::{
    find_probable_prime, is_prime_trivial, jacobi, miller_rabin, solovay_strassen,
    PrimalityError, SearchOutcome, Tester,
};
pub use rng::{
    new_generator, BitGenerator, BlumBlumShub, DynGenerator, GeneratorKind, Lcg, Lfsr, Xorshift,
};
pub use sampling::{RangeRandom, SamplerError, UniformSampler};
pub use stats::{uniformity_report, Moments, UniformityReport};
