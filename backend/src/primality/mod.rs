//! Probabilistic primality testing
//!
//! Miller-Rabin and Solovay-Strassen draw their witnesses from a
//! [`RangeRandom`]. Both are one-sided Monte Carlo tests:
//! - `false` is certain: `n` is composite
//! - `true` is probable: the error is at most `4^-k` (Miller-Rabin) or
//!   `2^-k` (Solovay-Strassen) for `k` witnesses
//!
//! Each call is independent; testers hold no state between calls.

mod jacobi;
mod miller_rabin;
pub mod search;
mod solovay_strassen;
mod trial;

pub use jacobi::jacobi;
pub use miller_rabin::miller_rabin;
pub use search::{find_probable_prime, SearchOutcome};
pub use solovay_strassen::solovay_strassen;
pub use trial::is_prime_trivial;

use num_bigint::BigUint;
use num_integer::Integer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::BitGenerator;
use crate::sampling::{RangeRandom, SamplerError};

/// Witness count used when callers have no stronger requirement.
pub const DEFAULT_WITNESSES: u32 = 1;

/// Errors raised by the primality testers
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimalityError {
    #[error("Candidate {0} is below 2; primality is undefined")]
    CandidateTooSmall(BigUint),

    #[error("At least one witness is required")]
    NoWitnesses,

    #[error("Jacobi symbol modulus must be odd and positive, got {0}")]
    InvalidJacobiModulus(BigUint),

    #[error("Prime search needs at least 4 bits, got {0}")]
    SearchWidthTooSmall(u64),

    #[error("Witness draw failed: {0}")]
    Sampler(#[from] SamplerError),
}

/// Selectable probabilistic test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tester {
    MillerRabin,
    SolovayStrassen,
}

impl Tester {
    pub const ALL: [Tester; 2] = [Tester::MillerRabin, Tester::SolovayStrassen];

    pub fn name(self) -> &'static str {
        match self {
            Tester::MillerRabin => "miller_rabin",
            Tester::SolovayStrassen => "solovay_strassen",
        }
    }

    /// Run this test on `n` with `k` witnesses.
    pub fn test<G: BitGenerator>(
        self,
        n: &BigUint,
        rng: &mut RangeRandom<G>,
        k: u32,
    ) -> Result<bool, PrimalityError> {
        match self {
            Tester::MillerRabin => miller_rabin(n, rng, k),
            Tester::SolovayStrassen => solovay_strassen(n, rng, k),
        }
    }
}

impl std::fmt::Display for Tester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared guards for both testers.
///
/// Returns `Some(verdict)` when `n` is decided without witnesses: 2 and 3
/// are prime, other even numbers are composite.
pub(crate) fn screen(n: &BigUint, k: u32) -> Result<Option<bool>, PrimalityError> {
    if *n < BigUint::from(2u32) {
        return Err(PrimalityError::CandidateTooSmall(n.clone()));
    }
    if k == 0 {
        return Err(PrimalityError::NoWitnesses);
    }
    if *n == BigUint::from(2u32) || *n == BigUint::from(3u32) {
        return Ok(Some(true));
    }
    if n.is_even() {
        return Ok(Some(false));
    }
    Ok(None)
}
