//! Random prime search over a fixed bit-width
//!
//! Starts at a random `bits`-bit value rounded to the form `6m - 1` and walks
//! upward through the 6m ± 1 candidates until the chosen tester accepts one.
//! The walk may pass `2^bits`; witness draws widen to cover such candidates,
//! so the sampler's own width does not bound the search.

use num_bigint::BigUint;
use num_traits::One;
use serde::Serialize;

use super::{PrimalityError, Tester};
use crate::rng::BitGenerator;
use crate::sampling::RangeRandom;

/// Result of one prime search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// First accepted candidate
    pub prime: BigUint,
    /// Number of candidates tested, including the accepted one
    pub candidates: u64,
}

/// Find a probable prime near a random `bits`-bit starting point.
///
/// # Errors
/// [`PrimalityError::SearchWidthTooSmall`] if `bits < 4`; tester and
/// sampler errors are propagated.
///
/// # Example
/// ```
/// use randprime_core::primality::{find_probable_prime, Tester};
/// use randprime_core::rng::Lfsr;
/// use randprime_core::sampling::RangeRandom;
///
/// let mut rng = RangeRandom::new(Lfsr::default(), 32).unwrap();
/// let outcome = find_probable_prime(&mut rng, 32, Tester::MillerRabin, 10).unwrap();
/// assert!(outcome.candidates >= 1);
/// ```
pub fn find_probable_prime<G: BitGenerator>(
    rng: &mut RangeRandom<G>,
    bits: u64,
    tester: Tester,
    k: u32,
) -> Result<SearchOutcome, PrimalityError> {
    if bits < 4 {
        return Err(PrimalityError::SearchWidthTooSmall(bits));
    }

    let low = BigUint::one() << (bits - 1);
    let high = BigUint::one() << bits;
    let start = rng.draw_range_covering(&low, &high)?;
    let mut n = &start - (&start % 6u32) - 1u32;

    let mut candidates = 0u64;
    loop {
        candidates += 1;
        if tester.test(&n, rng, k)? {
            break;
        }

        let twin = &n + 2u32;
        candidates += 1;
        if tester.test(&twin, rng, k)? {
            n = twin;
            break;
        }

        n += 6u32;
    }

    tracing::debug!(%tester, bits, candidates, prime = %n, "prime search finished");
    Ok(SearchOutcome {
        prime: n,
        candidates,
    })
}
