use num_bigint::BigUint;
use num_traits::One;

use super::{screen, PrimalityError};
use crate::rng::BitGenerator;
use crate::sampling::RangeRandom;

/// Miller-Rabin test with `k` random witnesses.
///
/// Writes `n - 1 = 2^s * d` with `d` odd, then for each witness `a` drawn
/// from `[2, n - 2]` squares `a^d mod n` `s` times. A square root of unity
/// other than `±1`, or a final value other than 1, proves `n` composite and
/// ends the test immediately. Witness draws widen past the sampler's
/// configured width when `n` needs it.
///
/// # Errors
/// [`PrimalityError::CandidateTooSmall`] for `n < 2`,
/// [`PrimalityError::NoWitnesses`] for `k == 0`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use randprime_core::primality::miller_rabin;
/// use randprime_core::rng::Lfsr;
/// use randprime_core::sampling::RangeRandom;
///
/// let mut rng = RangeRandom::new(Lfsr::default(), 64).unwrap();
/// assert!(miller_rabin(&BigUint::from(97u32), &mut rng, 5).unwrap());
/// assert!(!miller_rabin(&BigUint::from(91u32), &mut rng, 5).unwrap());
/// ```
pub fn miller_rabin<G: BitGenerator>(
    n: &BigUint,
    rng: &mut RangeRandom<G>,
    k: u32,
) -> Result<bool, PrimalityError> {
    if let Some(verdict) = screen(n, k)? {
        return Ok(verdict);
    }

    let n_minus_1 = n - 1u32;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;
    let two = BigUint::from(2u32);

    for round in 0..k {
        // upper bound is exclusive: a in [2, n - 2]
        let a = rng.draw_range_covering(&two, &n_minus_1)?;
        let mut x = a.modpow(&d, n);

        for _ in 0..s {
            let y = (&x * &x) % n;
            if y.is_one() && !x.is_one() && x != n_minus_1 {
                tracing::debug!(%n, witness = %a, round, "non-trivial square root of unity");
                return Ok(false);
            }
            x = y;
        }

        if !x.is_one() {
            tracing::debug!(%n, witness = %a, round, "Fermat condition failed");
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Lcg, Xorshift};

    fn rng() -> RangeRandom<Xorshift> {
        RangeRandom::new(Xorshift::new(Some(2024)), 64).unwrap()
    }

    #[test]
    fn test_small_primes_accepted() {
        let mut rng = rng();
        for p in [2u32, 3, 5, 7, 11, 13, 97, 7919, 104_729] {
            assert!(
                miller_rabin(&BigUint::from(p), &mut rng, 5).unwrap(),
                "{} should be accepted",
                p
            );
        }
    }

    #[test]
    fn test_even_numbers_rejected() {
        let mut rng = rng();
        for n in [4u32, 6, 100, 1 << 20] {
            assert!(!miller_rabin(&BigUint::from(n), &mut rng, 1).unwrap());
        }
    }

    #[test]
    fn test_composites_rejected() {
        let mut rng = rng();
        // 9 = 3^2: every witness in [2, 7] proves compositeness
        assert!(!miller_rabin(&BigUint::from(9u32), &mut rng, 1).unwrap());
        assert!(!miller_rabin(&BigUint::from(91u32), &mut rng, 10).unwrap());
        assert!(!miller_rabin(&BigUint::from(561u32), &mut rng, 10).unwrap());
    }

    #[test]
    fn test_one_and_zero_are_errors() {
        let mut rng = rng();
        assert_eq!(
            miller_rabin(&BigUint::from(1u32), &mut rng, 1),
            Err(PrimalityError::CandidateTooSmall(BigUint::from(1u32)))
        );
        assert!(miller_rabin(&BigUint::from(0u32), &mut rng, 1).is_err());
    }

    #[test]
    fn test_mersenne_prime_127() {
        let mut rng = RangeRandom::new(Lcg::default(), 128).unwrap();
        let m127 = (BigUint::one() << 127u32) - 1u32;
        assert!(miller_rabin(&m127, &mut rng, 8).unwrap());
    }

    #[test]
    fn test_candidate_wider_than_sampler() {
        let mut rng = RangeRandom::new(Xorshift::new(Some(9)), 8).unwrap();
        assert!(miller_rabin(&BigUint::from(2053u32), &mut rng, 20).unwrap());
        assert!(!miller_rabin(&BigUint::from(2051u32), &mut rng, 20).unwrap());
        assert_eq!(rng.bits(), 8);
    }
}
