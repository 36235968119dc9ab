use num_bigint::BigUint;
use num_traits::One;

use super::{jacobi, screen, PrimalityError};
use crate::rng::BitGenerator;
use crate::sampling::RangeRandom;

/// Solovay-Strassen test with `k` random witnesses.
///
/// For each witness `a` in `[2, n - 1]`, `n` is declared composite when the
/// Jacobi symbol `(a / n)` is zero or differs from `a^((n-1)/2) mod n`.
/// Witness draws widen past the sampler's configured width when `n` needs it.
///
/// # Errors
/// [`PrimalityError::CandidateTooSmall`] for `n < 2`,
/// [`PrimalityError::NoWitnesses`] for `k == 0`.
pub fn solovay_strassen<G: BitGenerator>(
    n: &BigUint,
    rng: &mut RangeRandom<G>,
    k: u32,
) -> Result<bool, PrimalityError> {
    if let Some(verdict) = screen(n, k)? {
        return Ok(verdict);
    }

    let n_minus_1 = n - 1u32;
    let exponent = &n_minus_1 >> 1u32;
    let two = BigUint::from(2u32);

    for round in 0..k {
        let a = rng.draw_range_covering(&two, n)?;
        let symbol = jacobi(&a, n)?;
        if symbol == 0 {
            tracing::debug!(%n, witness = %a, round, "witness shares a factor");
            return Ok(false);
        }

        // symbol mod n: 1 or n - 1
        let expected = if symbol == 1 {
            BigUint::one()
        } else {
            n_minus_1.clone()
        };
        if a.modpow(&exponent, n) != expected {
            tracing::debug!(%n, witness = %a, round, symbol, "Euler criterion failed");
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Lfsr;

    fn rng() -> RangeRandom<Lfsr> {
        RangeRandom::new(Lfsr::default(), 64).unwrap()
    }

    #[test]
    fn test_small_primes_accepted() {
        let mut rng = rng();
        for p in [2u32, 3, 5, 7, 13, 97, 7919] {
            assert!(solovay_strassen(&BigUint::from(p), &mut rng, 5).unwrap());
        }
    }

    #[test]
    fn test_carmichael_numbers_rejected() {
        let mut rng = rng();
        for n in [561u32, 1105, 1729, 2465, 2821, 6601] {
            assert!(
                !solovay_strassen(&BigUint::from(n), &mut rng, 20).unwrap(),
                "Carmichael number {} accepted",
                n
            );
        }
    }

    #[test]
    fn test_even_rejected_without_witnesses() {
        let mut rng = rng();
        assert!(!solovay_strassen(&BigUint::from(1_000u32), &mut rng, 1).unwrap());
    }

    #[test]
    fn test_zero_witnesses_is_error() {
        let mut rng = rng();
        assert_eq!(
            solovay_strassen(&BigUint::from(97u32), &mut rng, 0),
            Err(PrimalityError::NoWitnesses)
        );
    }

    #[test]
    fn test_candidate_wider_than_sampler() {
        let mut rng = RangeRandom::new(Lfsr::default(), 8).unwrap();
        assert!(solovay_strassen(&BigUint::from(2053u32), &mut rng, 20).unwrap());
        assert!(!solovay_strassen(&BigUint::from(2051u32), &mut rng, 20).unwrap());
        assert_eq!(rng.bits(), 8);
    }
}
