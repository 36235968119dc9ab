//! Tests for arbitrary-width and range sampling
//!
//! Hard invariants are checked by brute force; distribution shape by
//! mean/variance tolerances.

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use proptest::prelude::*;
use randprime_core::rng::{GeneratorKind, Lcg, Xorshift};
use randprime_core::sampling::{SamplerError, UniformSampler};

fn sampler(bits: u64) -> UniformSampler<Xorshift> {
    UniformSampler::new(Xorshift::new(Some(31337)), bits).unwrap()
}

// ============================================================================
// Bit-width law
// ============================================================================

#[test]
fn test_random_bits_below_power_of_two() {
    let mut s = sampler(64);
    for b in [1u64, 2, 7, 63, 64, 65, 127, 128, 200, 1000] {
        let bound = BigUint::one() << b;
        for _ in 0..200 {
            assert!(s.random_bits(b) < bound, "random_bits({}) out of range", b);
        }
    }
}

#[test]
fn test_each_bit_roughly_equiprobable() {
    let b = 100u64;
    let trials = 4_000;
    let mut s = sampler(b);
    let mut ones = vec![0u32; b as usize];

    for _ in 0..trials {
        let value = s.random();
        for (i, count) in ones.iter_mut().enumerate() {
            if value.bit(i as u64) {
                *count += 1;
            }
        }
    }

    for (i, count) in ones.iter().enumerate() {
        let freq = f64::from(*count) / trials as f64;
        assert!(
            (0.42..0.58).contains(&freq),
            "bit {} set with frequency {}",
            i,
            freq
        );
    }
}

#[test]
fn test_top_partial_chunk_reaches_high_bits() {
    // 70 bits: top 6 bits come from the partial chunk
    let mut s = sampler(70);
    let seen_top = (0..500).any(|_| s.random().bit(69));
    assert!(seen_top, "bit 69 never set");
}

// ============================================================================
// Rejection correctness
// ============================================================================

#[test]
fn test_uniform_below_never_reaches_bound() {
    for kind in GeneratorKind::ALL {
        let mut s = randprime_core::new_generator(kind, 64, Some(99)).unwrap();
        for bound in [1u32, 2, 3, 5, 7, 10, 1000, 65_537] {
            let s_big = BigUint::from(bound);
            let draws = if kind == GeneratorKind::BlumBlumShub { 50 } else { 500 };
            for _ in 0..draws {
                assert!(s.uniform_below(&s_big).unwrap() < s_big);
            }
        }
    }
}

#[test]
fn test_uniform_below64_never_reaches_bound() {
    let mut s = sampler(64);
    for bound in [1u64, 3, 6, 1 << 40, u64::MAX - 1, u64::MAX] {
        for _ in 0..1_000 {
            assert!(s.uniform_below64(bound).unwrap() < bound);
        }
    }
}

#[test]
fn test_uniform_below_near_full_modulus() {
    // s just below 2^bits: rejection region is large but finite
    let mut s = sampler(72);
    let bound = (BigUint::one() << 72u32) - 3u32;
    for _ in 0..500 {
        assert!(s.uniform_below(&bound).unwrap() < bound);
    }
}

#[test]
fn test_bound_wider_than_sampler_rejected() {
    let mut s = sampler(16);
    let bound = (BigUint::one() << 16u32) + 1u32;
    assert!(matches!(
        s.uniform_below(&bound),
        Err(SamplerError::RangeExceedsWidth { bits: 16, .. })
    ));
}

#[test]
fn test_zero_range_rejected() {
    let mut s = sampler(64);
    assert_eq!(s.uniform_below64(0), Err(SamplerError::EmptyRange));
    assert_eq!(
        s.uniform_below(&BigUint::from(0u32)),
        Err(SamplerError::EmptyRange)
    );
}

// ============================================================================
// Range law
// ============================================================================

#[test]
fn test_small_range_mean_and_variance() {
    let s_val = 10u32;
    let trials = 50_000;
    let mut s = UniformSampler::new(Lcg::new(Some(4242)), 64).unwrap();
    let bound = BigUint::from(s_val);

    let mut counts = vec![0u32; s_val as usize];
    for _ in 0..trials {
        let v = s.uniform_below(&bound).unwrap().to_usize().unwrap();
        counts[v] += 1;
    }

    let n = trials as f64;
    let mean = counts
        .iter()
        .enumerate()
        .map(|(v, c)| v as f64 * f64::from(*c))
        .sum::<f64>()
        / n;
    let var = counts
        .iter()
        .enumerate()
        .map(|(v, c)| (v as f64 - mean).powi(2) * f64::from(*c))
        .sum::<f64>()
        / n;

    let expected_mean = f64::from(s_val - 1) / 2.0;
    let expected_var = (f64::from(s_val).powi(2) - 1.0) / 12.0;
    assert!((mean - expected_mean).abs() < 0.1, "mean {}", mean);
    assert!((var - expected_var).abs() < 0.3, "variance {}", var);

    for (v, c) in counts.iter().enumerate() {
        let freq = f64::from(*c) / n;
        assert!((freq - 0.1).abs() < 0.01, "value {} frequency {}", v, freq);
    }
}

#[test]
fn test_chi_square_small_range() {
    let s_val = 6u64;
    let trials = 60_000u64;
    let mut s = sampler(64);
    let mut counts = [0u64; 6];
    for _ in 0..trials {
        counts[s.uniform_below64(s_val).unwrap() as usize] += 1;
    }
    let expected = (trials / s_val) as f64;
    let chi2: f64 = counts
        .iter()
        .map(|&c| (c as f64 - expected).powi(2) / expected)
        .sum();
    // 5 degrees of freedom, p = 0.001 critical value
    assert!(chi2 < 20.52, "chi-square {} too large: {:?}", chi2, counts);
}

proptest! {
    #[test]
    fn prop_uniform_below_in_range(seed in 1u64..=u64::MAX, bound in 1u64..=u64::MAX, bits in 64u64..300) {
        let mut s = UniformSampler::new(Xorshift::new(Some(seed)), bits).unwrap();
        let s_big = BigUint::from(bound);
        prop_assert!(s.uniform_below(&s_big).unwrap() < s_big);
    }

    #[test]
    fn prop_random_bits_in_range(seed in 1u64..=u64::MAX, b in 0u64..520) {
        let mut s = UniformSampler::new(Lcg::new(Some(seed)), 64).unwrap();
        prop_assert!(s.random_bits(b) < (BigUint::one() << b));
    }
}
