//! Timing benchmarks over the core engine
//!
//! Each benchmark appends one comma-separated row per (variant, bit-width)
//! pair to its writer.

use std::io::Write;
use std::time::{Duration, Instant};

use num_bigint::BigUint;
use randprime_core::stats::{unit_fraction, Moments};
use randprime_core::{
    find_probable_prime, new_generator, uniformity_report, GeneratorKind, RangeRandom, Tester,
    UniformityReport,
};
use tracing::info;

use crate::config::BenchConfig;
use crate::error::CliError;

/// Timing and moment errors for one generator at one bit-width
#[derive(Debug, Clone)]
pub struct PseudoRow {
    pub generator: GeneratorKind,
    pub bits: u64,
    pub mean_draw: Duration,
    pub report: UniformityReport,
}

impl PseudoRow {
    pub fn to_csv(&self) -> String {
        format!(
            "{}, {}, {}, {:.5}, {:.5}",
            self.generator,
            self.bits,
            self.mean_draw.as_secs_f64() * 1e6,
            self.report.mean_error_pct,
            self.report.stdev_error_pct
        )
    }
}

/// Search timings and results for one tester at one bit-width
#[derive(Debug, Clone)]
pub struct PrimeRow {
    pub tester: Tester,
    pub bits: u64,
    pub mean_search: Duration,
    pub primes: Vec<BigUint>,
}

impl PrimeRow {
    pub fn to_csv(&self) -> String {
        let primes: Vec<String> = self.primes.iter().map(|p| p.to_string()).collect();
        format!(
            "{}, {}, {}, {}",
            self.tester,
            self.bits,
            self.mean_search.as_secs_f64() * 1e3,
            primes.join(", ")
        )
    }
}

/// Time `samples` draws for one generator and width.
pub fn run_pseudo(
    generator: GeneratorKind,
    bits: u64,
    samples: usize,
    seed: Option<u64>,
) -> Result<PseudoRow, CliError> {
    let mut sampler = new_generator(generator, bits, seed)?;
    let mut moments = Moments::new();
    let mut elapsed = Duration::ZERO;

    for _ in 0..samples {
        let start = Instant::now();
        let value = sampler.random();
        elapsed += start.elapsed();
        moments.push(unit_fraction(&value, bits));
    }

    Ok(PseudoRow {
        generator,
        bits,
        mean_draw: elapsed.div_f64(samples.max(1) as f64),
        report: moments.report(bits)?,
    })
}

/// Time `trials` prime searches for one tester and width.
pub fn run_primes(
    tester: Tester,
    bits: u64,
    config: &BenchConfig,
) -> Result<PrimeRow, CliError> {
    let mut rng = RangeRandom::with_kind(config.prime_generator, bits, config.seed)?;
    let mut primes = Vec::with_capacity(config.trials);
    let mut elapsed = Duration::ZERO;

    for _ in 0..config.trials {
        let start = Instant::now();
        let outcome = find_probable_prime(&mut rng, bits, tester, config.witnesses)?;
        elapsed += start.elapsed();
        primes.push(outcome.prime);
    }

    Ok(PrimeRow {
        tester,
        bits,
        mean_search: elapsed.div_f64(config.trials.max(1) as f64),
        primes,
    })
}

pub fn pseudos<W: Write>(config: &BenchConfig, out: &mut W) -> Result<(), CliError> {
    for &generator in &config.generators {
        for &bits in &config.bit_widths {
            let row = run_pseudo(generator, bits, config.samples, config.seed)?;
            info!(%generator, bits, mean_us = row.mean_draw.as_secs_f64() * 1e6, "pseudo benchmark row");
            writeln!(out, "{}", row.to_csv())?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn primes<W: Write>(config: &BenchConfig, out: &mut W) -> Result<(), CliError> {
    for &tester in &config.testers {
        for &bits in &config.bit_widths {
            let row = run_primes(tester, bits, config)?;
            info!(%tester, bits, mean_ms = row.mean_search.as_secs_f64() * 1e3, "prime benchmark row");
            writeln!(out, "{}", row.to_csv())?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Uniformity reports for every configured generator at every width.
pub fn selftest(config: &BenchConfig) -> Result<Vec<(GeneratorKind, UniformityReport)>, CliError> {
    let mut reports = Vec::new();
    for &generator in &config.generators {
        for &bits in &config.bit_widths {
            let mut sampler = new_generator(generator, bits, config.seed)?;
            reports.push((generator, uniformity_report(&mut sampler, config.samples)?));
        }
    }
    Ok(reports)
}
