//! Benchmark configuration
//!
//! Defaults reproduce the reference benchmark: eleven bit-widths from 40 to
//! 4096, one million draws per generator and width, ten prime searches per
//! tester and width.

use std::path::PathBuf;

use randprime_core::{GeneratorKind, Tester};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// Bit-widths benchmarked when none are configured.
pub const DEFAULT_BIT_WIDTHS: [u64; 11] = [40, 56, 80, 128, 168, 224, 256, 512, 1024, 2048, 4096];

/// Benchmark parameters, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Generators timed by `pseudos` and summarized by `selftest`
    pub generators: Vec<GeneratorKind>,

    /// Testers timed by `primes`
    pub testers: Vec<Tester>,

    /// Generator backing the prime searches
    pub prime_generator: GeneratorKind,

    pub bit_widths: Vec<u64>,

    /// Draws per generator and bit-width
    pub samples: usize,

    /// Prime searches per tester and bit-width
    pub trials: usize,

    /// Witnesses per primality test
    pub witnesses: u32,

    /// Optional seed shared by every generator
    pub seed: Option<u64>,

    pub pseudos_out: PathBuf,
    pub primes_out: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            generators: vec![GeneratorKind::Lfsr, GeneratorKind::Xorshift],
            testers: Tester::ALL.to_vec(),
            prime_generator: GeneratorKind::Lfsr,
            bit_widths: DEFAULT_BIT_WIDTHS.to_vec(),
            samples: 1_000_000,
            trials: 10,
            witnesses: 1,
            seed: None,
            pseudos_out: PathBuf::from("pseudos.csv"),
            primes_out: PathBuf::from("primes.csv"),
        }
    }
}

impl BenchConfig {
    /// Load a config file; missing fields keep their defaults.
    pub fn load(path: &str) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_string(),
            source,
        })?;
        let config: BenchConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if self.bit_widths.is_empty() {
            return Err(CliError::InvalidConfig("bit_widths must not be empty".into()));
        }
        if let Some(bits) = self.bit_widths.iter().find(|&&b| b < 4) {
            return Err(CliError::InvalidConfig(format!(
                "bit width {} is below the 4-bit minimum",
                bits
            )));
        }
        if self.samples < 2 {
            return Err(CliError::InvalidConfig("samples must be at least 2".into()));
        }
        if self.trials == 0 {
            return Err(CliError::InvalidConfig("trials must be positive".into()));
        }
        if self.witnesses == 0 {
            return Err(CliError::InvalidConfig("witnesses must be positive".into()));
        }
        Ok(())
    }
}

/// Benchmark selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pseudos,
    Primes,
    SelfTest,
}

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: Command,
    pub config: BenchConfig,
}

pub const USAGE: &str = "\
usage: randprime <pseudos|primes|selftest> [options]

options:
  --config <file>         JSON benchmark config
  --out <file>            CSV output path for the selected benchmark
  --samples <n>           draws per generator and bit-width
  --bits <a,b,...>        bit-widths to benchmark
  --trials <n>            prime searches per tester and bit-width
  --witnesses <k>         witnesses per primality test
  --generators <a,b,...>  lfsr, xorshift, lcg, bbs
  --seed <n>              seed for every generator";

/// Parse `args` (without the program name).
///
/// `--config` is applied first so other flags override file values.
pub fn parse_args<I>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let command = match args.next().as_deref() {
        Some("pseudos") => Command::Pseudos,
        Some("primes") => Command::Primes,
        Some("selftest") => Command::SelfTest,
        Some(other) => return Err(CliError::Usage(format!("unknown command '{}'", other))),
        None => return Err(CliError::Usage("missing command".into())),
    };

    let mut flags: Vec<(String, String)> = Vec::new();
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| CliError::Usage(format!("{} expects a value", flag)))?;
        flags.push((flag, value));
    }

    let mut config = match flags.iter().find(|(flag, _)| flag == "--config") {
        Some((_, path)) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };

    for (flag, value) in &flags {
        match flag.as_str() {
            "--config" => {}
            "--out" => match command {
                Command::Pseudos | Command::SelfTest => config.pseudos_out = value.into(),
                Command::Primes => config.primes_out = value.into(),
            },
            "--samples" => config.samples = parse_number(flag, value)?,
            "--trials" => config.trials = parse_number(flag, value)?,
            "--witnesses" => config.witnesses = parse_number(flag, value)?,
            "--seed" => config.seed = Some(parse_number(flag, value)?),
            "--bits" => {
                config.bit_widths = value
                    .split(',')
                    .map(|b| parse_number(flag, b.trim()))
                    .collect::<Result<_, _>>()?
            }
            "--generators" => {
                config.generators = value
                    .split(',')
                    .map(|g| g.trim().parse::<GeneratorKind>())
                    .collect::<Result<_, _>>()?
            }
            other => return Err(CliError::Usage(format!("unknown option '{}'", other))),
        }
    }

    config.validate()?;
    Ok(Invocation { command, config })
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> Result<T, CliError> {
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("{} expects a number, got '{}'", flag, value)))
}
