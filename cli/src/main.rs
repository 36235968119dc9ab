//! randprime - benchmark driver for the sampling and primality engine
//!
//! ```text
//! randprime pseudos  [--out pseudos.csv] [--samples N] [--bits 40,56,...]
//! randprime primes   [--out primes.csv]  [--trials N]  [--witnesses K]
//! randprime selftest [--generators lfsr,xorshift]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod bench;
mod config;
mod error;

use std::fs::File;
use std::io::BufWriter;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{parse_args, Command, Invocation, USAGE};
use crate::error::CliError;

fn run(invocation: Invocation) -> Result<(), CliError> {
    let config = &invocation.config;
    match invocation.command {
        Command::Pseudos => {
            let mut out = BufWriter::new(File::create(&config.pseudos_out)?);
            bench::pseudos(config, &mut out)?;
            info!(path = %config.pseudos_out.display(), "pseudo-random benchmark written");
        }
        Command::Primes => {
            let mut out = BufWriter::new(File::create(&config.primes_out)?);
            bench::primes(config, &mut out)?;
            info!(path = %config.primes_out.display(), "prime benchmark written");
        }
        Command::SelfTest => {
            for (generator, report) in bench::selftest(config)? {
                println!(
                    "[{} {} bits] mean {:.6} (error {:.2}%), stdev {:.6} (error {:.2}%)",
                    generator,
                    report.bits,
                    report.mean,
                    report.mean_error_pct,
                    report.stdev,
                    report.stdev_error_pct
                );
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let invocation = match parse_args(std::env::args().skip(1)) {
        Ok(invocation) => invocation,
        Err(err @ CliError::Usage(_)) => {
            eprintln!("{}\n\n{}", err, USAGE);
            return ExitCode::from(2);
        }
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(invocation) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
