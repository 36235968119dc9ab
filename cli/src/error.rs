use randprime_core::{PrimalityError, SamplerError};
use thiserror::Error;

/// Errors surfaced by the `randprime` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Sampler(#[from] SamplerError),

    #[error(transparent)]
    Primality(#[from] PrimalityError),
}
