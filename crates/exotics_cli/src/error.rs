//! CLI error type.

use pricer_exotics::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `exotics` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid pricing input (unknown tag, bad parameter, bad dimensions).
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation failed.
    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// Arguments that parse individually but do not fit together.
    #[error("Usage error: {0}")]
    Usage(String),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
