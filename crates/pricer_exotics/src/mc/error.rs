//! Error types for the Monte Carlo pricing kernel.
//!
//! Every variant is raised synchronously before any random draw is consumed.
//! The kernel never retries and never returns partial results.

use thiserror::Error;

use super::config::MAX_PATHS;

/// Pricing error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PricingError {
    /// An enumerated tag (option kind, barrier direction, activation type)
    /// was outside its closed set.
    #[error("Invalid {kind} '{value}': expected one of {expected}")]
    InvalidArgument {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The rejected tag.
        value: String,
        /// The accepted tags, for the message.
        expected: &'static str,
    },

    /// Path count outside the valid range.
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Zero time steps (maturity shorter than one trading day).
    #[error("Invalid step count {steps} for maturity {maturity}: must be at least 1")]
    InvalidStepCount {
        /// Derived step count.
        steps: usize,
        /// Maturity the step count was derived from.
        maturity: f64,
    },

    /// Invalid numeric parameter.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },
}

impl PricingError {
    /// Creates an invalid-parameter error.
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias for pricing operations.
pub type Result<T> = std::result::Result<T, PricingError>;
