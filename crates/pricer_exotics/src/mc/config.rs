//! Monte Carlo simulation configuration.
//!
//! Time-grid conventions, dimension limits and the discretisation scheme
//! selection shared by every evaluator.

use std::fmt;
use std::str::FromStr;

use super::error::{PricingError, Result};

/// Trading days per year; the time grid has `floor(252 * T)` steps.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Number of time steps for a maturity under the trading-day convention.
///
/// Non-finite or negative maturities map to zero steps.
///
/// ```rust
/// use pricer_exotics::mc::steps_for_maturity;
///
/// assert_eq!(steps_for_maturity(1.0), 252);
/// assert_eq!(steps_for_maturity(0.5), 126);
/// assert_eq!(steps_for_maturity(0.001), 0);
/// ```
#[inline]
pub fn steps_for_maturity(maturity: f64) -> usize {
    if maturity.is_finite() && maturity > 0.0 {
        (TRADING_DAYS_PER_YEAR * maturity).floor() as usize
    } else {
        0
    }
}

/// Checks path and step counts and the size of the price matrix.
///
/// Any positive step count is accepted; only a `(n_steps + 1) * n_paths`
/// matrix that overflows `usize` is rejected.
pub(crate) fn validate_dimensions(n_paths: usize, n_steps: usize, maturity: f64) -> Result<()> {
    if n_paths == 0 || n_paths > MAX_PATHS {
        return Err(PricingError::InvalidPathCount(n_paths));
    }
    if n_steps == 0 {
        return Err(PricingError::InvalidStepCount {
            steps: n_steps,
            maturity,
        });
    }
    n_steps
        .checked_add(1)
        .and_then(|rows| rows.checked_mul(n_paths))
        .ok_or_else(|| {
            PricingError::parameter(
                "maturity",
                format!("{n_steps} steps x {n_paths} paths overflows the price matrix"),
            )
        })?;
    Ok(())
}

/// Time-stepping scheme for the GBM path generator.
///
/// `Euler` is the default and reproduces the additive recurrence
/// `S[n+1] = S[n] * (1 + mu*dt + sigma*dW)`. It can produce non-positive
/// prices when `sigma * sqrt(dt)` is large; the generator logs a warning in
/// that case but does not alter the paths.
///
/// `LogNormal` uses the exact step
/// `S[n+1] = S[n] * exp((mu - sigma²/2)*dt + sigma*dW)`, which stays strictly
/// positive. It must be selected explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discretisation {
    /// Explicit Euler-Maruyama step on the price.
    #[default]
    Euler,
    /// Exact log-normal step.
    LogNormal,
}

impl Discretisation {
    /// Returns the lowercase tag used in configuration files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Discretisation::Euler => "euler",
            Discretisation::LogNormal => "lognormal",
        }
    }
}

impl fmt::Display for Discretisation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discretisation {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "euler" => Ok(Discretisation::Euler),
            "lognormal" | "log-normal" | "exact" => Ok(Discretisation::LogNormal),
            _ => Err(PricingError::InvalidArgument {
                kind: "discretisation",
                value: s.to_string(),
                expected: "euler, lognormal",
            }),
        }
    }
}

/// Monte Carlo pricer configuration.
///
/// ```rust
/// use pricer_exotics::mc::{Discretisation, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder()
///     .seed(42)
///     .discretisation(Discretisation::LogNormal)
///     .build();
///
/// assert_eq!(config.seed(), Some(42));
/// assert_eq!(config.discretisation(), Discretisation::LogNormal);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MonteCarloConfig {
    discretisation: Discretisation,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the discretisation scheme.
    #[inline]
    pub fn discretisation(&self) -> Discretisation {
        self.discretisation
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// Builder for [`MonteCarloConfig`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    discretisation: Discretisation,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the discretisation scheme.
    #[inline]
    pub fn discretisation(mut self, discretisation: Discretisation) -> Self {
        self.discretisation = discretisation;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    #[inline]
    pub fn build(self) -> MonteCarloConfig {
        MonteCarloConfig {
            discretisation: self.discretisation,
            seed: self.seed,
        }
    }
}
