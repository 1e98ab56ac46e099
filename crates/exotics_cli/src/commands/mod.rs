//! CLI command implementations
//!
//! Each command resolves its inputs, prices, and returns rows for
//! [`crate::output`] to render.

pub mod batch;
pub mod demo;
pub mod price;

use clap::Args;
use pricer_exotics::mc::OptionParameters;
use pricer_exotics::path_dependent::OptionType;

/// Market and contract inputs shared by the pricing commands.
///
/// Defaults are the reference scenario: `S0 = 110`, `K = 100`, `T = 1`,
/// `r = 0.05`, `sigma = 0.01`.
#[derive(Debug, Clone, Copy, PartialEq, Args)]
pub struct MarketArgs {
    /// Initial spot price
    #[arg(long, default_value_t = 110.0)]
    pub spot: f64,

    /// Strike (ignored by lookbacks)
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Maturity in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short = 'r', long, default_value_t = 0.05)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, default_value_t = 0.01)]
    pub volatility: f64,
}

impl Default for MarketArgs {
    fn default() -> Self {
        Self {
            spot: 110.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.01,
        }
    }
}

impl MarketArgs {
    /// Builds pricing parameters for the given path count and side.
    pub fn to_params(&self, n_paths: usize, option_type: OptionType) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.rate,
            self.volatility,
            n_paths,
            option_type,
        )
    }
}
