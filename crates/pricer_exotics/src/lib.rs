//! # Path-Dependent Option Pricer
//!
//! Monte Carlo pricing of path-dependent options under Geometric Brownian
//! Motion:
//!
//! - Arithmetic and geometric average Asian options
//! - Discretely monitored barrier options (up/down, in/out)
//! - Floating-strike lookback options
//! - European vanilla options on the same engine
//!
//! ## Layout
//!
//! - [`rng`]: seeded generator handle and per-request streams
//! - [`mc`]: GBM path generation, evaluators, batch pricing, results
//! - [`path_dependent`]: streaming path statistics and payoff definitions
//! - [`analytical`]: closed-form prices used for verification
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_exotics::mc::{price_asian, OptionParameters};
//! use pricer_exotics::path_dependent::OptionType;
//! use pricer_exotics::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(2024);
//! let option_type: OptionType = "call".parse().unwrap();
//! let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.01, 1000, option_type);
//!
//! let result = price_asian(&mut rng, &params).unwrap();
//! println!(
//!     "Asian call: {:.4} +/- {:.4}",
//!     result.price,
//!     result.confidence_95()
//! );
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for results, parameters and
//!   instrument descriptions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod mc;
pub mod path_dependent;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{
    price_asian, price_barrier, price_batch, price_european, price_geometric_asian,
    price_lookback, Discretisation, Instrument, MonteCarloConfig, MonteCarloPricer,
    OptionParameters, PricingError, PricingRequest, PricingResult,
};
pub use path_dependent::{BarrierActivation, BarrierDirection, BarrierSpec, OptionType};
pub use rng::PricerRng;
