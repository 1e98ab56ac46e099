//! Monte Carlo pricing kernel.
//!
//! # Architecture
//!
//! ```text
//! price_asian / price_barrier / ...     MonteCarloPricer      price_batch
//!            │                                │                    │
//!            └──────────────┬─────────────────┴────────────────────┘
//!                           ▼
//!                 price_path_dependent()
//!                 ├── generate_gbm_paths()  → SimulationGrid
//!                 ├── evaluate_grid()       → PathObserver per path
//!                 └── PricingResult::from_discounted_payoffs()
//! ```
//!
//! # Randomness
//!
//! There is no global generator. Every entry point takes a
//! [`PricerRng`](crate::rng::PricerRng) (or owns one, for
//! [`MonteCarloPricer`]), and the draw order is fixed: all paths of step `n`
//! before any path of step `n + 1`.
//!
//! # Example
//!
//! ```rust
//! use pricer_exotics::mc::{price_barrier, price_european, OptionParameters};
//! use pricer_exotics::path_dependent::{BarrierSpec, OptionType};
//! use pricer_exotics::rng::PricerRng;
//!
//! let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.01, 1000, OptionType::Call);
//!
//! let mut rng = PricerRng::from_seed(7);
//! let knock_out = price_barrier(&mut rng, &params, BarrierSpec::down_out(80.0)).unwrap();
//!
//! let mut rng = PricerRng::from_seed(7);
//! let vanilla = price_european(&mut rng, &params).unwrap();
//!
//! // The barrier is far away: nothing is knocked out.
//! assert_eq!(knock_out.price, vanilla.price);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod grid;
pub mod paths;
pub mod pricer;
pub mod result;

pub use batch::{price_batch, price_batch_sequential, PricingRequest};
pub use config::{
    steps_for_maturity, Discretisation, MonteCarloConfig, MonteCarloConfigBuilder, MAX_PATHS,
    TRADING_DAYS_PER_YEAR,
};
pub use error::{PricingError, Result};
pub use grid::SimulationGrid;
pub use paths::{generate_gbm_paths, GbmParams};
pub use pricer::{
    evaluate_grid, price_asian, price_barrier, price_european, price_geometric_asian,
    price_lookback, price_path_dependent, Instrument, MonteCarloPricer, OptionParameters,
};
pub use result::{PricingResult, Z_95};
