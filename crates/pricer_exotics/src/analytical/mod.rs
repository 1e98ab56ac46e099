//! Analytical (closed-form) reference prices.
//!
//! Used to check the Monte Carlo evaluators:
//!
//! - **European options**: Black-Scholes
//! - **Geometric average Asian options**: Kemna-Vorst (continuous) and the
//!   exact discrete-fixing formula on the simulation grid
//!
//! ```rust
//! use pricer_exotics::analytical::{black_scholes_call, geometric_asian_call};
//!
//! let european = black_scholes_call(100.0_f64, 100.0, 0.05, 0.2, 1.0);
//! let asian = geometric_asian_call(100.0_f64, 100.0, 0.05, 0.2, 1.0);
//! assert!(asian < european);
//! ```

pub mod asian;
pub mod black_scholes;

pub use asian::{
    discrete_geometric_asian, geometric_asian, geometric_asian_call, geometric_asian_put,
    GeometricAverageMoments,
};
pub use black_scholes::{
    black_price, black_scholes, black_scholes_call, black_scholes_put, norm_cdf,
};
