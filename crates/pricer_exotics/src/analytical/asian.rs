//! Geometric average Asian option analytical pricing.
//!
//! The geometric mean of log-normal prices is itself log-normal, so both the
//! continuously and the discretely sampled geometric Asian reduce to the
//! Black formula.
//!
//! # Continuous Sampling (Kemna-Vorst)
//!
//! ```text
//! σ_G = σ / √3
//! F_G = S * exp((r - σ²/6) * T / 2)
//! ```
//!
//! # Discrete Sampling
//!
//! With `n + 1` equally spaced fixings `t_i = i*T/n`, `t_0 = 0` included,
//! which is the averaging window of the Monte Carlo evaluator:
//!
//! ```text
//! E[ln G]   = ln S + (r - σ²/2) * T / 2
//! Var[ln G] = σ² * T * (2n + 1) / (6 (n + 1))
//! ```
//!
//! The variance tends to the continuous `σ² T / 3` as `n → ∞`.
//!
//! # References
//!
//! - Kemna, A.G.Z. and Vorst, A.C.F. (1990). "A Pricing Method for Options
//!   Based on Average Asset Values." Journal of Banking and Finance, 14, 113-129.

use num_traits::Float;

use super::black_scholes::{black_price, lit};
use crate::path_dependent::OptionType;

/// Moments of `ln G` for a geometric average.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometricAverageMoments<T: Float> {
    /// `E[ln G]`
    pub log_mean: T,
    /// `Var[ln G]`
    pub log_variance: T,
}

impl<T: Float> GeometricAverageMoments<T> {
    /// Continuous sampling over `[0, T]`.
    pub fn continuous(spot: T, rate: T, volatility: T, maturity: T) -> Self {
        let vol_sq = volatility * volatility;
        Self {
            log_mean: spot.ln() + (rate - vol_sq / lit(2.0)) * maturity / lit(2.0),
            log_variance: vol_sq * maturity / lit(3.0),
        }
    }

    /// Discrete sampling on `n_steps + 1` equally spaced points, `t = 0`
    /// included.
    pub fn discrete(spot: T, rate: T, volatility: T, maturity: T, n_steps: usize) -> Self {
        let vol_sq = volatility * volatility;
        let n: T = T::from(n_steps).unwrap_or_else(T::nan);
        let one = T::one();
        Self {
            log_mean: spot.ln() + (rate - vol_sq / lit(2.0)) * maturity / lit(2.0),
            log_variance: vol_sq * maturity * (lit::<T>(2.0) * n + one)
                / (lit::<T>(6.0) * (n + one)),
        }
    }

    /// Forward of the geometric average, `E[G]`.
    #[inline]
    pub fn forward(&self) -> T {
        (self.log_mean + self.log_variance / lit(2.0)).exp()
    }

    /// Prices a call or put on the geometric average.
    pub fn price(&self, strike: T, rate: T, maturity: T, option_type: OptionType) -> T {
        let discount = (-rate * maturity).exp();
        black_price(
            self.forward(),
            strike,
            self.log_variance.sqrt(),
            discount,
            option_type,
        )
    }
}

fn degenerate<T: Float>(spot: T, strike: T, maturity: T) -> bool {
    let zero = T::zero();
    spot <= zero || strike <= zero || maturity <= zero
}

/// Kemna-Vorst continuously sampled geometric Asian price.
///
/// Returns zero for non-positive spot, strike or maturity.
///
/// ```rust
/// use pricer_exotics::analytical::geometric_asian_call;
///
/// let price = geometric_asian_call(100.0_f64, 100.0, 0.05, 0.2, 1.0);
/// assert!(price > 5.0 && price < 6.0);
/// ```
pub fn geometric_asian<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    option_type: OptionType,
) -> T {
    if degenerate(spot, strike, maturity) {
        return T::zero();
    }
    GeometricAverageMoments::continuous(spot, rate, volatility, maturity).price(
        strike,
        rate,
        maturity,
        option_type,
    )
}

/// Continuously sampled geometric Asian call.
#[inline]
pub fn geometric_asian_call<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    geometric_asian(spot, strike, rate, volatility, maturity, OptionType::Call)
}

/// Continuously sampled geometric Asian put.
#[inline]
pub fn geometric_asian_put<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    geometric_asian(spot, strike, rate, volatility, maturity, OptionType::Put)
}

/// Discretely sampled geometric Asian price on `n_steps + 1` fixings.
///
/// Exact for the log-normal path scheme on the same grid.
pub fn discrete_geometric_asian<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    n_steps: usize,
    option_type: OptionType,
) -> T {
    if degenerate(spot, strike, maturity) || n_steps == 0 {
        return T::zero();
    }
    GeometricAverageMoments::discrete(spot, rate, volatility, maturity, n_steps).price(
        strike,
        rate,
        maturity,
        option_type,
    )
}
