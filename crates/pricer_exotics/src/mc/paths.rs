//! GBM path generation.
//!
//! Simulates `dS = mu S dt + sigma S dW` on the trading-day grid
//! (`floor(252 * T)` steps). The default scheme is the explicit Euler
//! recurrence
//!
//! ```text
//! S[n+1] = S[n] * (1 + mu*dt + sigma*sqrt(dt)*Z)
//! ```
//!
//! which is first order and can go non-positive for large `sigma*sqrt(dt)`.
//! The exact log-normal step is available as [`Discretisation::LogNormal`].
//!
//! # Draw Order
//!
//! All `n_paths` normals for step `n` are drawn before any normal for step
//! `n + 1`. Together with a fixed seed this fixes the grid bit for bit.

use tracing::{debug, warn};

use super::config::{steps_for_maturity, validate_dimensions, Discretisation};
use super::error::{PricingError, Result};
use super::grid::SimulationGrid;
use crate::rng::PricerRng;

/// Parameters for Geometric Brownian Motion path generation.
///
/// ```rust
/// use pricer_exotics::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Drift (μ); the risk-free rate under the pricing measure.
    pub drift: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Horizon (T) in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-positive or non-finite spot or maturity,
    /// a non-finite drift, or a negative or non-finite volatility.
    pub fn validate(&self) -> Result<()> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::parameter(
                "spot",
                format!("must be positive and finite, got {}", self.spot),
            ));
        }
        if !self.drift.is_finite() {
            return Err(PricingError::parameter(
                "drift",
                format!("must be finite, got {}", self.drift),
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::parameter(
                "volatility",
                format!("must be non-negative and finite, got {}", self.volatility),
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(PricingError::parameter(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        Ok(())
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Generates a GBM price grid of shape `(floor(252*T) + 1, n_paths)`.
///
/// # Errors
///
/// Fails before consuming any draw if the parameters are invalid, if
/// `n_paths` is zero, or if the maturity is shorter than one trading day.
///
/// ```rust
/// use pricer_exotics::mc::{generate_gbm_paths, Discretisation, GbmParams};
/// use pricer_exotics::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let grid = generate_gbm_paths(
///     &mut rng,
///     GbmParams::new(100.0, 0.05, 0.2, 1.0),
///     500,
///     Discretisation::Euler,
/// )
/// .unwrap();
///
/// assert_eq!(grid.n_steps(), 252);
/// assert!(grid.row(0).iter().all(|&s| s == 100.0));
/// ```
pub fn generate_gbm_paths(
    rng: &mut PricerRng,
    params: GbmParams,
    n_paths: usize,
    scheme: Discretisation,
) -> Result<SimulationGrid> {
    params.validate()?;
    let n_steps = steps_for_maturity(params.maturity);
    validate_dimensions(n_paths, n_steps, params.maturity)?;

    let mut grid = SimulationGrid::filled(params.spot, params.maturity, n_steps, n_paths);
    let dt = grid.dt();
    let sqrt_dt = dt.sqrt();

    // Step factors precomputed outside the loop
    let (drift_dt, vol_sqrt_dt) = match scheme {
        Discretisation::Euler => (params.drift * dt, params.volatility * sqrt_dt),
        Discretisation::LogNormal => (
            (params.drift - 0.5 * params.volatility * params.volatility) * dt,
            params.volatility * sqrt_dt,
        ),
    };

    let mut normals = vec![0.0; n_paths];

    for step in 0..n_steps {
        rng.fill_normal(&mut normals);
        let (prev, next) = grid.rows_mut(step);

        match scheme {
            Discretisation::Euler => {
                for ((s_next, &s_prev), &z) in next.iter_mut().zip(prev).zip(&normals) {
                    *s_next = s_prev * (1.0 + drift_dt + vol_sqrt_dt * z);
                }
            }
            Discretisation::LogNormal => {
                for ((s_next, &s_prev), &z) in next.iter_mut().zip(prev).zip(&normals) {
                    *s_next = s_prev * (drift_dt + vol_sqrt_dt * z).exp();
                }
            }
        }
    }

    debug!(
        n_steps,
        n_paths,
        dt,
        scheme = %scheme,
        seed = rng.seed(),
        "generated GBM grid"
    );

    if scheme == Discretisation::Euler {
        let non_positive = grid.count_non_positive();
        if non_positive > 0 {
            warn!(
                non_positive,
                volatility = params.volatility,
                dt,
                "Euler scheme produced non-positive prices; geometric averages will be NaN"
            );
        }
    }

    Ok(grid)
}
