//! Asian option payoff implementations.
//!
//! - **Arithmetic Asian**: payoff on the arithmetic mean of prices
//! - **Geometric Asian**: payoff on the geometric mean of prices
//!
//! # Averaging Window
//!
//! The average runs over every grid point, `t_0 = 0` included, so a path of
//! `n_steps` steps contributes `n_steps + 1` prices and the initial spot
//! carries the same weight as any other fixing.

use super::{ObservationType, OptionType, PathDependentPayoff, PathObserver};
use num_traits::Float;

/// Parameters for Asian option payoffs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AsianParams<T: Float> {
    /// Strike price
    pub strike: T,
    /// Call or put
    pub option_type: OptionType,
}

impl<T: Float> AsianParams<T> {
    /// Creates Asian parameters.
    #[inline]
    pub fn new(strike: T, option_type: OptionType) -> Self {
        Self {
            strike,
            option_type,
        }
    }

    /// Creates parameters for an Asian call option.
    #[inline]
    pub fn call(strike: T) -> Self {
        Self::new(strike, OptionType::Call)
    }

    /// Creates parameters for an Asian put option.
    #[inline]
    pub fn put(strike: T) -> Self {
        Self::new(strike, OptionType::Put)
    }
}

/// Arithmetic average Asian option payoff.
///
/// - Call: max(A - K, 0) where A = (1/n) Σ S_i
/// - Put: max(K - A, 0)
#[derive(Clone, Copy, Debug)]
pub struct AsianArithmeticPayoff<T: Float> {
    params: AsianParams<T>,
}

impl<T: Float> AsianArithmeticPayoff<T> {
    /// Creates a new arithmetic Asian payoff.
    #[inline]
    pub fn new(params: AsianParams<T>) -> Self {
        Self { params }
    }

    /// Creates a call option payoff.
    #[inline]
    pub fn call(strike: T) -> Self {
        Self::new(AsianParams::call(strike))
    }

    /// Creates a put option payoff.
    #[inline]
    pub fn put(strike: T) -> Self {
        Self::new(AsianParams::put(strike))
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &AsianParams<T> {
        &self.params
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for AsianArithmeticPayoff<T> {
    fn compute(&self, observer: &PathObserver<T>) -> T {
        self.params
            .option_type
            .intrinsic(observer.arithmetic_average(), self.params.strike)
    }

    fn required_observations(&self) -> ObservationType {
        ObservationType::arithmetic_asian()
    }
}

/// Geometric average Asian option payoff.
///
/// - Call: max(G - K, 0) where G = exp((1/n) Σ ln S_i)
/// - Put: max(K - G, 0)
///
/// The logarithm is not guarded: a non-positive price on the path makes `G`
/// NaN, and the NaN propagates into the price estimate.
#[derive(Clone, Copy, Debug)]
pub struct AsianGeometricPayoff<T: Float> {
    params: AsianParams<T>,
}

impl<T: Float> AsianGeometricPayoff<T> {
    /// Creates a new geometric Asian payoff.
    #[inline]
    pub fn new(params: AsianParams<T>) -> Self {
        Self { params }
    }

    /// Creates a call option payoff.
    #[inline]
    pub fn call(strike: T) -> Self {
        Self::new(AsianParams::call(strike))
    }

    /// Creates a put option payoff.
    #[inline]
    pub fn put(strike: T) -> Self {
        Self::new(AsianParams::put(strike))
    }

    /// Returns the parameters.
    #[inline]
    pub fn params(&self) -> &AsianParams<T> {
        &self.params
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for AsianGeometricPayoff<T> {
    fn compute(&self, observer: &PathObserver<T>) -> T {
        let geo_avg = observer.geometric_average();
        // max() would swallow a NaN average
        if geo_avg.is_nan() {
            return geo_avg;
        }
        self.params.option_type.intrinsic(geo_avg, self.params.strike)
    }

    fn required_observations(&self) -> ObservationType {
        ObservationType::geometric_asian()
    }
}
