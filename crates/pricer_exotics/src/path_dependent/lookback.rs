//! Floating-strike lookback payoffs.
//!
//! - **Call**: max(S_T - S_min, 0)
//! - **Put**: max(S_max - S_T, 0)
//!
//! Extrema run over every grid point including `t = 0`, so both payoffs are
//! non-negative by construction.

use super::{ObservationType, OptionType, PathDependentPayoff, PathObserver};
use num_traits::Float;

/// Floating-strike lookback option payoff.
#[derive(Clone, Copy, Debug)]
pub struct LookbackPayoff<T: Float> {
    option_type: OptionType,
    _marker: std::marker::PhantomData<T>,
}

impl<T: Float> LookbackPayoff<T> {
    /// Creates a new lookback payoff.
    #[inline]
    pub fn new(option_type: OptionType) -> Self {
        Self {
            option_type,
            _marker: std::marker::PhantomData,
        }
    }

    /// Floating-strike call: buys at the path minimum.
    #[inline]
    pub fn call() -> Self {
        Self::new(OptionType::Call)
    }

    /// Floating-strike put: sells at the path maximum.
    #[inline]
    pub fn put() -> Self {
        Self::new(OptionType::Put)
    }

    /// Returns call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for LookbackPayoff<T> {
    fn compute(&self, observer: &PathObserver<T>) -> T {
        let terminal = observer.terminal();
        match self.option_type {
            OptionType::Call => (terminal - observer.minimum()).max(T::zero()),
            OptionType::Put => (observer.maximum() - terminal).max(T::zero()),
        }
    }

    fn required_observations(&self) -> ObservationType {
        ObservationType::lookback()
    }
}
