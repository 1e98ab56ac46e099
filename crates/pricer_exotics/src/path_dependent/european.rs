//! European vanilla payoff on the terminal price.
//!
//! Priced on the same grid as the path-dependent payoffs, which makes it the
//! control case against the Black-Scholes closed form.

use super::{ObservationType, OptionType, PathDependentPayoff, PathObserver};
use num_traits::Float;

/// European vanilla payoff: `max(S_T - K, 0)` or `max(K - S_T, 0)`.
#[derive(Clone, Copy, Debug)]
pub struct EuropeanPayoff<T: Float> {
    strike: T,
    option_type: OptionType,
}

impl<T: Float> EuropeanPayoff<T> {
    /// Creates a new European payoff.
    #[inline]
    pub fn new(strike: T, option_type: OptionType) -> Self {
        Self {
            strike,
            option_type,
        }
    }

    /// Creates a European call.
    #[inline]
    pub fn call(strike: T) -> Self {
        Self::new(strike, OptionType::Call)
    }

    /// Creates a European put.
    #[inline]
    pub fn put(strike: T) -> Self {
        Self::new(strike, OptionType::Put)
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for EuropeanPayoff<T> {
    fn compute(&self, observer: &PathObserver<T>) -> T {
        self.option_type.intrinsic(observer.terminal(), self.strike)
    }

    fn required_observations(&self) -> ObservationType {
        ObservationType::terminal_only()
    }
}
