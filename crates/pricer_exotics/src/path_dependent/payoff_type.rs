//! PathPayoffType enum for static dispatch of path-dependent payoffs.

use super::{
    AsianArithmeticPayoff, AsianGeometricPayoff, BarrierPayoff, BarrierSpec, EuropeanPayoff,
    LookbackPayoff, ObservationType, OptionType, PathDependentPayoff, PathObserver,
};
use num_traits::Float;

/// Enum encompassing every payoff the engine prices.
///
/// Lets the pricer hold a heterogeneous set of payoffs without trait
/// objects; each variant wraps the corresponding payoff struct.
///
/// ```rust
/// use pricer_exotics::path_dependent::{
///     OptionType, PathDependentPayoff, PathObserver, PathPayoffType,
/// };
///
/// let payoff = PathPayoffType::asian(100.0, OptionType::Call);
/// let mut observer = PathObserver::with_observations(payoff.required_observations());
/// observer.observe(100.0);
/// observer.observe(110.0);
/// observer.observe(105.0);
///
/// assert_eq!(payoff.compute(&observer), 5.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum PathPayoffType<T: Float> {
    /// Arithmetic average Asian option
    AsianArithmetic(AsianArithmeticPayoff<T>),
    /// Geometric average Asian option
    AsianGeometric(AsianGeometricPayoff<T>),
    /// Barrier option
    Barrier(BarrierPayoff<T>),
    /// Floating-strike lookback option
    Lookback(LookbackPayoff<T>),
    /// European vanilla on the terminal price
    European(EuropeanPayoff<T>),
}

impl<T: Float + Send + Sync> PathPayoffType<T> {
    /// Creates an arithmetic average Asian option.
    #[inline]
    pub fn asian(strike: T, option_type: OptionType) -> Self {
        Self::AsianArithmetic(AsianArithmeticPayoff::new(super::AsianParams::new(
            strike,
            option_type,
        )))
    }

    /// Creates a geometric average Asian option.
    #[inline]
    pub fn geometric_asian(strike: T, option_type: OptionType) -> Self {
        Self::AsianGeometric(AsianGeometricPayoff::new(super::AsianParams::new(
            strike,
            option_type,
        )))
    }

    /// Creates a barrier option.
    #[inline]
    pub fn barrier(strike: T, option_type: OptionType, barrier: BarrierSpec<T>) -> Self {
        Self::Barrier(BarrierPayoff::new(strike, option_type, barrier))
    }

    /// Creates a floating-strike lookback option.
    #[inline]
    pub fn lookback(option_type: OptionType) -> Self {
        Self::Lookback(LookbackPayoff::new(option_type))
    }

    /// Creates a European vanilla option.
    #[inline]
    pub fn european(strike: T, option_type: OptionType) -> Self {
        Self::European(EuropeanPayoff::new(strike, option_type))
    }

    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AsianArithmetic(_) => "asian",
            Self::AsianGeometric(_) => "geometric_asian",
            Self::Barrier(_) => "barrier",
            Self::Lookback(_) => "lookback",
            Self::European(_) => "european",
        }
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for PathPayoffType<T> {
    #[inline]
    fn compute(&self, observer: &PathObserver<T>) -> T {
        match self {
            Self::AsianArithmetic(p) => p.compute(observer),
            Self::AsianGeometric(p) => p.compute(observer),
            Self::Barrier(p) => p.compute(observer),
            Self::Lookback(p) => p.compute(observer),
            Self::European(p) => p.compute(observer),
        }
    }

    #[inline]
    fn required_observations(&self) -> ObservationType {
        match self {
            Self::AsianArithmetic(p) => p.required_observations(),
            Self::AsianGeometric(p) => p.required_observations(),
            Self::Barrier(p) => p.required_observations(),
            Self::Lookback(p) => p.required_observations(),
            Self::European(p) => p.required_observations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn observed(payoff: &PathPayoffType<f64>, prices: &[f64]) -> f64 {
        let mut observer = PathObserver::with_observations(payoff.required_observations());
        for &p in prices {
            observer.observe(p);
        }
        payoff.compute(&observer)
    }

    #[test]
    fn test_dispatch_matches_direct_payoffs() {
        let prices = [100.0, 92.0, 118.0, 108.0];

        assert_relative_eq!(
            observed(&PathPayoffType::asian(100.0, OptionType::Call), &prices),
            4.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            observed(&PathPayoffType::lookback(OptionType::Call), &prices),
            16.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            observed(&PathPayoffType::european(100.0, OptionType::Call), &prices),
            8.0,
            epsilon = 1e-12
        );
        assert_eq!(
            observed(
                &PathPayoffType::barrier(100.0, OptionType::Call, BarrierSpec::up_out(115.0)),
                &prices
            ),
            0.0
        );
    }

    #[test]
    fn test_required_observations_forwarded() {
        assert_eq!(
            PathPayoffType::<f64>::geometric_asian(100.0, OptionType::Put).required_observations(),
            ObservationType::geometric_asian()
        );
        assert_eq!(
            PathPayoffType::<f64>::barrier(100.0, OptionType::Put, BarrierSpec::down_in(90.0))
                .required_observations(),
            ObservationType::barrier(false)
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(PathPayoffType::<f64>::asian(1.0, OptionType::Call).name(), "asian");
        assert_eq!(PathPayoffType::<f64>::lookback(OptionType::Put).name(), "lookback");
        assert_eq!(
            PathPayoffType::<f64>::geometric_asian(1.0, OptionType::Put).name(),
            "geometric_asian"
        );
        assert_eq!(
            PathPayoffType::<f64>::barrier(1.0, OptionType::Call, BarrierSpec::up_in(2.0)).name(),
            "barrier"
        );
        assert_eq!(PathPayoffType::<f64>::european(1.0, OptionType::Call).name(), "european");
    }
}
