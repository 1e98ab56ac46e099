//! PathDependentPayoff trait and observation types.

use super::PathObserver;
use num_traits::Float;

/// Observation type flags for path-dependent payoffs.
///
/// Specifies which path statistics an observer accumulates. The terminal
/// price and observation count are always tracked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ObservationType {
    /// Whether arithmetic average is needed (Asian options)
    pub needs_average: bool,
    /// Whether geometric average is needed (Geometric Asian options)
    pub needs_geometric_average: bool,
    /// Whether path maximum is needed (Up barriers, lookback puts)
    pub needs_max: bool,
    /// Whether path minimum is needed (Down barriers, lookback calls)
    pub needs_min: bool,
}

impl ObservationType {
    /// Creates observation type that only needs the terminal price.
    #[inline]
    pub fn terminal_only() -> Self {
        Self::default()
    }

    /// Creates observation type for arithmetic Asian options.
    #[inline]
    pub fn arithmetic_asian() -> Self {
        Self {
            needs_average: true,
            ..Default::default()
        }
    }

    /// Creates observation type for geometric Asian options.
    #[inline]
    pub fn geometric_asian() -> Self {
        Self {
            needs_geometric_average: true,
            ..Default::default()
        }
    }

    /// Creates observation type for barrier options.
    #[inline]
    pub fn barrier(is_up: bool) -> Self {
        Self {
            needs_max: is_up,
            needs_min: !is_up,
            ..Default::default()
        }
    }

    /// Creates observation type for lookback options.
    #[inline]
    pub fn lookback() -> Self {
        Self {
            needs_max: true,
            needs_min: true,
            ..Default::default()
        }
    }

    /// Creates observation type that needs all statistics.
    #[inline]
    pub fn all() -> Self {
        Self {
            needs_average: true,
            needs_geometric_average: true,
            needs_max: true,
            needs_min: true,
        }
    }
}

/// Trait for path-dependent payoff calculations.
///
/// A payoff reads the statistics accumulated by a [`PathObserver`] over one
/// complete path (every grid point including `t = 0`) and returns the
/// undiscounted payoff of that path.
///
/// Implementations must be `Send + Sync` so batches can be priced in
/// parallel.
///
/// # Example
///
/// ```rust
/// use num_traits::Float;
/// use pricer_exotics::path_dependent::{ObservationType, PathDependentPayoff, PathObserver};
///
/// struct AverageAbove<T> {
///     level: T,
/// }
///
/// impl<T: Float + Send + Sync> PathDependentPayoff<T> for AverageAbove<T> {
///     fn compute(&self, observer: &PathObserver<T>) -> T {
///         (observer.arithmetic_average() - self.level).max(T::zero())
///     }
///
///     fn required_observations(&self) -> ObservationType {
///         ObservationType::arithmetic_asian()
///     }
/// }
///
/// let payoff = AverageAbove { level: 100.0 };
/// let mut observer = PathObserver::with_observations(payoff.required_observations());
/// observer.observe(100.0);
/// observer.observe(120.0);
/// assert_eq!(payoff.compute(&observer), 10.0);
/// ```
pub trait PathDependentPayoff<T: Float>: Send + Sync {
    /// Computes the payoff from path statistics.
    fn compute(&self, observer: &PathObserver<T>) -> T;

    /// Returns the statistics the observer must accumulate.
    fn required_observations(&self) -> ObservationType;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observation_type_terminal_only() {
        let obs = ObservationType::terminal_only();
        assert!(!obs.needs_average);
        assert!(!obs.needs_geometric_average);
        assert!(!obs.needs_max);
        assert!(!obs.needs_min);
    }

    #[test]
    fn test_observation_type_asian() {
        let arith = ObservationType::arithmetic_asian();
        assert!(arith.needs_average);
        assert!(!arith.needs_geometric_average);

        let geo = ObservationType::geometric_asian();
        assert!(!geo.needs_average);
        assert!(geo.needs_geometric_average);
    }

    #[test]
    fn test_observation_type_barrier() {
        let up = ObservationType::barrier(true);
        assert!(up.needs_max);
        assert!(!up.needs_min);

        let down = ObservationType::barrier(false);
        assert!(!down.needs_max);
        assert!(down.needs_min);
    }

    #[test]
    fn test_observation_type_lookback_never_takes_logs() {
        let obs = ObservationType::lookback();
        assert!(obs.needs_max);
        assert!(obs.needs_min);
        assert!(!obs.needs_geometric_average);
    }

    #[test]
    fn test_observation_type_all() {
        let obs = ObservationType::all();
        assert!(obs.needs_average);
        assert!(obs.needs_geometric_average);
        assert!(obs.needs_max);
        assert!(obs.needs_min);
    }

    struct MockPayoff {
        strike: f64,
    }

    impl PathDependentPayoff<f64> for MockPayoff {
        fn compute(&self, observer: &PathObserver<f64>) -> f64 {
            (observer.arithmetic_average() - self.strike).max(0.0)
        }

        fn required_observations(&self) -> ObservationType {
            ObservationType::arithmetic_asian()
        }
    }

    #[test]
    fn test_mock_payoff_implementation() {
        let payoff = MockPayoff { strike: 100.0 };

        let mut observer = PathObserver::with_observations(payoff.required_observations());
        observer.observe(100.0);
        observer.observe(110.0);
        observer.observe(120.0);

        // Average = 110, Strike = 100, Payoff = 10
        assert!((payoff.compute(&observer) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_mock_payoff_otm() {
        let payoff = MockPayoff { strike: 120.0 };

        let mut observer = PathObserver::with_observations(payoff.required_observations());
        observer.observe(100.0);
        observer.observe(110.0);

        assert_eq!(payoff.compute(&observer), 0.0);
    }
}
