//! PathObserver: streaming statistics for path-dependent payoffs.
//!
//! Statistics are accumulated one price at a time, so an evaluator can walk
//! the simulation grid row by row with one observer per path:
//!
//! - **Arithmetic average**: running sum / count
//! - **Geometric average**: exp(running log sum / count)
//! - **Maximum** / **Minimum**: running extrema
//! - **Terminal**: the last observed price
//!
//! Only the statistics named in the observer's [`ObservationType`] are
//! accumulated. In particular the logarithm is taken only when a geometric
//! average is requested, so non-positive Euler prices poison nothing but the
//! geometric average.

use num_traits::Float;

use super::ObservationType;

/// Streaming path observation statistics.
///
/// # Example
///
/// ```
/// use pricer_exotics::path_dependent::PathObserver;
///
/// let mut observer: PathObserver<f64> = PathObserver::new();
///
/// observer.observe(100.0);
/// observer.observe(105.0);
/// observer.observe(95.0);
///
/// assert_eq!(observer.arithmetic_average(), 100.0);
/// assert_eq!(observer.maximum(), 105.0);
/// assert_eq!(observer.minimum(), 95.0);
/// assert_eq!(observer.terminal(), 95.0);
/// ```
#[derive(Clone, Debug)]
pub struct PathObserver<T: Float> {
    /// Which statistics to accumulate.
    observations: ObservationType,
    /// Running sum for arithmetic average: Σ S_i
    running_sum: T,
    /// Running log sum for geometric average: Σ ln(S_i)
    running_log_sum: T,
    /// Running maximum price observed
    running_max: T,
    /// Running minimum price observed
    running_min: T,
    /// Number of observations
    count: usize,
    /// Last observed price
    terminal: T,
}

impl<T: Float> PathObserver<T> {
    /// Creates an observer accumulating every statistic.
    #[inline]
    pub fn new() -> Self {
        Self::with_observations(ObservationType::all())
    }

    /// Creates an observer accumulating only the requested statistics.
    #[inline]
    pub fn with_observations(observations: ObservationType) -> Self {
        Self {
            observations,
            running_sum: T::zero(),
            running_log_sum: T::zero(),
            running_max: T::neg_infinity(),
            running_min: T::infinity(),
            count: 0,
            terminal: T::zero(),
        }
    }

    /// Returns the statistics this observer accumulates.
    #[inline]
    pub fn observations(&self) -> ObservationType {
        self.observations
    }

    /// Observes a new price and updates the requested statistics.
    #[inline]
    pub fn observe(&mut self, price: T) {
        let obs = self.observations;
        if obs.needs_average {
            self.running_sum = self.running_sum + price;
        }
        if obs.needs_geometric_average {
            self.running_log_sum = self.running_log_sum + price.ln();
        }
        if obs.needs_max {
            self.running_max = self.running_max.max(price);
        }
        if obs.needs_min {
            self.running_min = self.running_min.min(price);
        }
        self.terminal = price;
        self.count += 1;
    }

    /// Resets all statistics, keeping the observation flags.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::with_observations(self.observations);
    }

    #[inline]
    fn count_as_float(&self) -> T {
        T::from(self.count).unwrap_or_else(T::nan)
    }

    /// Returns `Σ S_i / n`, or zero with no observations.
    #[inline]
    pub fn arithmetic_average(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            self.running_sum / self.count_as_float()
        }
    }

    /// Returns `exp(Σ ln(S_i) / n)`, or zero with no observations.
    ///
    /// NaN if any observed price was negative.
    #[inline]
    pub fn geometric_average(&self) -> T {
        if self.count == 0 {
            T::zero()
        } else {
            (self.running_log_sum / self.count_as_float()).exp()
        }
    }

    /// Returns the maximum observed price, or `-inf` with no observations.
    #[inline]
    pub fn maximum(&self) -> T {
        self.running_max
    }

    /// Returns the minimum observed price, or `+inf` with no observations.
    #[inline]
    pub fn minimum(&self) -> T {
        self.running_min
    }

    /// Returns the last observed price.
    #[inline]
    pub fn terminal(&self) -> T {
        self.terminal
    }

    /// Returns the number of observations.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
}

impl<T: Float> Default for PathObserver<T> {
    fn default() -> Self {
        Self::new()
    }
}
