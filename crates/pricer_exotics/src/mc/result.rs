//! Monte Carlo pricing result.

/// 95% two-sided normal quantile.
pub const Z_95: f64 = 1.96;

/// Price estimate and sample variance of the discounted per-path payoff.
///
/// The caller derives the standard error as `sqrt(variance / n_paths)` and
/// the 95% confidence half-width as `1.96 * standard error`.
///
/// ```rust
/// use pricer_exotics::mc::PricingResult;
///
/// let result = PricingResult::from_discounted_payoffs(&[1.0, 2.0, 3.0]);
/// assert_eq!(result.price, 2.0);
/// assert_eq!(result.variance, 1.0);
/// println!("{:.4} +/- {:.4}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Sample mean of the discounted payoff.
    pub price: f64,
    /// Unbiased sample variance of the discounted payoff (zero for one path).
    pub variance: f64,
    /// Number of independent paths behind the estimate.
    pub n_paths: usize,
}

impl PricingResult {
    /// Reduces discounted per-path payoffs to mean and variance.
    pub fn from_discounted_payoffs(payoffs: &[f64]) -> Self {
        let n_paths = payoffs.len();
        if n_paths == 0 {
            return Self::default();
        }

        let n = n_paths as f64;
        let price = payoffs.iter().sum::<f64>() / n;
        let variance = if n_paths > 1 {
            payoffs.iter().map(|&p| (p - price).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };

        Self {
            price,
            variance,
            n_paths,
        }
    }

    /// Returns the standard error `sqrt(variance / n_paths)`.
    #[inline]
    pub fn std_error(&self) -> f64 {
        if self.n_paths == 0 {
            0.0
        } else {
            (self.variance / self.n_paths as f64).sqrt()
        }
    }

    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        Z_95 * self.std_error()
    }

    /// Returns the 95% confidence interval `(lower, upper)`.
    #[inline]
    pub fn confidence_interval(&self) -> (f64, f64) {
        let half = self.confidence_95();
        (self.price - half, self.price + half)
    }

    /// Returns true if `value` lies within `k` standard errors of the price.
    #[inline]
    pub fn contains(&self, value: f64, k: f64) -> bool {
        (value - self.price).abs() <= k * self.std_error()
    }
}
