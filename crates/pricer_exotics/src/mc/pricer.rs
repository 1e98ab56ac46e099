//! Monte Carlo pricing engine.
//!
//! Every evaluator follows the same pipeline:
//!
//! 1. Validate the [`OptionParameters`] (and barrier, if any)
//! 2. Generate a fresh GBM grid with drift `r` from the caller's generator
//! 3. Walk the grid row by row, feeding one [`PathObserver`] per path
//! 4. Compute the payoff per path and discount it by `exp(-r*T)`
//! 5. Reduce to a [`PricingResult`]
//!
//! The free functions take the generator explicitly; [`MonteCarloPricer`]
//! owns one together with a [`MonteCarloConfig`].

use tracing::debug;

use super::config::{Discretisation, MonteCarloConfig};
use super::error::{PricingError, Result};
use super::grid::SimulationGrid;
use super::paths::{generate_gbm_paths, GbmParams};
use super::result::PricingResult;
use crate::path_dependent::{
    BarrierSpec, OptionType, PathDependentPayoff, PathObserver, PathPayoffType,
};
use crate::rng::PricerRng;

/// Contract and simulation size for one pricing call.
///
/// ```rust
/// use pricer_exotics::mc::OptionParameters;
/// use pricer_exotics::path_dependent::OptionType;
///
/// let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.01, 1000, OptionType::Call);
/// assert!(params.validate().is_ok());
/// assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Initial price (S0).
    pub spot: f64,
    /// Strike (K); unused by the floating-strike lookback.
    pub strike: f64,
    /// Maturity (T) in years.
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Volatility (sigma).
    pub volatility: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Call or put.
    pub option_type: OptionType,
}

impl OptionParameters {
    /// Creates option parameters.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
        n_paths: usize,
        option_type: OptionType,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
            n_paths,
            option_type,
        }
    }

    /// Returns a copy with a different option type.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Returns a copy with a different path count.
    #[inline]
    pub fn with_paths(self, n_paths: usize) -> Self {
        Self { n_paths, ..self }
    }

    /// GBM parameters under the pricing measure (drift = r).
    #[inline]
    pub fn gbm_params(&self) -> GbmParams {
        GbmParams::new(self.spot, self.rate, self.volatility, self.maturity)
    }

    /// Returns `exp(-r*T)`.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` for a non-finite strike or any invalid GBM input.
    pub fn validate(&self) -> Result<()> {
        if !self.strike.is_finite() {
            return Err(PricingError::parameter(
                "strike",
                format!("must be finite, got {}", self.strike),
            ));
        }
        self.gbm_params().validate()
    }
}

fn validate_barrier(barrier: &BarrierSpec) -> Result<()> {
    if barrier.level.is_nan() || barrier.level <= 0.0 {
        return Err(PricingError::parameter(
            "barrier",
            format!("must be positive, got {}", barrier.level),
        ));
    }
    Ok(())
}

/// Applies `payoff` to every path of `grid` and reduces the discounted
/// payoffs.
///
/// Each path contributes all `n_steps + 1` grid points, `t = 0` included.
pub fn evaluate_grid<P>(grid: &SimulationGrid, payoff: &P, discount_factor: f64) -> PricingResult
where
    P: PathDependentPayoff<f64> + ?Sized,
{
    let mut observers =
        vec![PathObserver::with_observations(payoff.required_observations()); grid.n_paths()];

    for step in 0..=grid.n_steps() {
        for (observer, &price) in observers.iter_mut().zip(grid.row(step)) {
            observer.observe(price);
        }
    }

    let discounted: Vec<f64> = observers
        .iter()
        .map(|observer| discount_factor * payoff.compute(observer))
        .collect();

    PricingResult::from_discounted_payoffs(&discounted)
}

/// Prices any path-dependent payoff on a freshly generated grid.
///
/// # Errors
///
/// Any validation error from the parameters or the generator. Nothing is
/// drawn from `rng` when an error is returned.
pub fn price_path_dependent<P>(
    rng: &mut PricerRng,
    params: &OptionParameters,
    scheme: Discretisation,
    payoff: &P,
) -> Result<PricingResult>
where
    P: PathDependentPayoff<f64> + ?Sized,
{
    params.validate()?;
    let grid = generate_gbm_paths(rng, params.gbm_params(), params.n_paths, scheme)?;
    let result = evaluate_grid(&grid, payoff, params.discount_factor());

    debug!(
        price = result.price,
        std_error = result.std_error(),
        n_paths = result.n_paths,
        "priced path-dependent payoff"
    );
    Ok(result)
}

/// Prices an arithmetic-average Asian option.
///
/// # Example
///
/// ```rust
/// use pricer_exotics::mc::{price_asian, OptionParameters};
/// use pricer_exotics::path_dependent::OptionType;
/// use pricer_exotics::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.01, 1000, OptionType::Call);
///
/// let result = price_asian(&mut rng, &params).unwrap();
/// println!("{:.4} +/- {:.4}", result.price, result.confidence_95());
/// ```
pub fn price_asian(rng: &mut PricerRng, params: &OptionParameters) -> Result<PricingResult> {
    let payoff = PathPayoffType::asian(params.strike, params.option_type);
    price_path_dependent(rng, params, Discretisation::Euler, &payoff)
}

/// Prices a geometric-average Asian option.
///
/// Non-positive simulated prices make the estimate NaN.
pub fn price_geometric_asian(
    rng: &mut PricerRng,
    params: &OptionParameters,
) -> Result<PricingResult> {
    let payoff = PathPayoffType::geometric_asian(params.strike, params.option_type);
    price_path_dependent(rng, params, Discretisation::Euler, &payoff)
}

/// Prices a discretely monitored barrier option.
///
/// # Errors
///
/// `InvalidParameter` for a NaN or non-positive barrier level, in addition
/// to the parameter checks shared by every evaluator.
pub fn price_barrier(
    rng: &mut PricerRng,
    params: &OptionParameters,
    barrier: BarrierSpec,
) -> Result<PricingResult> {
    validate_barrier(&barrier)?;
    let payoff = PathPayoffType::barrier(params.strike, params.option_type, barrier);
    price_path_dependent(rng, params, Discretisation::Euler, &payoff)
}

/// Prices a floating-strike lookback option. The strike is ignored.
pub fn price_lookback(rng: &mut PricerRng, params: &OptionParameters) -> Result<PricingResult> {
    let payoff = PathPayoffType::lookback(params.option_type);
    price_path_dependent(rng, params, Discretisation::Euler, &payoff)
}

/// Prices a European vanilla option on the simulated grid.
pub fn price_european(rng: &mut PricerRng, params: &OptionParameters) -> Result<PricingResult> {
    let payoff = PathPayoffType::european(params.strike, params.option_type);
    price_path_dependent(rng, params, Discretisation::Euler, &payoff)
}

/// Instrument selector for dispatch and batch pricing.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Instrument {
    /// Arithmetic-average Asian.
    Asian,
    /// Geometric-average Asian.
    GeometricAsian,
    /// Barrier with its specification.
    Barrier(BarrierSpec),
    /// Floating-strike lookback.
    Lookback,
    /// European vanilla.
    European,
}

impl Instrument {
    /// Returns a short name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Asian => "asian",
            Instrument::GeometricAsian => "geometric_asian",
            Instrument::Barrier(_) => "barrier",
            Instrument::Lookback => "lookback",
            Instrument::European => "european",
        }
    }

    /// Builds the payoff for the given contract.
    pub fn payoff(&self, params: &OptionParameters) -> PathPayoffType<f64> {
        let (strike, option_type) = (params.strike, params.option_type);
        match *self {
            Instrument::Asian => PathPayoffType::asian(strike, option_type),
            Instrument::GeometricAsian => PathPayoffType::geometric_asian(strike, option_type),
            Instrument::Barrier(spec) => PathPayoffType::barrier(strike, option_type, spec),
            Instrument::Lookback => PathPayoffType::lookback(option_type),
            Instrument::European => PathPayoffType::european(strike, option_type),
        }
    }

    /// Prices the instrument with the Euler scheme.
    pub fn price(&self, rng: &mut PricerRng, params: &OptionParameters) -> Result<PricingResult> {
        self.price_with_scheme(rng, params, Discretisation::Euler)
    }

    /// Prices the instrument with an explicit discretisation.
    pub fn price_with_scheme(
        &self,
        rng: &mut PricerRng,
        params: &OptionParameters,
        scheme: Discretisation,
    ) -> Result<PricingResult> {
        if let Instrument::Barrier(spec) = self {
            validate_barrier(spec)?;
        }
        debug!(instrument = self.name(), option_type = %params.option_type, %scheme, "pricing");
        price_path_dependent(rng, params, scheme, &self.payoff(params))
    }
}

/// Monte Carlo pricer owning its generator.
///
/// ```rust
/// use pricer_exotics::mc::{Instrument, MonteCarloConfig, MonteCarloPricer, OptionParameters};
/// use pricer_exotics::path_dependent::OptionType;
///
/// let config = MonteCarloConfig::builder().seed(42).build();
/// let mut pricer = MonteCarloPricer::new(config);
///
/// let params = OptionParameters::new(100.0, 100.0, 0.5, 0.03, 0.2, 2000, OptionType::Put);
/// let result = pricer.price(Instrument::Lookback, &params).unwrap();
/// assert!(result.price > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
    rng: PricerRng,
}

impl MonteCarloPricer {
    /// Creates a pricer seeded from the configuration (seed 0 when unset).
    pub fn new(config: MonteCarloConfig) -> Self {
        let rng = PricerRng::from_seed(config.seed().unwrap_or(0));
        Self { config, rng }
    }

    /// Creates a pricer with an explicit seed, overriding the configuration.
    pub fn with_seed(config: MonteCarloConfig, seed: u64) -> Self {
        Self {
            config,
            rng: PricerRng::from_seed(seed),
        }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the generator, for callers mixing free functions in.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut PricerRng {
        &mut self.rng
    }

    /// Rewinds the generator to the configured seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Reseeds the generator.
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Prices an instrument with the configured discretisation.
    pub fn price(
        &mut self,
        instrument: Instrument,
        params: &OptionParameters,
    ) -> Result<PricingResult> {
        instrument.price_with_scheme(&mut self.rng, params, self.config.discretisation())
    }

    /// Prices an arbitrary payoff with the configured discretisation.
    pub fn price_payoff<P>(&mut self, params: &OptionParameters, payoff: &P) -> Result<PricingResult>
    where
        P: PathDependentPayoff<f64> + ?Sized,
    {
        price_path_dependent(&mut self.rng, params, self.config.discretisation(), payoff)
    }

    /// Arithmetic Asian.
    pub fn price_asian(&mut self, params: &OptionParameters) -> Result<PricingResult> {
        self.price(Instrument::Asian, params)
    }

    /// Geometric Asian.
    pub fn price_geometric_asian(&mut self, params: &OptionParameters) -> Result<PricingResult> {
        self.price(Instrument::GeometricAsian, params)
    }

    /// Barrier.
    pub fn price_barrier(
        &mut self,
        params: &OptionParameters,
        barrier: BarrierSpec,
    ) -> Result<PricingResult> {
        self.price(Instrument::Barrier(barrier), params)
    }

    /// Floating-strike lookback.
    pub fn price_lookback(&mut self, params: &OptionParameters) -> Result<PricingResult> {
        self.price(Instrument::Lookback, params)
    }

    /// European vanilla.
    pub fn price_european(&mut self, params: &OptionParameters) -> Result<PricingResult> {
        self.price(Instrument::European, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_dependent::{AsianArithmeticPayoff, LookbackPayoff};
    use approx::assert_relative_eq;

    fn reference(n_paths: usize) -> OptionParameters {
        OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.01, n_paths, OptionType::Call)
    }

    // ========================================================================
    // OptionParameters Tests
    // ========================================================================

    #[test]
    fn test_option_parameters_validation() {
        assert!(reference(10).validate().is_ok());

        let bad_strike = OptionParameters {
            strike: f64::NAN,
            ..reference(10)
        };
        assert!(matches!(
            bad_strike.validate(),
            Err(PricingError::InvalidParameter { name: "strike", .. })
        ));

        let bad_spot = OptionParameters {
            spot: -1.0,
            ..reference(10)
        };
        assert!(matches!(
            bad_spot.validate(),
            Err(PricingError::InvalidParameter { name: "spot", .. })
        ));
    }

    #[test]
    fn test_option_parameters_helpers() {
        let params = reference(10).with_option_type(OptionType::Put).with_paths(20);
        assert_eq!(params.option_type, OptionType::Put);
        assert_eq!(params.n_paths, 20);

        let gbm = params.gbm_params();
        assert_eq!(gbm.drift, 0.05);
        assert_eq!(gbm.spot, 110.0);
        assert_relative_eq!(params.discount_factor(), (-0.05_f64).exp());
    }

    // ========================================================================
    // evaluate_grid Tests
    // ========================================================================

    #[test]
    fn test_evaluate_grid_discounts_each_path() {
        let mut rng = PricerRng::from_seed(5);
        let params = reference(50);
        let grid =
            generate_gbm_paths(&mut rng, params.gbm_params(), 50, Discretisation::Euler).unwrap();

        let undiscounted = evaluate_grid(&grid, &LookbackPayoff::call(), 1.0);
        let discounted = evaluate_grid(&grid, &LookbackPayoff::call(), 0.5);

        assert_relative_eq!(discounted.price, 0.5 * undiscounted.price, epsilon = 1e-12);
        assert_relative_eq!(
            discounted.variance,
            0.25 * undiscounted.variance,
            epsilon = 1e-12
        );
        assert_eq!(discounted.n_paths, 50);
    }

    #[test]
    fn test_evaluate_grid_matches_manual_loop() {
        let mut rng = PricerRng::from_seed(9);
        let params = reference(20);
        let grid =
            generate_gbm_paths(&mut rng, params.gbm_params(), 20, Discretisation::Euler).unwrap();

        let payoff = AsianArithmeticPayoff::call(100.0);
        let result = evaluate_grid(&grid, &payoff, 1.0);

        let manual: Vec<f64> = (0..grid.n_paths())
            .map(|j| {
                let prices: Vec<f64> = grid.path(j).collect();
                let avg = prices.iter().sum::<f64>() / prices.len() as f64;
                (avg - 100.0).max(0.0)
            })
            .collect();
        let expected = PricingResult::from_discounted_payoffs(&manual);

        assert_relative_eq!(result.price, expected.price, epsilon = 1e-10);
        assert_relative_eq!(result.variance, expected.variance, epsilon = 1e-10);
    }

    // ========================================================================
    // Evaluator Tests
    // ========================================================================

    #[test]
    fn test_evaluators_are_deterministic() {
        let params = reference(200);
        let run = |seed| {
            let mut rng = PricerRng::from_seed(seed);
            (
                price_asian(&mut rng, &params).unwrap(),
                price_lookback(&mut rng, &params).unwrap(),
            )
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_invalid_barrier_rejected_before_draws() {
        let mut rng = PricerRng::from_seed(1);
        let err = price_barrier(&mut rng, &reference(10), BarrierSpec::up_out(f64::NAN))
            .unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                name: "barrier",
                ..
            }
        ));

        let mut fresh = PricerRng::from_seed(1);
        assert_eq!(rng.gen_normal(), fresh.gen_normal());
    }

    #[test]
    fn test_zero_paths_rejected() {
        let mut rng = PricerRng::from_seed(1);
        assert_eq!(
            price_asian(&mut rng, &reference(0)).unwrap_err(),
            PricingError::InvalidPathCount(0)
        );
    }

    #[test]
    fn test_instrument_matches_free_function() {
        let params = reference(300);
        let spec = BarrierSpec::down_out(80.0);

        let mut a = PricerRng::from_seed(17);
        let mut b = PricerRng::from_seed(17);
        assert_eq!(
            Instrument::Barrier(spec).price(&mut a, &params).unwrap(),
            price_barrier(&mut b, &params, spec).unwrap()
        );
    }

    #[test]
    fn test_instrument_names() {
        assert_eq!(Instrument::Asian.name(), "asian");
        assert_eq!(Instrument::GeometricAsian.name(), "geometric_asian");
        assert_eq!(Instrument::Barrier(BarrierSpec::up_in(1.0)).name(), "barrier");
        assert_eq!(Instrument::Lookback.name(), "lookback");
        assert_eq!(Instrument::European.name(), "european");
    }

    // ========================================================================
    // MonteCarloPricer Tests
    // ========================================================================

    #[test]
    fn test_pricer_reset_replays() {
        let mut pricer = MonteCarloPricer::new(MonteCarloConfig::builder().seed(3).build());
        let params = reference(100);

        let first = pricer.price_asian(&params).unwrap();
        let second = pricer.price_asian(&params).unwrap();
        assert_ne!(first, second);

        pricer.reset();
        assert_eq!(pricer.price_asian(&params).unwrap(), first);
    }

    #[test]
    fn test_pricer_config_accessor() {
        let config = MonteCarloConfig::builder()
            .seed(17)
            .discretisation(Discretisation::LogNormal)
            .build();
        let pricer = MonteCarloPricer::new(config);

        assert_eq!(pricer.config().seed(), Some(17));
        assert_eq!(pricer.config().discretisation(), Discretisation::LogNormal);
    }

    #[test]
    fn test_pricer_price_payoff_uses_configured_scheme() {
        let params = reference(100);
        let config = MonteCarloConfig::builder()
            .seed(21)
            .discretisation(Discretisation::LogNormal)
            .build();
        let mut pricer = MonteCarloPricer::new(config);

        let custom = pricer
            .price_payoff(&params, &AsianArithmeticPayoff::call(params.strike))
            .unwrap();
        let dispatched = Instrument::Asian
            .price_with_scheme(&mut PricerRng::from_seed(21), &params, Discretisation::LogNormal)
            .unwrap();
        assert_eq!(custom, dispatched);
    }

    #[test]
    fn test_pricer_rng_mut_shares_stream() {
        let params = reference(100);
        let mut pricer = MonteCarloPricer::with_seed(MonteCarloConfig::default(), 30);
        let mut rng = PricerRng::from_seed(30);

        let via_handle = price_lookback(pricer.rng_mut(), &params).unwrap();
        assert_eq!(via_handle, price_lookback(&mut rng, &params).unwrap());

        // The pricer continues from where the borrowed generator stopped.
        assert_eq!(
            pricer.price_asian(&params).unwrap(),
            price_asian(&mut rng, &params).unwrap()
        );
    }

    #[test]
    fn test_pricer_matches_free_functions() {
        let params = reference(100);
        let mut pricer = MonteCarloPricer::with_seed(MonteCarloConfig::default(), 8);
        let mut rng = PricerRng::from_seed(8);

        assert_eq!(
            pricer.price_european(&params).unwrap(),
            price_european(&mut rng, &params).unwrap()
        );
        assert_eq!(
            pricer.price_geometric_asian(&params).unwrap(),
            price_geometric_asian(&mut rng, &params).unwrap()
        );
    }

    #[test]
    fn test_pricer_lognormal_scheme_differs() {
        let params = reference(100);
        let euler = MonteCarloPricer::with_seed(MonteCarloConfig::default(), 1)
            .price_lookback(&params)
            .unwrap();
        let exact = MonteCarloPricer::with_seed(
            MonteCarloConfig::builder()
                .discretisation(Discretisation::LogNormal)
                .build(),
            1,
        )
        .price_lookback(&params)
        .unwrap();

        assert_ne!(euler.price, exact.price);
        assert_relative_eq!(euler.price, exact.price, max_relative = 0.01);
    }
}
