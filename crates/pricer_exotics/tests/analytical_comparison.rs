//! Monte Carlo vs closed-form comparisons.
//!
//! Each test prices with enough paths that the closed form should sit well
//! inside a 4-standard-error band.

use pricer_exotics::analytical::{
    black_scholes_call, black_scholes_put, discrete_geometric_asian, geometric_asian_call,
};
use pricer_exotics::mc::{
    price_asian, price_european, price_geometric_asian, Discretisation, Instrument,
    MonteCarloConfig, MonteCarloPricer, OptionParameters,
};
use pricer_exotics::path_dependent::OptionType;
use pricer_exotics::rng::PricerRng;

fn standard_params(n_paths: usize) -> OptionParameters {
    OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2, n_paths, OptionType::Call)
}

fn lognormal_pricer(seed: u64) -> MonteCarloPricer {
    MonteCarloPricer::new(
        MonteCarloConfig::builder()
            .discretisation(Discretisation::LogNormal)
            .seed(seed)
            .build(),
    )
}

// ============================================================================
// European vs Black-Scholes
// ============================================================================

#[test]
fn test_european_call_mc_vs_black_scholes() {
    let params = standard_params(20_000);
    let result = price_european(&mut PricerRng::from_seed(42), &params).unwrap();
    let bs = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0);

    assert!(
        result.contains(bs, 4.0),
        "MC {} +/- {} vs BS {}",
        result.price,
        result.std_error(),
        bs
    );
}

#[test]
fn test_european_put_mc_vs_black_scholes() {
    let params = standard_params(20_000).with_option_type(OptionType::Put);
    let result = price_european(&mut PricerRng::from_seed(43), &params).unwrap();
    let bs = black_scholes_put(100.0, 100.0, 0.05, 0.2, 1.0);

    assert!(
        result.contains(bs, 4.0),
        "MC {} +/- {} vs BS {}",
        result.price,
        result.std_error(),
        bs
    );
}

// ============================================================================
// Geometric Asian
// ============================================================================

#[test]
fn test_geometric_asian_lognormal_vs_discrete_formula() {
    let params = standard_params(20_000);
    let result = lognormal_pricer(42).price_geometric_asian(&params).unwrap();
    let exact = discrete_geometric_asian(100.0, 100.0, 0.05, 0.2, 1.0, 252, OptionType::Call);

    assert!(
        result.contains(exact, 4.0),
        "MC {} +/- {} vs discrete {}",
        result.price,
        result.std_error(),
        exact
    );
}

#[test]
fn test_geometric_asian_put_lognormal_vs_discrete_formula() {
    let params = OptionParameters::new(100.0, 105.0, 0.5, 0.03, 0.3, 20_000, OptionType::Put);
    let result = lognormal_pricer(7).price(Instrument::GeometricAsian, &params).unwrap();
    let exact = discrete_geometric_asian(100.0, 105.0, 0.03, 0.3, 0.5, 126, OptionType::Put);

    assert!(
        result.contains(exact, 4.0),
        "MC {} +/- {} vs discrete {}",
        result.price,
        result.std_error(),
        exact
    );
}

#[test]
fn test_geometric_asian_euler_close_to_kemna_vorst() {
    // Discrete fixings and Euler bias keep this a loose comparison
    let params = standard_params(20_000);
    let result = price_geometric_asian(&mut PricerRng::from_seed(42), &params).unwrap();
    let continuous = geometric_asian_call(100.0, 100.0, 0.05, 0.2, 1.0);

    assert!(
        (result.price - continuous).abs() < 0.05 * continuous,
        "MC {} vs Kemna-Vorst {}",
        result.price,
        continuous
    );
}

// ============================================================================
// Ordering Relations
// ============================================================================

#[test]
fn test_arithmetic_asian_dominates_geometric_on_same_paths() {
    let params = standard_params(5_000);
    let arithmetic = price_asian(&mut PricerRng::from_seed(11), &params).unwrap();
    let geometric = price_geometric_asian(&mut PricerRng::from_seed(11), &params).unwrap();

    // A >= G path by path, and the call payoff is monotone
    assert!(arithmetic.price >= geometric.price);
}

#[test]
fn test_asian_cheaper_than_european() {
    let params = standard_params(10_000);
    let asian = price_asian(&mut PricerRng::from_seed(21), &params).unwrap();
    let bs = black_scholes_call(100.0, 100.0, 0.05, 0.2, 1.0);
    assert!(asian.price < bs);
}

#[test]
fn test_std_error_decreases_with_paths() {
    let small = price_asian(&mut PricerRng::from_seed(1), &standard_params(1_000)).unwrap();
    let large = price_asian(&mut PricerRng::from_seed(1), &standard_params(16_000)).unwrap();

    // Quadrupling sqrt(n) should roughly quarter the standard error
    let ratio = small.std_error() / large.std_error();
    assert!(ratio > 3.0 && ratio < 5.0, "ratio = {}", ratio);
}
