//! Black-Scholes vanilla prices and the shared log-normal (Black) kernel.
//!
//! Every closed form in this module reduces to pricing a payoff on a
//! log-normal variable `X` with forward `F = E[X]` and log standard
//! deviation `v`:
//!
//! ```text
//! d1 = (ln(F / K) + v² / 2) / v
//! d2 = d1 - v
//! Call = D * [F * N(d1) - K * N(d2)]
//! Put  = D * [K * N(-d2) - F * N(-d1)]
//! ```

use num_traits::Float;

use crate::path_dependent::OptionType;

#[inline]
pub(crate) fn lit<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::nan)
}

/// Standard normal CDF.
///
/// Abramowitz and Stegun 7.1.26 approximation of `erfc`; absolute error
/// below `1.5e-7`.
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let zero = T::zero();

    if x.abs() > lit(8.0) {
        return if x > zero { one } else { zero };
    }

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    // N(x) = erfc(-x / sqrt(2)) / 2
    let arg = -x / lit(std::f64::consts::SQRT_2);
    let abs_arg = arg.abs();
    let t = one / (one + p * abs_arg);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_arg * abs_arg).exp();

    let erfc_val = if arg < zero {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    };
    erfc_val / lit(2.0)
}

/// Black formula on a log-normal variable.
///
/// `stdev` is the standard deviation of `ln X`; with zero `stdev` the
/// discounted intrinsic value on the forward is returned.
pub fn black_price<T: Float>(
    forward: T,
    strike: T,
    stdev: T,
    discount: T,
    option_type: OptionType,
) -> T {
    if stdev <= T::zero() {
        return discount * option_type.intrinsic(forward, strike);
    }

    let two = lit::<T>(2.0);
    let d1 = ((forward / strike).ln() + stdev * stdev / two) / stdev;
    let d2 = d1 - stdev;

    match option_type {
        OptionType::Call => discount * (forward * norm_cdf(d1) - strike * norm_cdf(d2)),
        OptionType::Put => discount * (strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
    }
}

/// Black-Scholes price of a European option (no dividends).
///
/// Returns zero for non-positive spot, strike or maturity.
///
/// ```rust
/// use pricer_exotics::analytical::black_scholes;
/// use pricer_exotics::path_dependent::OptionType;
///
/// let call = black_scholes(100.0_f64, 100.0, 0.05, 0.2, 1.0, OptionType::Call);
/// assert!((call - 10.4506).abs() < 1e-3);
/// ```
pub fn black_scholes<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    volatility: T,
    maturity: T,
    option_type: OptionType,
) -> T {
    let zero = T::zero();
    if spot <= zero || strike <= zero || maturity <= zero {
        return zero;
    }

    let forward = spot * (rate * maturity).exp();
    let stdev = volatility * maturity.sqrt();
    let discount = (-rate * maturity).exp();
    black_price(forward, strike, stdev, discount, option_type)
}

/// Black-Scholes European call.
#[inline]
pub fn black_scholes_call<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    black_scholes(spot, strike, rate, volatility, maturity, OptionType::Call)
}

/// Black-Scholes European put.
#[inline]
pub fn black_scholes_put<T: Float>(spot: T, strike: T, rate: T, volatility: T, maturity: T) -> T {
    black_scholes(spot, strike, rate, volatility, maturity, OptionType::Put)
}
