//! Demo command: every instrument on the reference scenario.
//!
//! One generator is shared across the instruments, so each row is priced
//! on its own freshly drawn grid. Closed-form references for the European
//! and geometric-average contracts are logged at `info` level.

use pricer_exotics::analytical::{black_scholes, geometric_asian};
use pricer_exotics::mc::Instrument;
use pricer_exotics::path_dependent::{BarrierSpec, OptionType};
use pricer_exotics::rng::PricerRng;
use tracing::info;

use super::MarketArgs;
use crate::config::ExoticsConfig;
use crate::output::{instrument_label, PriceRow};
use crate::Result;

/// Knock-out level used in the demo barrier row.
pub const DEMO_BARRIER: f64 = 80.0;

/// Instruments shown by the demo, in display order.
pub fn demo_instruments() -> [Instrument; 5] {
    [
        Instrument::Asian,
        Instrument::GeometricAsian,
        Instrument::Barrier(BarrierSpec::down_out(DEMO_BARRIER)),
        Instrument::Lookback,
        Instrument::European,
    ]
}

/// Run the demo command
pub fn run(config: &ExoticsConfig) -> Result<Vec<PriceRow>> {
    let market = MarketArgs::default();
    let params = market.to_params(config.n_paths, OptionType::Call);

    info!(
        black_scholes = black_scholes(
            market.spot,
            market.strike,
            market.rate,
            market.volatility,
            market.maturity,
            OptionType::Call
        ),
        geometric_asian = geometric_asian(
            market.spot,
            market.strike,
            market.rate,
            market.volatility,
            market.maturity,
            OptionType::Call
        ),
        "closed-form references"
    );

    let mut rng = PricerRng::from_seed(config.seed);
    demo_instruments()
        .iter()
        .map(|instrument| -> Result<PriceRow> {
            let result = instrument.price_with_scheme(&mut rng, &params, config.scheme)?;
            Ok(PriceRow::new(
                instrument_label(instrument),
                OptionType::Call,
                result,
            ))
        })
        .collect()
}
