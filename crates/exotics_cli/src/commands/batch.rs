//! Batch command: calls and puts of every instrument in one parallel batch.
//!
//! Request `i` draws from stream `i` of the configured seed, so output does
//! not depend on the thread count. A failing request is logged and skipped.

use clap::Args;
use pricer_exotics::mc::{price_batch, Instrument, PricingRequest};
use pricer_exotics::path_dependent::{BarrierSpec, OptionType};
use tracing::{info, warn};

use super::MarketArgs;
use crate::config::ExoticsConfig;
use crate::output::{instrument_label, PriceRow};
use crate::Result;

/// Arguments of `exotics batch`
#[derive(Debug, Clone, Copy, Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub market: MarketArgs,

    /// Knock-out level for the down-and-out row
    #[arg(short, long, default_value_t = 80.0)]
    pub barrier: f64,
}

impl Default for BatchArgs {
    fn default() -> Self {
        Self {
            market: MarketArgs::default(),
            barrier: 80.0,
        }
    }
}

/// Builds the call and put request for every instrument.
pub fn build_requests(args: &BatchArgs, config: &ExoticsConfig) -> Vec<PricingRequest> {
    let instruments = [
        Instrument::Asian,
        Instrument::GeometricAsian,
        Instrument::Barrier(BarrierSpec::down_out(args.barrier)),
        Instrument::Lookback,
        Instrument::European,
    ];

    instruments
        .iter()
        .flat_map(|&instrument| {
            [OptionType::Call, OptionType::Put].map(|option_type| {
                PricingRequest::new(instrument, args.market.to_params(config.n_paths, option_type))
                    .with_scheme(config.scheme)
            })
        })
        .collect()
}

/// Run the batch command
pub fn run(args: &BatchArgs, config: &ExoticsConfig) -> Result<Vec<PriceRow>> {
    let requests = build_requests(args, config);
    let results = price_batch(&requests, config.seed);

    let rows: Vec<PriceRow> = requests
        .iter()
        .zip(results)
        .filter_map(|(request, result)| match result {
            Ok(result) => Some(PriceRow::new(
                instrument_label(&request.instrument),
                request.params.option_type,
                result,
            )),
            Err(err) => {
                warn!(
                    instrument = request.instrument.name(),
                    option_type = %request.params.option_type,
                    error = %err,
                    "request failed"
                );
                None
            }
        })
        .collect();

    info!(priced = rows.len(), requested = requests.len(), "batch complete");
    Ok(rows)
}
