//! Price command implementation
//!
//! Prices one instrument. Option type, barrier direction and barrier
//! activation are parsed from their lowercase tags, so an unknown tag is
//! reported with the accepted values.

use clap::{Args, ValueEnum};
use pricer_exotics::mc::Instrument;
use pricer_exotics::path_dependent::{BarrierActivation, BarrierDirection, BarrierSpec, OptionType};
use pricer_exotics::rng::PricerRng;
use tracing::info;

use super::MarketArgs;
use crate::config::ExoticsConfig;
use crate::output::{instrument_label, PriceRow};
use crate::{CliError, Result};

/// Instrument selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InstrumentKind {
    /// Arithmetic-average Asian
    Asian,
    /// Geometric-average Asian
    GeometricAsian,
    /// Single knock-in or knock-out barrier
    Barrier,
    /// Floating-strike lookback
    Lookback,
    /// Plain European
    European,
}

/// Arguments of `exotics price`
#[derive(Debug, Clone, Args)]
pub struct PriceArgs {
    /// Instrument to price
    #[arg(value_enum)]
    pub instrument: InstrumentKind,

    #[command(flatten)]
    pub market: MarketArgs,

    /// Option type (call, put)
    #[arg(short = 'o', long, default_value = "call")]
    pub option_type: String,

    /// Barrier level (barrier only)
    #[arg(short, long)]
    pub barrier: Option<f64>,

    /// Barrier direction (up, down)
    #[arg(long, default_value = "down")]
    pub direction: String,

    /// Barrier activation (in, out)
    #[arg(long, default_value = "out")]
    pub activation: String,
}

impl PriceArgs {
    /// Resolves the instrument, parsing the barrier tags when needed.
    pub fn instrument(&self) -> Result<Instrument> {
        Ok(match self.instrument {
            InstrumentKind::Asian => Instrument::Asian,
            InstrumentKind::GeometricAsian => Instrument::GeometricAsian,
            InstrumentKind::Lookback => Instrument::Lookback,
            InstrumentKind::European => Instrument::European,
            InstrumentKind::Barrier => {
                let level = self.barrier.ok_or_else(|| {
                    CliError::Usage("--barrier <LEVEL> is required for barrier options".to_string())
                })?;
                let direction: BarrierDirection = self.direction.parse()?;
                let activation: BarrierActivation = self.activation.parse()?;
                Instrument::Barrier(BarrierSpec::new(level, direction, activation))
            }
        })
    }
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &ExoticsConfig) -> Result<Vec<PriceRow>> {
    let option_type: OptionType = args.option_type.parse()?;
    let instrument = args.instrument()?;
    let params = args.market.to_params(config.n_paths, option_type);

    info!(
        instrument = instrument.name(),
        option_type = %option_type,
        n_paths = config.n_paths,
        seed = config.seed,
        "pricing"
    );

    let mut rng = PricerRng::from_seed(config.seed);
    let result = instrument.price_with_scheme(&mut rng, &params, config.scheme)?;

    Ok(vec![PriceRow::new(
        instrument_label(&instrument),
        option_type,
        result,
    )])
}
