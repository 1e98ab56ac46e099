//! Exotics CLI - Monte Carlo pricing of path-dependent options
//!
//! # Commands
//!
//! - `exotics price <instrument>` - Price one instrument on a GBM underlying
//! - `exotics demo` - Price every instrument on the reference scenario
//! - `exotics batch` - Price calls and puts of every instrument in parallel
//!
//! Global flags (`--seed`, `--paths`, `--scheme`, `--format`) override the
//! configuration file and the `EXOTICS_*` environment variables.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use pricer_exotics::mc::Discretisation;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides, ExoticsConfig};
use output::OutputFormat;

/// Path-dependent option pricer
#[derive(Parser)]
#[command(name = "exotics")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "exotics.toml")]
    config: PathBuf,

    /// Base random seed
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long = "paths", global = true)]
    paths: Option<usize>,

    /// Path discretisation (euler, lognormal)
    #[arg(long, global = true)]
    scheme: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single instrument
    Price(commands::price::PriceArgs),

    /// Price every instrument on the reference scenario
    Demo,

    /// Price calls and puts of every instrument as one parallel batch
    Batch(commands::batch::BatchArgs),
}

impl Cli {
    fn overrides(&self) -> Result<CliOverrides> {
        let scheme = self
            .scheme
            .as_deref()
            .map(Discretisation::from_str)
            .transpose()?;
        Ok(CliOverrides {
            seed: self.seed,
            n_paths: self.paths,
            scheme,
            format: self.format,
            verbose: self.verbose,
        })
    }
}

fn init_tracing(config: &ExoticsConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&cli.config, &cli.overrides()?)?;
    init_tracing(&config);

    debug!(
        seed = config.seed,
        n_paths = config.n_paths,
        scheme = %config.scheme,
        "configuration resolved"
    );
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let rows = match &cli.command {
        Commands::Price(args) => commands::price::run(args, &config)?,
        Commands::Demo => commands::demo::run(&config)?,
        Commands::Batch(args) => commands::batch::run(args, &config)?,
    };

    output::print_rows(&rows, config.format)
}
