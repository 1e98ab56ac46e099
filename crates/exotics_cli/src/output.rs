//! Result rendering: aligned table or JSON.

use std::io::Write;

use clap::ValueEnum;
use pricer_exotics::mc::{Instrument, PricingResult};
use pricer_exotics::path_dependent::OptionType;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON array
    Json,
}

/// One priced line
#[derive(Debug, Clone, Serialize)]
pub struct PriceRow {
    /// Display label, e.g. `down-out barrier (80)`
    pub label: String,
    /// Call or put
    pub option_type: OptionType,
    /// Estimate, variance and path count
    #[serde(flatten)]
    pub result: PricingResult,
    /// `sqrt(variance / n_paths)`
    pub std_error: f64,
    /// `1.96 * std_error`
    pub confidence_95: f64,
}

impl PriceRow {
    /// Builds a row from a pricing result
    pub fn new(label: impl Into<String>, option_type: OptionType, result: PricingResult) -> Self {
        Self {
            label: label.into(),
            option_type,
            std_error: result.std_error(),
            confidence_95: result.confidence_95(),
            result,
        }
    }
}

/// Human-readable label for an instrument
pub fn instrument_label(instrument: &Instrument) -> String {
    match instrument {
        Instrument::Barrier(spec) => {
            format!("{}-{} barrier ({})", spec.direction, spec.activation, spec.level)
        }
        Instrument::GeometricAsian => "geometric asian".to_string(),
        other => other.name().to_string(),
    }
}

/// Writes rows in the requested format
pub fn write_rows<W: Write>(out: &mut W, rows: &[PriceRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "{:<28} {:<5} {:>12} {:>10} {:>8}",
                "Instrument", "Type", "Price", "± 95%", "Paths"
            )?;
            writeln!(out, "{}", "-".repeat(67))?;
            for row in rows {
                writeln!(
                    out,
                    "{:<28} {:<5} {:>12.4} {:>10.4} {:>8}",
                    row.label,
                    row.option_type,
                    row.result.price,
                    row.confidence_95,
                    row.result.n_paths
                )?;
            }
        }
    }
    Ok(())
}

/// Writes rows to stdout
pub fn print_rows(rows: &[PriceRow], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_rows(&mut handle, rows, format)
}
