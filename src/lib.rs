//! rheo-stats - rheometer frequency-sweep reduction & chart generator
//!
//! Pipeline: load the tab-delimited instrument export, select the channels of
//! interest into a five-row statistics matrix, write it as a text table and
//! render the moduli and viscosity charts.

pub mod charts;
pub mod cli;
pub mod config;
pub mod data;
pub mod stats;

pub use cli::{Cli, ExitStatus};
pub use config::AnalysisConfig;

use anyhow::{Context, Result};
use charts::StaticChartRenderer;
use clap::CommandFactory;
use data::{load_matrix, write_stats, DataProcessor, LoaderError, RAW_DELIMITER};
use stats::StatsCalculator;

/// Writes a warning to stderr.
fn warning(message: &str, err: &LoaderError) {
    eprintln!("WARNING:  {message} {err}");
}

/// Run the whole analysis.
///
/// Unreadable or malformed input is reported with the usage text and turned
/// into [`ExitStatus::IoError`] / [`ExitStatus::InvalidData`]. Anything that
/// fails after loading is returned as an error.
pub fn run(cli: Cli) -> Result<ExitStatus> {
    let config = AnalysisConfig::from_cli(&cli);
    log::info!("Analyzing {}", config.input.display());

    let raw = match load_matrix(&config.input, RAW_DELIMITER) {
        Ok(raw) => raw,
        Err(err) => {
            let status = if err.is_io() {
                warning("Problems reading file:", &err);
                ExitStatus::IoError
            } else {
                warning("Read invalid data:", &err);
                ExitStatus::InvalidData
            };
            let _ = Cli::command().print_help();
            return Ok(status);
        }
    };
    log::info!("Loaded {} samples x {} channels", raw.nrows(), raw.ncols());

    let stats = DataProcessor::reduce(&raw)
        .with_context(|| format!("Cannot reduce {}", config.input.display()))?;

    let table_path = config.stats_table_path();
    write_stats(&table_path, &stats)?;
    println!("Wrote file: {}", table_path.display());

    StaticChartRenderer::default()
        .render(&config.stats_base(), &stats)
        .context("Failed to render charts")?;

    if config.summary {
        let summaries = StatsCalculator::summarize(&stats);
        print!("{}", StatsCalculator::format_table(&summaries));
    }

    Ok(ExitStatus::Success)
}
