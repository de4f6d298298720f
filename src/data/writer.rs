//! Statistics Table Writer
//! Writes the statistics matrix as a space-delimited text table.

use super::processor::StatisticsMatrix;
use csv::WriterBuilder;
use std::path::Path;
use thiserror::Error;

/// Column separator of the stats table.
pub const STATS_DELIMITER: u8 = b' ';

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Failed to flush {path}: {source}")]
    Flush {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Format a value as `%.18e` does: 18 fractional digits and a signed,
/// at least two digit exponent.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let formatted = format!("{:.18e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Write one line per statistics row, overwriting `path`.
pub fn write_stats(path: &Path, stats: &StatisticsMatrix) -> Result<(), WriteError> {
    let display = path.display().to_string();
    let mut writer = WriterBuilder::new()
        .delimiter(STATS_DELIMITER)
        .has_headers(false)
        .from_path(path)
        .map_err(|source| WriteError::Csv {
            path: display.clone(),
            source,
        })?;

    for row in stats.as_matrix().rows() {
        writer
            .write_record(row.iter().map(|v| format_value(*v)))
            .map_err(|source| WriteError::Csv {
                path: display.clone(),
                source,
            })?;
    }

    writer.flush().map_err(|source| WriteError::Flush {
        path: display.clone(),
        source,
    })?;

    log::debug!("Wrote {} samples to {}", stats.samples(), display);
    Ok(())
}
