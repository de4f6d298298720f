//! Statistics Calculator Module
//! Descriptive statistics per row of the statistics matrix.
//!
//! The statistics matrix itself stays a plain channel selection; this summary
//! is an additional report (count, mean, median, std, min, max per channel).

use crate::data::{StatRow, StatisticsMatrix};
use statrs::statistics::{Data, Median, Statistics};
use std::fmt::Write;

/// Descriptive statistics for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub channel: StatRow,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl ChannelSummary {
    fn empty(channel: StatRow) -> Self {
        Self {
            channel,
            count: 0,
            mean: f64::NAN,
            median: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Handles statistical summaries.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    pub fn compute_descriptive_stats(channel: StatRow, values: &[f64]) -> ChannelSummary {
        let n = values.len();
        if n == 0 {
            return ChannelSummary::empty(channel);
        }

        // sample std dev; a single sample has no spread
        let std = if n > 1 { values.iter().std_dev() } else { 0.0 };

        ChannelSummary {
            channel,
            count: n,
            mean: values.iter().mean(),
            median: Data::new(values.to_vec()).median(),
            std,
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
        }
    }

    /// Summaries for every row, in statistics-matrix order.
    pub fn summarize(stats: &StatisticsMatrix) -> Vec<ChannelSummary> {
        StatRow::ALL
            .iter()
            .map(|row| Self::compute_descriptive_stats(*row, stats.row(*row)))
            .collect()
    }

    /// Fixed-width text table of the summaries.
    pub fn format_table(summaries: &[ChannelSummary]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>12} {:>12} {:>12} {:>12} {:>12}",
            "channel", "n", "mean", "median", "std", "min", "max"
        );
        for s in summaries {
            let _ = writeln!(
                out,
                "{:<12} {:>6} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e} {:>12.4e}",
                s.channel.label(),
                s.count,
                s.mean,
                s.median,
                s.std,
                s.min,
                s.max
            );
        }
        out
    }
}
