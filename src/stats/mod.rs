//! Stats module - descriptive summaries of the statistics matrix

mod calculator;

pub use calculator::{ChannelSummary, StatsCalculator};
