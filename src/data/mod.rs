//! Data module - delimited loading, channel reduction and stats output

pub mod loader;
pub mod matrix;
pub mod processor;
pub mod writer;

pub use loader::{load_matrix, LoaderError, RAW_DELIMITER};
pub use matrix::{Matrix, ShapeError};
pub use processor::{DataProcessor, ProcessorError, RawChannel, StatRow, StatisticsMatrix};
pub use writer::{write_stats, WriteError, STATS_DELIMITER};
