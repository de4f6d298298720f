//! Run configuration resolved from the command line.

use crate::cli::Cli;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Sample sweep shipped with the tool, used when no file is given.
pub const DEFAULT_DATA_FILE: &str = "data/20171015_Harris_Conor_TPU_FreqSweep-0002oexp.txt";

const STATS_STEM_SUFFIX: &str = "_stats";
pub const STATS_TABLE_SUFFIX: &str = ".txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub summary: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_DATA_FILE),
            output_dir: PathBuf::from("."),
            summary: false,
        }
    }
}

impl AnalysisConfig {
    /// The data file given on the command line always wins over the default.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            input: cli.txt_data_file.clone(),
            output_dir: cli.output_dir.clone(),
            summary: cli.summary,
        }
    }

    /// `<output_dir>/<input stem>_stats`, the prefix of every artifact.
    pub fn stats_base(&self) -> PathBuf {
        let mut name = self
            .input
            .file_stem()
            .map(|s| s.to_os_string())
            .unwrap_or_default();
        name.push(STATS_STEM_SUFFIX);
        self.output_dir.join(name)
    }

    pub fn stats_table_path(&self) -> PathBuf {
        artifact_path(&self.stats_base(), STATS_TABLE_SUFFIX)
    }
}

/// Append `suffix` to the final component of `base` verbatim.
pub fn artifact_path(base: &Path, suffix: &str) -> PathBuf {
    let mut path = OsString::from(base.as_os_str());
    path.push(suffix);
    PathBuf::from(path)
}
