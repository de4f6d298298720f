use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::DEFAULT_DATA_FILE;

#[derive(Parser, Debug)]
#[command(name = "rheo-stats")]
#[command(about = "Reduces a rheometer frequency sweep and plots its moduli and viscosity", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The location (directory and file name) of the txt file with data to analyze
    #[arg(short = 'c', long = "txt_data_file", default_value = DEFAULT_DATA_FILE)]
    pub txt_data_file: PathBuf,

    /// Directory that receives the stats table and charts
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Print count, mean, median, std, min and max of every statistics row
    #[arg(long)]
    pub summary: bool,
}

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    InvalidData = 1,
    IoError = 2,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["rheo-stats"]).unwrap();
        assert_eq!(cli.txt_data_file, PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(cli.output_dir, PathBuf::from("."));
        assert!(!cli.summary);
    }

    #[test]
    fn test_short_and_long_data_file_flags() {
        let cli = Cli::try_parse_from(["rheo-stats", "-c", "sweep.txt"]).unwrap();
        assert_eq!(cli.txt_data_file, PathBuf::from("sweep.txt"));

        let cli = Cli::try_parse_from(["rheo-stats", "--txt_data_file", "other.txt", "--summary"])
            .unwrap();
        assert_eq!(cli.txt_data_file, PathBuf::from("other.txt"));
        assert!(cli.summary);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::InvalidData.code(), 1);
        assert_eq!(ExitStatus::IoError.code(), 2);
    }
}
