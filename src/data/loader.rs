//! Delimited Data Loader Module
//! Reads header-less numeric text matrices (instrument exports, stats tables).

use super::matrix::{Matrix, ShapeError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Column separator used by the rheometer export.
pub const RAW_DELIMITER: u8 = b'\t';

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not convert '{token}' to float (line {line}, column {column})")]
    InvalidValue {
        token: String,
        line: u64,
        column: usize,
    },
    #[error("wrong number of columns at line {line}: expected {expected}, found {found}")]
    RaggedRow {
        line: u64,
        expected: u64,
        found: u64,
    },
    #[error("malformed record: {0}")]
    Malformed(csv::Error),
    #[error("{}: no data rows", .path.display())]
    Empty { path: PathBuf },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

impl LoaderError {
    /// True when the file could not be opened or read; everything else is bad data.
    pub fn is_io(&self) -> bool {
        matches!(self, LoaderError::Io { .. })
    }

    fn from_csv(origin: &Path, err: csv::Error) -> Self {
        if !err.is_io_error() {
            return LoaderError::Malformed(err);
        }
        let source = match err.into_kind() {
            csv::ErrorKind::Io(source) => source,
            kind => std::io::Error::other(format!("{kind:?}")),
        };
        LoaderError::Io {
            path: origin.to_path_buf(),
            source,
        }
    }
}

/// Load a numeric matrix from `path`, one sample per line.
///
/// Blank lines and lines starting with `#` are skipped. Every remaining line
/// must carry the same number of numeric fields, and at least one such line
/// must exist.
pub fn load_matrix(path: &Path, delimiter: u8) -> Result<Matrix, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = read_matrix_from(file, delimiter, path)?;

    if matrix.nrows() == 0 {
        return Err(LoaderError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!(
        "Loaded {} x {} matrix from {}",
        matrix.nrows(),
        matrix.ncols(),
        path.display()
    );
    Ok(matrix)
}

/// Parse a numeric matrix from any reader. May return an empty matrix.
pub fn read_matrix<R: Read>(reader: R, delimiter: u8) -> Result<Matrix, LoaderError> {
    read_matrix_from(reader, delimiter, Path::new("<reader>"))
}

fn read_matrix_from<R: Read>(
    reader: R,
    delimiter: u8,
    origin: &Path,
) -> Result<Matrix, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {
                // whitespace-only line
                if record.iter().all(str::is_empty) {
                    continue;
                }
                if let Some(first) = rows.first() {
                    if record.len() != first.len() {
                        return Err(LoaderError::RaggedRow {
                            line: record_line(&record),
                            expected: first.len() as u64,
                            found: record.len() as u64,
                        });
                    }
                }
                rows.push(parse_record(&record)?);
            }
            Ok(false) => break,
            Err(err) => return Err(LoaderError::from_csv(origin, err)),
        }
    }

    Ok(Matrix::from_rows(rows)?)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or(0)
}

fn parse_record(record: &StringRecord) -> Result<Vec<f64>, LoaderError> {
    let line = record_line(record);
    record
        .iter()
        .enumerate()
        .map(|(column, token)| {
            token.parse::<f64>().map_err(|_| LoaderError::InvalidValue {
                token: token.to_string(),
                line,
                column,
            })
        })
        .collect()
}
