//! Data Processor Module
//! Maps the positional rheometer channels and reduces a raw sweep to the
//! statistics matrix consumed by the writer and the chart renderer.

use super::matrix::{Matrix, ShapeError};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ProcessorError {
    #[error("raw data has {found} columns, at least {required} are required")]
    TooFewColumns { required: usize, found: usize },
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Positional channels of the frequency-sweep export. No header row exists,
/// so the discriminant is the column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawChannel {
    Temperature = 0,
    Time = 1,
    OscillationStress = 2,
    Strain = 3,
    PhaseDelta = 4,
    ElasticModulus = 5,
    ViscousModulus = 6,
    StrainPercent = 7,
    Frequency = 8,
    DynamicViscosityElastic = 9,
    DynamicViscosityViscous = 10,
    ComplexViscosity = 11,
    RawPhase = 12,
    TanDelta = 13,
    Torque = 14,
    NormalForce = 15,
    Friction = 16,
}

impl RawChannel {
    /// Number of channels in a complete export.
    pub const COUNT: usize = 17;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Rows of the statistics matrix, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatRow {
    Temperature = 0,
    ElasticModulus = 1,
    ViscousModulus = 2,
    ComplexViscosity = 3,
    Frequency = 4,
}

impl StatRow {
    pub const ALL: [StatRow; 5] = [
        StatRow::Temperature,
        StatRow::ElasticModulus,
        StatRow::ViscousModulus,
        StatRow::ComplexViscosity,
        StatRow::Frequency,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Raw channel this row is copied from.
    pub fn source(self) -> RawChannel {
        match self {
            StatRow::Temperature => RawChannel::Temperature,
            StatRow::ElasticModulus => RawChannel::ElasticModulus,
            StatRow::ViscousModulus => RawChannel::ViscousModulus,
            StatRow::ComplexViscosity => RawChannel::ComplexViscosity,
            StatRow::Frequency => RawChannel::Frequency,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatRow::Temperature => "temperature",
            StatRow::ElasticModulus => "G'",
            StatRow::ViscousModulus => "G\"",
            StatRow::ComplexViscosity => "|eta*|",
            StatRow::Frequency => "frequency",
        }
    }
}

/// Minimum raw column count: the channel layout is referenced up to
/// complex viscosity.
pub const REQUIRED_COLUMNS: usize = RawChannel::ComplexViscosity as usize + 1;

/// Five-row matrix, one column per sample, rows ordered as [`StatRow::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsMatrix {
    inner: Matrix,
}

impl StatisticsMatrix {
    pub const ROWS: usize = StatRow::ALL.len();

    /// Wrap an existing matrix, e.g. one re-read from a stats file.
    pub fn from_matrix(inner: Matrix) -> Result<Self, ShapeError> {
        if inner.nrows() != Self::ROWS {
            return Err(ShapeError::RowCount {
                expected: Self::ROWS,
                found: inner.nrows(),
            });
        }
        Ok(Self { inner })
    }

    pub fn row(&self, row: StatRow) -> &[f64] {
        // shape is checked on construction
        self.inner.row(row.index()).unwrap_or(&[])
    }

    pub fn temperature(&self) -> &[f64] {
        self.row(StatRow::Temperature)
    }

    pub fn elastic_modulus(&self) -> &[f64] {
        self.row(StatRow::ElasticModulus)
    }

    pub fn viscous_modulus(&self) -> &[f64] {
        self.row(StatRow::ViscousModulus)
    }

    pub fn complex_viscosity(&self) -> &[f64] {
        self.row(StatRow::ComplexViscosity)
    }

    pub fn frequency(&self) -> &[f64] {
        self.row(StatRow::Frequency)
    }

    /// Number of samples (columns).
    pub fn samples(&self) -> usize {
        self.inner.ncols()
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }
}

/// Handles reduction of raw sweeps.
pub struct DataProcessor;

impl DataProcessor {
    /// Select temperature, G', G", |eta*| and frequency from `raw` and lay
    /// them out as rows. A pure selection and transpose: no aggregation.
    pub fn reduce(raw: &Matrix) -> Result<StatisticsMatrix, ProcessorError> {
        if raw.ncols() < REQUIRED_COLUMNS {
            return Err(ProcessorError::TooFewColumns {
                required: REQUIRED_COLUMNS,
                found: raw.ncols(),
            });
        }

        let mut stats = Matrix::zeros(StatisticsMatrix::ROWS, raw.nrows());
        for stat_row in StatRow::ALL {
            let values = raw
                .column(stat_row.source().index())
                .ok_or(ProcessorError::TooFewColumns {
                    required: REQUIRED_COLUMNS,
                    found: raw.ncols(),
                })?;
            stats.set_row(stat_row.index(), &values)?;
        }

        log::debug!(
            "Reduced {} samples x {} channels to {} statistic rows",
            raw.nrows(),
            raw.ncols(),
            StatisticsMatrix::ROWS
        );
        Ok(StatisticsMatrix::from_matrix(stats)?)
    }
}
