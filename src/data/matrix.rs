//! Dense Matrix Module
//! Row-major `f64` storage with an explicit shape.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

/// A 2-D numeric array: `nrows` x `ncols`, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix of the given shape.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            values: vec![0.0; nrows * ncols],
        }
    }

    /// Build from nested rows. Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        let nrows = rows.len();
        let mut values = Vec::with_capacity(nrows * ncols);

        for (row, data) in rows.into_iter().enumerate() {
            if data.len() != ncols {
                return Err(ShapeError::RaggedRow {
                    row,
                    expected: ncols,
                    found: data.len(),
                });
            }
            values.extend(data);
        }

        Ok(Self {
            nrows,
            ncols,
            values,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.nrows && col < self.ncols {
            Some(self.values[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.nrows {
            let start = row * self.ncols;
            Some(&self.values[start..start + self.ncols])
        } else {
            None
        }
    }

    /// Copy one column out, top to bottom.
    pub fn column(&self, col: usize) -> Option<Vec<f64>> {
        if col < self.ncols {
            Some(
                (0..self.nrows)
                    .map(|row| self.values[row * self.ncols + col])
                    .collect(),
            )
        } else {
            None
        }
    }

    /// Overwrite a row. `data` must be exactly `ncols` long.
    pub fn set_row(&mut self, row: usize, data: &[f64]) -> Result<(), ShapeError> {
        if row >= self.nrows {
            return Err(ShapeError::RowCount {
                expected: row + 1,
                found: self.nrows,
            });
        }
        if data.len() != self.ncols {
            return Err(ShapeError::RaggedRow {
                row,
                expected: self.ncols,
                found: data.len(),
            });
        }
        let start = row * self.ncols;
        self.values[start..start + self.ncols].copy_from_slice(data);
        Ok(())
    }

    /// Iterate rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows).filter_map(move |row| self.row(row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap()
    }

    #[test]
    fn test_from_rows_shape_and_access() {
        let m = sample();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.get(1, 2), Some(6.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 3), None);
        assert_eq!(m.row(0), Some(&[1.0, 2.0, 3.0][..]));
        assert_eq!(m.column(1), Some(vec![2.0, 5.0]));
        assert_eq!(m.column(3), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_set_row_and_iterate() {
        let mut m = Matrix::zeros(2, 2);
        m.set_row(1, &[7.0, 8.0]).unwrap();
        let rows: Vec<&[f64]> = m.rows().collect();
        assert_eq!(rows, vec![&[0.0, 0.0][..], &[7.0, 8.0][..]]);

        assert!(m.set_row(2, &[1.0, 1.0]).is_err());
        assert!(m.set_row(0, &[1.0]).is_err());
    }

    #[test]
    fn test_zero_width_matrix_keeps_its_rows() {
        let m = Matrix::zeros(5, 0);
        assert!(m.is_empty());
        assert_eq!(m.shape(), (5, 0));
        assert!(m.rows().all(|row| row.is_empty()));
        assert_eq!(m.rows().count(), 5);
    }
}
