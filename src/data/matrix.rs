//! Dense sample matrix for the matching pipeline
//!
//! Rows are samples, columns are features. Storage is row-major in a single
//! contiguous buffer for cache locality, the same layout trade-off the
//! rest of the pipeline relies on when scanning one sample at a time.

use crate::error::{MatchError, Result};

/// A dense row-major matrix of `f64` feature values
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMatrix {
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl SampleMatrix {
    /// Build a matrix from a list of sample rows
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedInput`] if the rows differ in length
    /// or contain non-finite values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(MatchError::malformed(format!(
                    "sample row {i} has {} features, expected {ncols}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        Self::from_parts(data, nrows, ncols)
    }

    /// Build a matrix from a pre-flattened row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedInput`] if the buffer length does not
    /// equal `nrows * ncols` or contains non-finite values.
    pub fn from_parts(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Self> {
        if data.len() != nrows * ncols {
            return Err(MatchError::malformed(format!(
                "matrix buffer holds {} values, expected {nrows} x {ncols}",
                data.len()
            )));
        }

        // NaN or infinity would poison every downstream distance comparison
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(MatchError::malformed(format!(
                "non-finite feature value at row {}, column {}",
                pos / ncols.max(1),
                pos % ncols.max(1)
            )));
        }

        Ok(Self { data, nrows, ncols })
    }

    /// Number of samples
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of features per sample
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// Check whether the matrix holds no samples
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    /// Feature vector of sample `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over sample rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunk size 1 on an empty buffer keeps the zero-column case from panicking
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// Build a new matrix restricted to the given columns, in the given order
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedInput`] if any column index is out of
    /// range.
    pub fn select_columns(&self, columns: &[usize]) -> Result<Self> {
        if let Some(&bad) = columns.iter().find(|&&c| c >= self.ncols) {
            return Err(MatchError::malformed(format!(
                "selected column {bad} is out of range for {} feature columns",
                self.ncols
            )));
        }

        let mut data = Vec::with_capacity(self.nrows * columns.len());
        for row in self.rows() {
            data.extend(columns.iter().map(|&c| row[c]));
        }

        Ok(Self {
            data,
            nrows: self.nrows,
            ncols: columns.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_and_accessors() {
        let m = SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.rows().count(), 2);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput(_)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = SampleMatrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput(_)));
    }

    #[test]
    fn test_select_columns() {
        let m = SampleMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let s = m.select_columns(&[2, 0]).unwrap();
        assert_eq!(s.ncols(), 2);
        assert_eq!(s.row(0), &[3.0, 1.0]);
        assert_eq!(s.row(1), &[6.0, 4.0]);

        assert!(m.select_columns(&[3]).is_err());
    }
}
