//! Feature standardization fitted on the control distribution
//!
//! Distances are only comparable across features once every column is on a
//! common scale, so the matcher standardizes both groups before ranking.
//! The mean and standard deviation are fitted on the control matrix alone
//! and then applied to control and treatment alike.

use crate::data::SampleMatrix;
use crate::error::{MatchError, Result};

/// Per-column mean/standard-deviation transform
#[derive(Debug, Clone)]
pub struct Standardizer {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl Standardizer {
    /// Fit per-column mean and population standard deviation on the control
    /// matrix
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedInput`] for a zero-variance column:
    /// dividing by a zero standard deviation would fill the column with NaN,
    /// so constant columns must be dropped by the caller (or left out via
    /// column selection) before matching.
    pub fn fit(control: &SampleMatrix) -> Result<Self> {
        let n = control.nrows() as f64;
        let mut means = vec![0.0; control.ncols()];
        let mut std_devs = vec![0.0; control.ncols()];

        for row in control.rows() {
            for (col, &value) in row.iter().enumerate() {
                means[col] += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        for row in control.rows() {
            for (col, &value) in row.iter().enumerate() {
                std_devs[col] += (value - means[col]).powi(2);
            }
        }
        for (col, variance_sum) in std_devs.iter_mut().enumerate() {
            let std_dev = (*variance_sum / n).sqrt();
            if std_dev == 0.0 {
                return Err(MatchError::malformed(format!(
                    "feature column {col} has zero variance in the control group"
                )));
            }
            *variance_sum = std_dev;
        }

        Ok(Self { means, std_devs })
    }

    /// Standardize a matrix column-wise, returning a new matrix
    ///
    /// The matrix must have the same number of feature columns the
    /// standardizer was fitted on.
    #[must_use]
    pub fn transform(&self, matrix: &SampleMatrix) -> SampleMatrix {
        debug_assert_eq!(matrix.ncols(), self.means.len());

        let mut data = Vec::with_capacity(matrix.nrows() * matrix.ncols());
        for row in matrix.rows() {
            for (col, &value) in row.iter().enumerate() {
                data.push((value - self.means[col]) / self.std_devs[col]);
            }
        }

        // Finite inputs divided by non-zero deviations stay finite
        SampleMatrix::from_parts(data, matrix.nrows(), matrix.ncols())
            .expect("standardized matrix keeps the input shape")
    }

    /// Fitted per-column means
    #[must_use]
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Fitted per-column standard deviations
    #[must_use]
    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_and_transform() {
        let control =
            SampleMatrix::from_rows(vec![vec![10.0, 0.0, 7.0], vec![1.0, 4.0, 8.0]]).unwrap();
        let scaler = Standardizer::fit(&control).unwrap();

        assert_eq!(scaler.means(), &[5.5, 2.0, 7.5]);
        assert_eq!(scaler.std_devs(), &[4.5, 2.0, 0.5]);

        let standardized = scaler.transform(&control);
        assert_eq!(standardized.row(0), &[1.0, -1.0, -1.0]);
        assert_eq!(standardized.row(1), &[-1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_transform_other_matrix() {
        let control =
            SampleMatrix::from_rows(vec![vec![0.0, 10.0], vec![2.0, 30.0]]).unwrap();
        let treatment = SampleMatrix::from_rows(vec![vec![1.0, 20.0]]).unwrap();

        let scaler = Standardizer::fit(&control).unwrap();
        let standardized = scaler.transform(&treatment);
        assert_eq!(standardized.row(0), &[0.0, 0.0]);
    }

    #[test]
    fn test_zero_variance_rejected() {
        let control =
            SampleMatrix::from_rows(vec![vec![3.0, 1.0], vec![3.0, 2.0]]).unwrap();
        let err = Standardizer::fit(&control).unwrap_err();
        assert!(matches!(err, MatchError::MalformedInput(msg) if msg.contains("column 0")));
    }
}
