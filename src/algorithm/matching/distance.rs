//! Euclidean distance kernels for ranking
//!
//! Ranking needs one distance per (treatment, control) pair, either over all
//! used columns or restricted to a stratify group's columns. Both kernels
//! work on one treatment row at a time so the callers can stay row-parallel.

use crate::data::SampleMatrix;

/// Euclidean distance between two equal-length feature vectors
#[must_use]
pub(crate) fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Distances from one treatment row to every control row
#[must_use]
pub(crate) fn distances_to_controls(treatment_row: &[f64], control: &SampleMatrix) -> Vec<f64> {
    control
        .rows()
        .map(|control_row| euclidean(treatment_row, control_row))
        .collect()
}

/// Distances from one treatment row to every control row, restricted to the
/// given columns
#[must_use]
pub(crate) fn distances_to_controls_subset(
    treatment_row: &[f64],
    control: &SampleMatrix,
    columns: &[usize],
) -> Vec<f64> {
    control
        .rows()
        .map(|control_row| {
            columns
                .iter()
                .map(|&c| {
                    let d = treatment_row[c] - control_row[c];
                    d * d
                })
                .sum::<f64>()
                .sqrt()
        })
        .collect()
}
