//! Type definitions for the matching algorithm
//!
//! This module contains common types used throughout the matching algorithm.

use crate::algorithm::matching::pairing::{MatchedPairs, matched_pairs};
use crate::data::SampleMatrix;
use crate::error::{MatchError, Result};
use std::time::Duration;

/// Dense row-major matrix of control-sample indices
///
/// Two shapes flow through the pipeline: the rank matrix (one row per
/// treatment sample, each row a full permutation of the control indices,
/// nearest first) and the selection matrix (one row per treatment sample,
/// `k` selected control indices, nearest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexMatrix {
    data: Vec<usize>,
    nrows: usize,
    ncols: usize,
}

impl IndexMatrix {
    /// Create an empty matrix that rows of width `ncols` will be appended to
    #[must_use]
    pub(crate) fn with_row_capacity(nrows: usize, ncols: usize) -> Self {
        Self {
            data: Vec::with_capacity(nrows * ncols),
            nrows: 0,
            ncols,
        }
    }

    /// Build an index matrix from a list of equal-length index rows
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::MalformedInput`] if the rows differ in length.
    pub fn from_rows(rows: &[Vec<usize>]) -> Result<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        let mut matrix = Self::with_row_capacity(rows.len(), ncols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatchError::malformed(format!(
                    "index row {i} has {} entries, expected {ncols}",
                    row.len()
                )));
            }
            matrix.push_row(row);
        }
        Ok(matrix)
    }

    /// Append one row; every row must have the width the matrix was created with
    pub(crate) fn push_row(&mut self, row: &[usize]) {
        debug_assert_eq!(row.len(), self.ncols);
        self.data.extend_from_slice(row);
        self.nrows += 1;
    }

    /// Number of rows (treatment samples)
    #[must_use]
    pub const fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of index columns per row
    #[must_use]
    pub const fn ncols(&self) -> usize {
        self.ncols
    }

    /// Index row for treatment sample `i`
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[must_use]
    pub fn row(&self, i: usize) -> &[usize] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over rows in treatment order
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        // chunk size 1 on an empty buffer keeps the zero-column case from panicking
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// All indices in row-major order
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.data
    }
}

/// Outcome of an index-selection policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Control indices selected across the whole treatment group, in claim
    /// order. Under the independent policy this may contain duplicates;
    /// under the non-repeating policy it never does.
    pub selected_indices: Vec<usize>,
    /// `k` selected control indices per treatment sample, nearest first
    pub selected_per_treatment: IndexMatrix,
}

/// Result of the matching process
#[derive(Debug, Clone)]
pub struct MatchingResult {
    /// Control indices selected for the whole treatment group
    pub selected_indices: Vec<usize>,
    /// Selected control indices per treatment sample, nearest first
    pub selected_per_treatment: IndexMatrix,
    /// Number of treatment samples matched
    pub treatment_count: usize,
    /// Number of control samples in the pool
    pub control_count: usize,
    /// Time taken for matching
    pub matching_time: Duration,
}

impl MatchingResult {
    /// Lazily join the original sample rows with the selection
    ///
    /// `control` and `treatment` must be the matrices the result was
    /// computed from.
    #[must_use]
    pub fn pairs<'a>(
        &'a self,
        control: &'a SampleMatrix,
        treatment: &'a SampleMatrix,
    ) -> MatchedPairs<'a> {
        matched_pairs(control, treatment, &self.selected_per_treatment)
    }
}
