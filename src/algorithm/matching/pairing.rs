//! Lazy pairing of treatment samples with their matched controls
//!
//! A presentation convenience on top of the selection result: walk the
//! treatment group in order and hand out each treatment row together with
//! the control rows selected for it. The iterator borrows the matrices and
//! owns no other state, so re-invoking it restarts the walk from row zero.

use crate::algorithm::matching::types::IndexMatrix;
use crate::data::SampleMatrix;

/// One treatment sample joined with its matched control samples
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair<'a> {
    /// Feature vector of the treatment sample
    pub treatment: &'a [f64],
    /// Feature vectors of the matched controls, nearest first
    pub controls: Vec<&'a [f64]>,
}

/// Iterator over matched pairs in treatment order
#[derive(Debug, Clone)]
pub struct MatchedPairs<'a> {
    control: &'a SampleMatrix,
    treatment: &'a SampleMatrix,
    selected_per_treatment: &'a IndexMatrix,
    next_row: usize,
}

impl<'a> Iterator for MatchedPairs<'a> {
    type Item = MatchedPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.selected_per_treatment.nrows() {
            return None;
        }

        let row = self.next_row;
        self.next_row += 1;

        Some(MatchedPair {
            treatment: self.treatment.row(row),
            controls: self
                .selected_per_treatment
                .row(row)
                .iter()
                .map(|&control_index| self.control.row(control_index))
                .collect(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.selected_per_treatment.nrows() - self.next_row;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MatchedPairs<'_> {}

/// Lazily join sample rows with a per-treatment selection matrix
///
/// `selected_per_treatment` must index into `control` and have one row per
/// `treatment` sample, as produced by the selection step.
#[must_use]
pub fn matched_pairs<'a>(
    control: &'a SampleMatrix,
    treatment: &'a SampleMatrix,
    selected_per_treatment: &'a IndexMatrix,
) -> MatchedPairs<'a> {
    MatchedPairs {
        control,
        treatment,
        selected_per_treatment,
        next_row: 0,
    }
}
