//! Sequential ranking implementation
//!
//! This module implements the sequential (non-parallel) version of the
//! ranking step for smaller treatment groups.

use crate::algorithm::matching::distance::{distances_to_controls, distances_to_controls_subset};
use crate::algorithm::matching::types::IndexMatrix;
use crate::data::SampleMatrix;
use crate::utils::progress;
use std::cmp::Ordering;

/// Rank every control index for one treatment row, nearest first
///
/// Without a stratify order the ranking is ascending plain Euclidean
/// distance. With one, control indices are compared lexicographically on
/// the tuple of per-group distances, first group most significant. Either
/// way the sort is stable over the identity permutation, so equal
/// distances fall back to ascending original control index.
#[must_use]
pub(crate) fn rank_row(
    treatment_row: &[f64],
    control: &SampleMatrix,
    stratify_order: Option<&[Vec<usize>]>,
) -> Vec<usize> {
    let mut order: Vec<usize> = (0..control.nrows()).collect();

    match stratify_order {
        None => {
            let dist = distances_to_controls(treatment_row, control);
            order.sort_by(|&a, &b| dist[a].total_cmp(&dist[b]));
        }
        Some(groups) => {
            let group_dists: Vec<Vec<f64>> = groups
                .iter()
                .map(|columns| distances_to_controls_subset(treatment_row, control, columns))
                .collect();
            order.sort_by(|&a, &b| {
                for dist in &group_dists {
                    match dist[a].total_cmp(&dist[b]) {
                        Ordering::Equal => {}
                        unequal => return unequal,
                    }
                }
                Ordering::Equal
            });
        }
    }

    order
}

/// Rank the whole treatment group sequentially
///
/// Returns the rank matrix: row `i` is a permutation of the control
/// indices ordered nearest-to-farthest for treatment sample `i`.
#[must_use]
pub fn rank_sequential(
    control: &SampleMatrix,
    treatment: &SampleMatrix,
    stratify_order: Option<&[Vec<usize>]>,
) -> IndexMatrix {
    let pb = progress::create_main_progress_bar(
        treatment.nrows() as u64,
        Some("Ranking treatment samples"),
    );

    let mut ranks = IndexMatrix::with_row_capacity(treatment.nrows(), control.nrows());
    for treatment_row in treatment.rows() {
        ranks.push_row(&rank_row(treatment_row, control, stratify_order));
        pb.inc(1);
    }

    progress::finish_and_clear(&pb);

    ranks
}
