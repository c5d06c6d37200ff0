//! Index-selection policies
//!
//! The ranking step produces a full nearest-to-farthest permutation of the
//! control indices per treatment sample; selection reduces each permutation
//! to the final `k` control indices under one of two policies.

use crate::algorithm::matching::types::{IndexMatrix, Selection};
use crate::collections::OrderedIndexSet;
use crate::error::{MatchError, Result};
use smallvec::SmallVec;

/// Per-row selection buffer; matching ratios beyond 8 are rare
type RowPicks = SmallVec<[usize; 8]>;

/// Select the `k` nearest controls per treatment sample independently
///
/// A control sample may be selected by multiple treatment samples. The flat
/// index list is the row-major concatenation of the per-treatment matrix and
/// may contain duplicates.
///
/// # Errors
///
/// Returns [`MatchError::MalformedInput`] if `k` exceeds the number of
/// control samples in the rank rows.
pub fn independent_selection(ranks: &IndexMatrix, k: usize) -> Result<Selection> {
    if k > ranks.ncols() {
        return Err(MatchError::malformed(format!(
            "k = {k} exceeds the {} available control samples",
            ranks.ncols()
        )));
    }

    let mut selected_indices = Vec::with_capacity(ranks.nrows() * k);
    let mut per_treatment = IndexMatrix::with_row_capacity(ranks.nrows(), k);

    for rank_row in ranks.rows() {
        let nearest = &rank_row[..k];
        selected_indices.extend_from_slice(nearest);
        per_treatment.push_row(nearest);
    }

    Ok(Selection {
        selected_indices,
        selected_per_treatment: per_treatment,
    })
}

/// Select `k` controls per treatment sample without reusing any control
///
/// Treatment rows are processed in their given order; each row scans its
/// ranking nearest-to-farthest and claims the first `k` indices nobody
/// claimed before. Earlier treatment rows therefore get better-or-equal
/// matches than later ones when rankings overlap — a deliberate fairness
/// trade-off of the greedy assignment. The flat index list is the
/// insertion-ordered global claim set and is duplicate-free by
/// construction.
///
/// # Errors
///
/// Returns [`MatchError::InsufficientControlPool`] when `k` times the
/// number of treatment samples exceeds the control pool, checked before the
/// scan starts.
pub fn non_repeat_selection(ranks: &IndexMatrix, k: usize) -> Result<Selection> {
    let needed = k * ranks.nrows();
    let available = ranks.ncols();
    if needed > available {
        return Err(MatchError::InsufficientControlPool { needed, available });
    }

    let mut claimed = OrderedIndexSet::with_capacity(needed);
    let mut per_treatment = IndexMatrix::with_row_capacity(ranks.nrows(), k);

    for rank_row in ranks.rows() {
        let mut picks = RowPicks::new();
        for &control_index in rank_row {
            if claimed.insert(control_index) {
                picks.push(control_index);
                if picks.len() == k {
                    break;
                }
            }
        }
        // Each rank row is a full permutation and the pool check above
        // guarantees at least k unclaimed indices remain for every row.
        per_treatment.push_row(&picks);
    }

    Ok(Selection {
        selected_indices: claimed.into_vec(),
        selected_per_treatment: per_treatment,
    })
}
