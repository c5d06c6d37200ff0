//! Parallel ranking implementation
//!
//! This module implements the parallel version of the ranking step for
//! large treatment groups, using Rayon. Rank rows are independent per
//! treatment sample, so the fan-out is a plain parallel map; row order in
//! the output matches the sequential implementation exactly.

use crate::algorithm::matching::sequential::rank_row;
use crate::algorithm::matching::types::IndexMatrix;
use crate::data::SampleMatrix;
use crate::utils::progress;
use log::info;
use rayon::prelude::*;

/// Rank the whole treatment group in parallel
///
/// Output is identical to [`rank_sequential`](super::sequential::rank_sequential);
/// only the wall-clock time differs.
#[must_use]
pub fn rank_parallel(
    control: &SampleMatrix,
    treatment: &SampleMatrix,
    stratify_order: Option<&[Vec<usize>]>,
) -> IndexMatrix {
    info!(
        "Using parallel ranking with {} threads",
        rayon::current_num_threads()
    );

    let pb = progress::create_main_progress_bar(
        treatment.nrows() as u64,
        Some("Ranking treatment samples"),
    );

    let rows: Vec<Vec<usize>> = (0..treatment.nrows())
        .into_par_iter()
        .map(|i| {
            let row = rank_row(treatment.row(i), control, stratify_order);
            pb.inc(1);
            row
        })
        .collect();

    progress::finish_and_clear(&pb);

    let mut ranks = IndexMatrix::with_row_capacity(treatment.nrows(), control.nrows());
    for row in &rows {
        ranks.push_row(row);
    }

    ranks
}
