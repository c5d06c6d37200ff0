//! Core matching orchestration
//!
//! This module implements the Matcher struct which runs the full pipeline:
//! validation, column selection, standardization, ranking and selection.
//! Every invocation is pure given its inputs; no state survives a call.

use crate::algorithm::matching::criteria::{MatchingConfig, SelectionPolicy};
use crate::algorithm::matching::normalize::Standardizer;
use crate::algorithm::matching::parallel::rank_parallel;
use crate::algorithm::matching::selection::{independent_selection, non_repeat_selection};
use crate::algorithm::matching::sequential::rank_sequential;
use crate::algorithm::matching::types::{IndexMatrix, MatchingResult};
use crate::algorithm::matching::validation::{
    validate_dimensions, validate_k, validate_stratify_order,
};
use crate::data::SampleMatrix;
use crate::error::Result;
use log::info;
use std::time::Instant;

/// Matcher pairing treatment samples with control samples
#[derive(Debug, Clone)]
pub struct Matcher {
    /// Matching configuration
    config: MatchingConfig,
}

impl Matcher {
    // Treatment-group size where parallel ranking starts to pay off
    const PARALLEL_THRESHOLD: usize = 1000;

    /// Create a new matcher with the given configuration
    #[must_use]
    pub const fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Match every treatment sample against the control pool
    ///
    /// # Arguments
    ///
    /// * `control` - control group sample matrix (pool drawn from)
    /// * `treatment` - treatment group sample matrix
    ///
    /// # Returns
    ///
    /// Result containing the selected control indices, flat and per
    /// treatment sample.
    pub fn match_samples(
        &self,
        control: &SampleMatrix,
        treatment: &SampleMatrix,
    ) -> Result<MatchingResult> {
        let start_time = Instant::now();

        validate_dimensions(control, treatment)?;

        // Column selection applies to both groups alike; stratify indices
        // refer to positions within the used columns.
        let selected;
        let (control_used, treatment_used) = match &self.config.use_columns {
            Some(columns) => {
                selected = (
                    control.select_columns(columns)?,
                    treatment.select_columns(columns)?,
                );
                (&selected.0, &selected.1)
            }
            None => (control, treatment),
        };

        if let Some(order) = &self.config.stratify_order {
            validate_stratify_order(order, control_used.ncols())?;
        }
        validate_k(self.config.k, control_used.nrows())?;

        let scaler = Standardizer::fit(control_used)?;
        let control_std = scaler.transform(control_used);
        let treatment_std = scaler.transform(treatment_used);

        info!(
            "Ranking {} treatment samples against a control pool of {} ({} features)",
            treatment_std.nrows(),
            control_std.nrows(),
            control_std.ncols()
        );

        let stratify_order = self.config.stratify_order.as_deref();
        let use_parallel =
            self.config.use_parallel && treatment_std.nrows() >= Self::PARALLEL_THRESHOLD;

        let ranks = if use_parallel {
            rank_parallel(&control_std, &treatment_std, stratify_order)
        } else {
            rank_sequential(&control_std, &treatment_std, stratify_order)
        };

        let selection = match self.config.policy {
            SelectionPolicy::Independent => independent_selection(&ranks, self.config.k)?,
            SelectionPolicy::NonRepeating => non_repeat_selection(&ranks, self.config.k)?,
        };

        let elapsed = start_time.elapsed();

        info!(
            "Matching complete: {} treatment samples took {} control selections in {:.2?}",
            treatment_std.nrows(),
            selection.selected_indices.len(),
            elapsed
        );

        Ok(MatchingResult {
            selected_indices: selection.selected_indices,
            selected_per_treatment: selection.selected_per_treatment,
            treatment_count: treatment.nrows(),
            control_count: control.nrows(),
            matching_time: elapsed,
        })
    }
}

/// One-shot propensity-score matching entry point
///
/// Runs [`Matcher::match_samples`] with the given configuration and returns
/// the selection pair: the flat selected-control-index list and the
/// per-treatment selection matrix.
pub fn psm(
    control: &SampleMatrix,
    treatment: &SampleMatrix,
    config: &MatchingConfig,
) -> Result<(Vec<usize>, IndexMatrix)> {
    let result = Matcher::new(config.clone()).match_samples(control, treatment)?;
    Ok((result.selected_indices, result.selected_per_treatment))
}
