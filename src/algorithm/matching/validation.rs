//! Validation functions for the matching algorithm
//!
//! This module contains functions for validating input data and matching
//! parameters before any computation starts. Validation never mutates its
//! inputs and never returns partial results.

use crate::data::SampleMatrix;
use crate::error::{MatchError, Result};
use itertools::Itertools;
use rustc_hash::FxHashSet;

/// Validate that the control and treatment matrices are compatible
///
/// Both groups must be non-empty and describe their samples with the same
/// number of features.
pub fn validate_dimensions(control: &SampleMatrix, treatment: &SampleMatrix) -> Result<()> {
    if control.is_empty() {
        return Err(MatchError::malformed("control group holds no samples"));
    }
    if treatment.is_empty() {
        return Err(MatchError::malformed("treatment group holds no samples"));
    }
    if control.ncols() != treatment.ncols() {
        return Err(MatchError::malformed(format!(
            "control samples have {} features but treatment samples have {}",
            control.ncols(),
            treatment.ncols()
        )));
    }
    if control.ncols() == 0 {
        return Err(MatchError::malformed("samples describe no features"));
    }

    Ok(())
}

/// Validate a stratify order against the number of used feature columns
///
/// The union of all groups must cover exactly `[0, ncols)`: no duplicate
/// index within or across groups, nothing out of range, nothing missing.
pub fn validate_stratify_order(order: &[Vec<usize>], ncols: usize) -> Result<()> {
    if order.is_empty() {
        return Err(MatchError::malformed("stratify order holds no groups"));
    }

    let mut seen = FxHashSet::default();
    for (group_no, group) in order.iter().enumerate() {
        if group.is_empty() {
            return Err(MatchError::malformed(format!(
                "stratify group {group_no} holds no column indices"
            )));
        }

        for &index in group {
            if index >= ncols {
                return Err(MatchError::malformed(format!(
                    "stratify column index {index} is out of range for {ncols} feature columns"
                )));
            }
            if !seen.insert(index) {
                return Err(MatchError::malformed(format!(
                    "stratify column index {index} appears more than once"
                )));
            }
        }
    }

    if seen.len() != ncols {
        let missing = (0..ncols).filter(|c| !seen.contains(c)).join(", ");
        return Err(MatchError::malformed(format!(
            "stratify order does not cover feature columns {missing}"
        )));
    }

    Ok(())
}

/// Validate the per-treatment selection count against the control pool
pub fn validate_k(k: usize, control_count: usize) -> Result<()> {
    if k == 0 {
        return Err(MatchError::malformed(
            "k must select at least one control sample",
        ));
    }
    if k > control_count {
        return Err(MatchError::malformed(format!(
            "k = {k} exceeds the {control_count} available control samples"
        )));
    }

    Ok(())
}
