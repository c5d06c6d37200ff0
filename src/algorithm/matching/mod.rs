//! Control-treatment matching algorithms
//!
//! This module implements the matching pipeline: input validation, feature
//! standardization, distance-based ranking of the control pool (plain and
//! stratified), index selection under the independent or non-repeating
//! policy, and lazy pairing of the results.
//!
//! The pipeline runs strictly in that order and holds no state across
//! calls; the only transient resource is the per-run rank matrix.

pub mod criteria;
pub mod distance;
pub mod matcher;
pub mod normalize;
pub mod pairing;
pub mod parallel;
pub mod selection;
pub mod sequential;
pub mod types;
pub mod validation;

// Re-export key types
pub use criteria::{MatchingConfig, MatchingConfigBuilder, SelectionPolicy};
pub use matcher::{Matcher, psm};
pub use normalize::Standardizer;
pub use pairing::{MatchedPair, MatchedPairs, matched_pairs};
pub use parallel::rank_parallel;
pub use selection::{independent_selection, non_repeat_selection};
pub use sequential::rank_sequential;
pub use types::{IndexMatrix, MatchingResult, Selection};
