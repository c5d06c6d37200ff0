//! A Rust library for propensity-score matching: pairing every treatment
//! sample with its closest control samples, with optional stratified
//! (priority-ordered) ranking and a repeat-free selection policy.

pub mod algorithm;
pub mod collections;
pub mod config;
pub mod data;
pub mod error;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::RunConfig;
pub use data::{DatasetConfig, SampleMatrix, load_dataset};
pub use error::{MatchError, Result};

// Matching pipeline
pub use algorithm::matching::{
    IndexMatrix, MatchedPair, MatchedPairs, Matcher, MatchingConfig, MatchingConfigBuilder,
    MatchingResult, Selection, SelectionPolicy, Standardizer, psm,
};
