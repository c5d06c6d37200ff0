//! Run configuration for the matching binary
//!
//! Bundles the dataset location, the dataset-reading options and the
//! matching configuration into one JSON-deserializable document so a whole
//! run is reproducible from a single file.

use crate::algorithm::matching::MatchingConfig;
use crate::data::DatasetConfig;
use crate::error::{MatchError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for one matching run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Dataset file, Parquet or delimited text
    pub dataset_path: PathBuf,

    /// How to read and split the dataset
    pub dataset: DatasetConfig,

    /// How to rank and select matches
    pub matching: MatchingConfig,
}

impl RunConfig {
    /// Load a run configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            MatchError::Config(format!("failed to parse {}: {e}", path.display()))
        })
    }
}
