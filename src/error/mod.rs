//! Error handling for the matching pipeline.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use std::io;

/// Specialized error type for control-treatment matching
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// Input data or matching parameters failed validation
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// The control pool cannot satisfy a non-repeating selection
    #[error(
        "insufficient control pool: non-repeating selection needs {needed} distinct controls but only {available} are available"
    )]
    InsufficientControlPool {
        /// Controls required (`k` times the number of treatment samples)
        needed: usize,
        /// Controls present in the pool
        available: usize,
    },

    /// Error opening or reading a dataset file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error reading Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error reading the run configuration
    #[error("config error: {0}")]
    Config(String),
}

impl MatchError {
    /// Shorthand for a [`MatchError::MalformedInput`] with a formatted message
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }
}

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, MatchError>;
