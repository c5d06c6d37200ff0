//! Sample data structures and dataset loading
//!
//! This module contains the dense matrix type used throughout the matching
//! pipeline and the loader that splits a sample table into control and
//! treatment matrices on a binary indicator column.

pub mod loader;
pub mod matrix;

// Re-export key types
pub use loader::{DatasetConfig, load_dataset};
pub use matrix::SampleMatrix;
