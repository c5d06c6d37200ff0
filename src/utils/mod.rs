//! Shared utilities for the matching pipeline

pub mod logging;

// Keep `crate::utils::progress::...` call sites short
pub use logging::progress;
