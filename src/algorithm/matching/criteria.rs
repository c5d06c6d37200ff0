//! Matching configuration for control-treatment matching
//!
//! This module provides the structures and builders for configuring how
//! treatment samples are ranked against the control pool and how the final
//! control indices are selected.

use serde::{Deserialize, Serialize};

/// Policy deciding whether a control sample may be matched more than once
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Every treatment sample takes its `k` nearest controls, regardless of
    /// what other treatment samples selected
    #[default]
    Independent,
    /// Each control sample is claimed at most once across the whole
    /// treatment group; earlier treatment samples claim first
    NonRepeating,
}

/// Configuration for the matching process
///
/// `stratify_order` encodes feature priority: each inner list is a group of
/// zero-based column indices (positions within the used columns), and group
/// order decides the sort significance. Closeness on the first group is
/// settled before the second group is even considered, which is a multi-key
/// sort rather than a blended distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Columns participating in matching; `None` uses all columns
    pub use_columns: Option<Vec<usize>>,

    /// Priority-ordered feature groups; `None` ranks by plain Euclidean
    /// distance over all used columns
    pub stratify_order: Option<Vec<Vec<usize>>>,

    /// Whether control samples may be reused across treatment samples
    pub policy: SelectionPolicy,

    /// Number of control samples selected per treatment sample
    pub k: usize,

    /// Whether to use parallel processing for ranking large treatment groups
    pub use_parallel: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            use_columns: None,
            stratify_order: None,
            policy: SelectionPolicy::Independent,
            k: 1,
            use_parallel: true,
        }
    }
}

impl MatchingConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a matching configuration
    #[must_use]
    pub fn builder() -> MatchingConfigBuilder {
        MatchingConfigBuilder::new()
    }
}

/// Builder for constructing a matching configuration
#[derive(Debug, Clone, Default)]
pub struct MatchingConfigBuilder {
    config: MatchingConfig,
}

impl MatchingConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict matching to the given columns
    #[must_use]
    pub fn use_columns(mut self, columns: Vec<usize>) -> Self {
        self.config.use_columns = Some(columns);
        self
    }

    /// Set the priority-ordered feature groups
    #[must_use]
    pub fn stratify_order(mut self, order: Vec<Vec<usize>>) -> Self {
        self.config.stratify_order = Some(order);
        self
    }

    /// Set the selection policy
    #[must_use]
    pub const fn policy(mut self, policy: SelectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    /// Set the number of controls selected per treatment sample
    #[must_use]
    pub const fn k(mut self, k: usize) -> Self {
        self.config.k = k;
        self
    }

    /// Set whether to use parallel processing for ranking
    #[must_use]
    pub const fn use_parallel(mut self, parallel: bool) -> Self {
        self.config.use_parallel = parallel;
        self
    }

    /// Build the matching configuration
    #[must_use]
    pub fn build(self) -> MatchingConfig {
        self.config
    }
}
