//! Insertion-ordered index set
//!
//! The non-repeating selector needs to track claimed control indices with
//! O(1) membership tests while preserving first-claimed order for
//! deterministic output. A hash set paired with an append-only vector covers
//! both; claims are never revoked, so no removal API exists.

use rustc_hash::FxHashSet;

/// Set of `usize` indices that remembers insertion order
#[derive(Debug, Default, Clone)]
pub struct OrderedIndexSet {
    seen: FxHashSet<usize>,
    order: Vec<usize>,
}

impl OrderedIndexSet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with pre-allocated capacity
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: FxHashSet::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Insert an index, returning `true` if it was not already present
    pub fn insert(&mut self, index: usize) -> bool {
        if self.seen.insert(index) {
            self.order.push(index);
            true
        } else {
            false
        }
    }

    /// Check whether an index has been inserted
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    /// Number of distinct indices inserted
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check whether the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over indices in insertion order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Indices in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Consume the set, yielding the indices in insertion order
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut s = OrderedIndexSet::new();
        assert!(s.insert(5));
        assert!(s.insert(1));
        assert!(s.insert(3));
        assert!(!s.insert(1));

        assert_eq!(s.len(), 3);
        assert!(s.contains(5));
        assert!(!s.contains(2));
        assert_eq!(s.as_slice(), &[5, 1, 3]);
        assert_eq!(s.into_vec(), vec![5, 1, 3]);
    }

    #[test]
    fn test_empty() {
        let s = OrderedIndexSet::with_capacity(8);
        assert!(s.is_empty());
        assert_eq!(s.iter().count(), 0);
    }
}
