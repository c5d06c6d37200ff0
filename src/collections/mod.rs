//! Collection types used by the matching algorithms

pub mod ordered_set;

pub use ordered_set::OrderedIndexSet;
