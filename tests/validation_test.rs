//! Tests for input validation

use ct_match::algorithm::matching::validation::{
    validate_dimensions, validate_k, validate_stratify_order,
};
use ct_match::{MatchError, SampleMatrix};

fn two_by_two() -> SampleMatrix {
    SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap()
}

#[test]
fn test_empty_groups_are_rejected() {
    let empty = SampleMatrix::from_rows(vec![]).unwrap();
    let filled = two_by_two();

    assert!(validate_dimensions(&empty, &filled).is_err());
    assert!(validate_dimensions(&filled, &empty).is_err());
    assert!(validate_dimensions(&filled, &filled).is_ok());
}

#[test]
fn test_feature_count_mismatch_is_rejected() {
    let control = two_by_two();
    let treatment = SampleMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();

    let err = validate_dimensions(&control, &treatment).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(msg) if msg.contains("2 features")));
}

#[test]
fn test_stratify_order_accepts_full_disjoint_coverage() {
    assert!(validate_stratify_order(&[vec![0], vec![1]], 2).is_ok());
    assert!(validate_stratify_order(&[vec![0, 1]], 2).is_ok());
    assert!(validate_stratify_order(&[vec![4], vec![1, 2, 3], vec![0]], 5).is_ok());
}

#[test]
fn test_stratify_order_rejects_duplicate_index() {
    let err = validate_stratify_order(&[vec![0, 0], vec![1]], 2).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(msg) if msg.contains("more than once")));

    // Duplicates across groups are just as malformed
    let err = validate_stratify_order(&[vec![0], vec![0, 1]], 2).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(_)));
}

#[test]
fn test_stratify_order_rejects_out_of_range_index() {
    let err = validate_stratify_order(&[vec![0], vec![2]], 2).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(msg) if msg.contains("out of range")));
}

#[test]
fn test_stratify_order_rejects_missing_coverage() {
    let err = validate_stratify_order(&[vec![0]], 2).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(msg) if msg.contains("does not cover")));
}

#[test]
fn test_stratify_order_rejects_empty_shapes() {
    assert!(validate_stratify_order(&[], 2).is_err());
    assert!(validate_stratify_order(&[vec![0], vec![]], 2).is_err());
}

#[test]
fn test_k_bounds() {
    assert!(validate_k(1, 5).is_ok());
    assert!(validate_k(5, 5).is_ok());
    assert!(validate_k(0, 5).is_err());
    assert!(validate_k(6, 5).is_err());
}
