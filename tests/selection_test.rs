//! Tests for the independent and non-repeating selection policies

use ct_match::algorithm::matching::{independent_selection, non_repeat_selection};
use ct_match::{IndexMatrix, MatchError};

#[test]
fn test_independent_takes_nearest_k_verbatim() {
    let ranks = IndexMatrix::from_rows(&[vec![2, 0, 1, 3], vec![2, 3, 1, 0]]).unwrap();

    let selection = independent_selection(&ranks, 2).unwrap();
    assert_eq!(selection.selected_per_treatment.nrows(), 2);
    assert_eq!(selection.selected_per_treatment.ncols(), 2);
    assert_eq!(selection.selected_per_treatment.row(0), &[2, 0]);
    assert_eq!(selection.selected_per_treatment.row(1), &[2, 3]);

    // Flat list is the row-major concatenation; control 2 repeats
    assert_eq!(selection.selected_indices, vec![2, 0, 2, 3]);
}

#[test]
fn test_independent_rejects_oversized_k() {
    let ranks = IndexMatrix::from_rows(&[vec![0, 1, 2]]).unwrap();
    let err = independent_selection(&ranks, 4).unwrap_err();
    assert!(matches!(err, MatchError::MalformedInput(_)));
}

#[test]
fn test_non_repeat_skips_claimed_controls() {
    let ranks = IndexMatrix::from_rows(&[vec![1, 0, 2, 3], vec![1, 3, 0, 2]]).unwrap();

    let selection = non_repeat_selection(&ranks, 1).unwrap();
    // Treatment 0 claims control 1 first, so treatment 1 falls back to 3
    assert_eq!(selection.selected_per_treatment.row(0), &[1]);
    assert_eq!(selection.selected_per_treatment.row(1), &[3]);
    assert_eq!(selection.selected_indices, vec![1, 3]);
}

#[test]
fn test_non_repeat_flat_list_has_no_duplicates() {
    let ranks = IndexMatrix::from_rows(&[
        vec![0, 1, 2, 3, 4, 5],
        vec![0, 1, 2, 3, 4, 5],
        vec![5, 4, 3, 2, 1, 0],
    ])
    .unwrap();

    let selection = non_repeat_selection(&ranks, 2).unwrap();
    assert_eq!(selection.selected_indices.len(), 6);

    let mut deduped = selection.selected_indices.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), 6);

    // Earlier rows claim their nearest; the last row keeps what is left
    assert_eq!(selection.selected_per_treatment.row(0), &[0, 1]);
    assert_eq!(selection.selected_per_treatment.row(1), &[2, 3]);
    assert_eq!(selection.selected_per_treatment.row(2), &[5, 4]);
}

#[test]
fn test_non_repeat_insufficient_pool_is_checked_up_front() {
    let permutation: Vec<usize> = (0..10).collect();
    let ranks = IndexMatrix::from_rows(&[
        permutation.clone(),
        permutation.clone(),
        permutation.clone(),
        permutation,
    ])
    .unwrap();

    // k * treatment count = 12 > 10 controls
    let err = non_repeat_selection(&ranks, 3).unwrap_err();
    assert!(matches!(
        err,
        MatchError::InsufficientControlPool {
            needed: 12,
            available: 10
        }
    ));

    // The boundary case still succeeds
    assert!(non_repeat_selection(&ranks, 2).is_ok());
}

#[test]
fn test_non_repeat_assignment_depends_on_treatment_order() {
    let first = vec![0, 1, 2, 3];
    let second = vec![0, 2, 1, 3];

    let forward = non_repeat_selection(
        &IndexMatrix::from_rows(&[first.clone(), second.clone()]).unwrap(),
        1,
    )
    .unwrap();
    let reversed =
        non_repeat_selection(&IndexMatrix::from_rows(&[second, first]).unwrap(), 1).unwrap();

    // Whoever goes first claims control 0; the runner-up differs
    assert_eq!(forward.selected_indices, vec![0, 2]);
    assert_eq!(reversed.selected_indices, vec![0, 1]);

    // The total number of claimed controls is order-invariant
    assert_eq!(
        forward.selected_indices.len(),
        reversed.selected_indices.len()
    );
}
