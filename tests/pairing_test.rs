//! Tests for the lazy pairing view

use ct_match::algorithm::matching::matched_pairs;
use ct_match::{IndexMatrix, MatchingConfig, Matcher, SampleMatrix};

#[test]
fn test_pairs_follow_treatment_order() {
    let control =
        SampleMatrix::from_rows(vec![vec![0.0, 0.0], vec![1.0, 1.0], vec![2.0, 2.0]]).unwrap();
    let treatment = SampleMatrix::from_rows(vec![vec![9.0, 9.0], vec![8.0, 8.0]]).unwrap();
    let selected = IndexMatrix::from_rows(&[vec![2, 1], vec![0, 2]]).unwrap();

    let pairs: Vec<_> = matched_pairs(&control, &treatment, &selected).collect();
    assert_eq!(pairs.len(), 2);

    assert_eq!(pairs[0].treatment, &[9.0, 9.0]);
    assert_eq!(pairs[0].controls, vec![&[2.0, 2.0][..], &[1.0, 1.0][..]]);

    assert_eq!(pairs[1].treatment, &[8.0, 8.0]);
    assert_eq!(pairs[1].controls, vec![&[0.0, 0.0][..], &[2.0, 2.0][..]]);
}

#[test]
fn test_pairs_iterator_is_restartable_by_reinvoking() {
    let control = SampleMatrix::from_rows(vec![vec![1.0], vec![5.0]]).unwrap();
    let treatment = SampleMatrix::from_rows(vec![vec![2.0]]).unwrap();
    let selected = IndexMatrix::from_rows(&[vec![0]]).unwrap();

    let mut pairs = matched_pairs(&control, &treatment, &selected);
    assert_eq!(pairs.len(), 1);
    assert!(pairs.next().is_some());
    assert!(pairs.next().is_none());

    // A fresh invocation walks the same rows again
    let again: Vec<_> = matched_pairs(&control, &treatment, &selected).collect();
    assert_eq!(again.len(), 1);
    assert_eq!(again[0].treatment, &[2.0]);
}

#[test]
fn test_result_pairs_joins_original_rows() {
    let control =
        SampleMatrix::from_rows(vec![vec![10.0, 0.0, 7.0], vec![1.0, 4.0, 8.0]]).unwrap();
    let treatment =
        SampleMatrix::from_rows(vec![vec![8.0, 3.0, 8.0], vec![2.0, -3.0, 4.0]]).unwrap();

    let result = Matcher::new(MatchingConfig::default())
        .match_samples(&control, &treatment)
        .unwrap();

    let pairs: Vec<_> = result.pairs(&control, &treatment).collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].treatment, treatment.row(0));
    assert_eq!(pairs[0].controls, vec![control.row(1)]);
    assert_eq!(pairs[1].controls, vec![control.row(0)]);
}
