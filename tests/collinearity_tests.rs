//! Matrix builder tests.

mod common;

use approx::assert_relative_eq;
use collinearity::prelude::*;

// ============================================================================
// Shape and Labeling
// ============================================================================

#[test]
fn test_dimension_equals_numeric_minus_exclusions() {
    let frame = common::generate_frame(30, 6, 42);
    let options = CollinearityOptions::builder()
        .exclude_columns(["f0", "f3"])
        .auto_drop_label_names(false)
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();

    assert_eq!(matrix.dim(), 4);
    assert_eq!(
        matrix.labels(),
        &["f1".to_string(), "f2".to_string(), "f4".to_string(), "f5".to_string()]
    );
}

#[test]
fn test_non_numeric_columns_never_participate() {
    // The text column is invisible to the analysis even when not excluded.
    let frame = common::generate_frame(20, 3, 7);
    let options = CollinearityOptions::builder()
        .auto_drop_label_names(false)
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
    assert_eq!(matrix.dim(), 3);
    assert!(!matrix.labels().iter().any(|l| l == "comment"));
}

#[test]
fn test_unknown_exclusions_are_ignored() {
    let frame = common::generate_frame(20, 3, 11);
    let options = CollinearityOptions::builder()
        .exclude_columns(["no_such_column", "also_missing"])
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
    assert_eq!(matrix.dim(), 3);
}

#[test]
fn test_exclusion_union_collapses_duplicates() {
    let frame = common::frame_with_label();

    let via_exclude = CollinearityOptions::builder()
        .exclude_columns(["a"])
        .auto_drop_label_names(false)
        .build();
    let via_all_sources = CollinearityOptions::builder()
        .exclude_columns(["a"])
        .label("a")
        .auto_drop_label_names(false)
        .build();

    let m1 = compute_collinearity_matrix(&frame, &via_exclude).unwrap();
    let m2 = compute_collinearity_matrix(&frame, &via_all_sources).unwrap();
    assert_eq!(m1.labels(), m2.labels());
}

// ============================================================================
// Error Taxonomy
// ============================================================================

#[test]
fn test_no_features_remaining() {
    let frame = DataFrame::new(vec![Column::numeric("y", vec![1.0, 2.0, 3.0])]);
    let options = CollinearityOptions::builder()
        .label("y")
        .auto_drop_label_names(false)
        .build();
    let result = compute_collinearity_matrix(&frame, &options);

    match result {
        Err(CollinearityError::NoFeaturesRemaining { considered }) => {
            assert_eq!(considered, 1);
        }
        other => panic!("expected NoFeaturesRemaining, got {other:?}"),
    }
}

#[test]
fn test_unsupported_method_at_parse_boundary() {
    let result = "foo".parse::<CorrelationMethod>();
    match result {
        Err(CollinearityError::UnsupportedMethod(name)) => assert_eq!(name, "foo"),
        other => panic!("expected UnsupportedMethod, got {other:?}"),
    }
}

// ============================================================================
// Method Invariants
// ============================================================================

fn all_methods() -> [CorrelationMethod; 4] {
    [
        CorrelationMethod::Pearson,
        CorrelationMethod::Spearman,
        CorrelationMethod::Kendall,
        CorrelationMethod::PairwiseVif,
    ]
}

#[test]
fn test_symmetry_for_all_methods() {
    let frame = common::generate_frame(40, 5, 123);
    for method in all_methods() {
        let options = CollinearityOptions::builder().method(method).build();
        let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
        for i in 0..matrix.dim() {
            for j in 0..matrix.dim() {
                assert_relative_eq!(
                    matrix.get(i, j),
                    matrix.get(j, i),
                    epsilon = 1e-12
                );
            }
        }
    }
}

#[test]
fn test_diagonal_invariants() {
    let frame = common::generate_frame(40, 4, 99);
    for method in all_methods() {
        let options = CollinearityOptions::builder()
            .method(method)
            .absolute(true)
            .build();
        let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
        for d in 0..matrix.dim() {
            if method == CorrelationMethod::PairwiseVif {
                assert_eq!(matrix.get(d, d), 1.0, "VIF diagonal is 1 by convention");
            } else {
                assert_relative_eq!(matrix.get(d, d), 1.0, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn test_absolute_implies_non_negative() {
    let frame = common::generate_frame(40, 5, 321);
    for method in all_methods() {
        let options = CollinearityOptions::builder()
            .method(method)
            .absolute(true)
            .build();
        let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
        for i in 0..matrix.dim() {
            for j in 0..matrix.dim() {
                let v = matrix.get(i, j);
                assert!(v.is_nan() || v >= 0.0, "negative entry {v} under absolute");
            }
        }
    }
}

#[test]
fn test_signed_pearson_keeps_negative_correlations() {
    let frame = common::frame_with_label();
    let options = CollinearityOptions::builder()
        .absolute(false)
        .label("label")
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
    assert_relative_eq!(matrix.get_by_label("a", "b").unwrap(), -1.0, epsilon = 1e-12);
}

#[test]
fn test_standardize_does_not_change_pearson() {
    // Pearson is invariant under affine per-column rescaling.
    let frame = common::generate_frame(50, 4, 5);
    let plain = CollinearityOptions::builder().standardize(false).build();
    let scaled = CollinearityOptions::builder().standardize(true).build();

    let m1 = compute_collinearity_matrix(&frame, &plain).unwrap();
    let m2 = compute_collinearity_matrix(&frame, &scaled).unwrap();
    for i in 0..m1.dim() {
        for j in 0..m1.dim() {
            assert_relative_eq!(m1.get(i, j), m2.get(i, j), epsilon = 1e-9);
        }
    }
}

#[test]
fn test_pairwise_vif_is_at_least_one() {
    let frame = common::generate_frame(40, 5, 77);
    let options = CollinearityOptions::builder()
        .method(CorrelationMethod::PairwiseVif)
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
    for i in 0..matrix.dim() {
        for j in 0..matrix.dim() {
            assert!(matrix.get(i, j) >= 1.0);
        }
    }
}

#[test]
fn test_vif_absolute_flag_is_accepted_noop() {
    let frame = common::generate_frame(40, 4, 13);
    for absolute in [true, false] {
        let options = CollinearityOptions::builder()
            .method(CorrelationMethod::PairwiseVif)
            .absolute(absolute)
            .build();
        let matrix = compute_collinearity_matrix(&frame, &options).unwrap();
        assert!(matrix.get(0, 1) >= 1.0);
    }
}

// ============================================================================
// End-to-End Example
// ============================================================================

#[test]
fn test_absolute_pearson_end_to_end() {
    let frame = common::frame_with_label();
    let options = CollinearityOptions::builder()
        .method(CorrelationMethod::Pearson)
        .absolute(true)
        .label("label")
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options).unwrap();

    assert_eq!(matrix.dim(), 2);
    assert_eq!(matrix.labels(), &["a".to_string(), "b".to_string()]);
    assert_relative_eq!(matrix.get_by_label("a", "a").unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(matrix.get_by_label("b", "b").unwrap(), 1.0, epsilon = 1e-12);
    // Perfect negative correlation, magnitude 1 under `absolute`
    assert_relative_eq!(matrix.get_by_label("a", "b").unwrap(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(matrix.get_by_label("b", "a").unwrap(), 1.0, epsilon = 1e-12);
}
