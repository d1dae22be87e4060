//! Collinearity matrix builder.

use std::collections::BTreeSet;

use faer::Mat;
use log::debug;

use crate::core::{
    CollinearityError, CollinearityMatrix, CollinearityOptions, CorrelationMethod,
    COMMON_LABEL_NAMES,
};
use crate::frame::DataFrame;
use crate::stats::{kendall_matrix, pearson_matrix, spearman_matrix, zscore_columns};

/// Cap on r² in the pairwise VIF formula, guarding the 1 / (1 - r²)
/// division against near-perfect correlations.
const VIF_R2_CLIP: f64 = 0.999999;

/// Compute the collinearity matrix of a data frame's numeric features.
///
/// Columns are selected in source order; the exclusion set is the union of
/// the explicit list, the optional label column, and (when enabled) the
/// [`COMMON_LABEL_NAMES`], each intersected with the numeric columns.
/// Exclusion entries that match no numeric column are ignored.
///
/// # Errors
/// - [`CollinearityError::NoFeaturesRemaining`] when no numeric column
///   survives the exclusions.
pub fn compute_collinearity_matrix(
    frame: &DataFrame,
    options: &CollinearityOptions,
) -> Result<CollinearityMatrix, CollinearityError> {
    let numeric: Vec<&str> = frame.numeric_column_names();

    let mut to_drop: BTreeSet<&str> = BTreeSet::new();
    for name in &options.exclude_columns {
        if numeric.contains(&name.as_str()) {
            to_drop.insert(name.as_str());
        }
    }
    if let Some(label) = options.label.as_deref() {
        if numeric.contains(&label) {
            to_drop.insert(label);
        }
    }
    if options.auto_drop_label_names {
        for &name in COMMON_LABEL_NAMES {
            if numeric.contains(&name) {
                to_drop.insert(name);
            }
        }
    }

    let surviving: Vec<String> = numeric
        .iter()
        .filter(|name| !to_drop.contains(*name))
        .map(|name| name.to_string())
        .collect();

    if surviving.is_empty() {
        return Err(CollinearityError::NoFeaturesRemaining {
            considered: numeric.len(),
        });
    }
    debug!(
        "collinearity over {} of {} numeric columns (method: {}, dropped: {:?})",
        surviving.len(),
        numeric.len(),
        options.method.as_str(),
        to_drop
    );

    let mut x = frame.numeric_matrix(&surviving);
    if options.standardize {
        x = zscore_columns(&x);
    }

    let values = match options.method {
        CorrelationMethod::Pearson => apply_absolute(pearson_matrix(&x), options.absolute),
        CorrelationMethod::Spearman => apply_absolute(spearman_matrix(&x), options.absolute),
        CorrelationMethod::Kendall => apply_absolute(kendall_matrix(&x), options.absolute),
        CorrelationMethod::PairwiseVif => {
            // `absolute` is accepted but has no effect: the formula below is
            // non-negative by construction.
            apply_absolute(pairwise_vif(&pearson_matrix(&x)), options.absolute)
        }
    };

    Ok(CollinearityMatrix::new(surviving, values))
}

/// Pairwise variance-inflation approximation from a Pearson matrix.
///
/// Undefined correlations count as 0 (no inflation), r² is clipped below 1,
/// and the diagonal is 1 by convention rather than by the formula.
fn pairwise_vif(r: &Mat<f64>) -> Mat<f64> {
    let p = r.nrows();
    let mut v = Mat::from_fn(p, p, |i, j| {
        let rij = if r[(i, j)].is_nan() { 0.0 } else { r[(i, j)] };
        let r2 = (rij * rij).min(VIF_R2_CLIP);
        1.0 / (1.0 - r2)
    });
    for d in 0..p {
        v[(d, d)] = 1.0;
    }
    v
}

/// Replace every entry with its magnitude; NaN entries stay NaN.
fn apply_absolute(m: Mat<f64>, absolute: bool) -> Mat<f64> {
    if !absolute {
        return m;
    }
    Mat::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)].abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::frame::Column;

    fn frame_with_label() -> DataFrame {
        DataFrame::new(vec![
            Column::numeric("a", vec![1.0, 2.0, 3.0, 4.0]),
            Column::numeric("b", vec![4.0, 3.0, 2.0, 1.0]),
            Column::numeric("label", vec![10.0, 20.0, 30.0, 40.0]),
        ])
    }

    #[test]
    fn test_label_and_auto_drop() {
        let options = CollinearityOptions::builder().label("label").build();
        let m = compute_collinearity_matrix(&frame_with_label(), &options).unwrap();
        assert_eq!(m.labels(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_pairwise_vif_diagonal_and_clip() {
        // a and b are perfectly correlated: off-diagonal hits the clip bound
        let frame = DataFrame::new(vec![
            Column::numeric("a", vec![1.0, 2.0, 3.0, 4.0]),
            Column::numeric("b", vec![2.0, 4.0, 6.0, 8.0]),
        ]);
        let options = CollinearityOptions::builder()
            .method(CorrelationMethod::PairwiseVif)
            .build();
        let m = compute_collinearity_matrix(&frame, &options).unwrap();

        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_relative_eq!(m.get(0, 1), 1.0 / (1.0 - VIF_R2_CLIP), max_relative = 1e-9);
    }

    #[test]
    fn test_pairwise_vif_nan_correlation_counts_as_zero() {
        // The constant column has undefined correlations: treated as r = 0,
        // so its VIF against everything is exactly 1.
        let frame = DataFrame::new(vec![
            Column::numeric("a", vec![1.0, 2.0, 3.0, 4.0]),
            Column::numeric("c", vec![5.0, 5.0, 5.0, 5.0]),
        ]);
        let options = CollinearityOptions::builder()
            .method(CorrelationMethod::PairwiseVif)
            .build();
        let m = compute_collinearity_matrix(&frame, &options).unwrap();
        assert_eq!(m.get(0, 1), 1.0);
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn test_standardize_constant_column_yields_nan_correlation() {
        let frame = DataFrame::new(vec![
            Column::numeric("a", vec![1.0, 2.0, 3.0, 4.0]),
            Column::numeric("c", vec![5.0, 5.0, 5.0, 5.0]),
        ]);
        let options = CollinearityOptions::builder()
            .method(CorrelationMethod::Pearson)
            .standardize(true)
            .build();
        let m = compute_collinearity_matrix(&frame, &options).unwrap();
        assert!(m.get(0, 1).is_nan());
        assert!(m.get(1, 1).is_nan());
        assert_relative_eq!(m.get(0, 0), 1.0, epsilon = 1e-12);
    }
}
