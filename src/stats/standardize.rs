//! Column moments and z-scoring.

use faer::{Col, Mat};

/// Per-column mean and population standard deviation (no Bessel correction),
/// computed over the finite values of each column.
///
/// A column without finite values gets NaN moments; a constant column gets a
/// zero standard deviation.
pub fn column_moments(x: &Mat<f64>) -> (Col<f64>, Col<f64>) {
    let n_rows = x.nrows();
    let n_cols = x.ncols();

    let mut means = Col::zeros(n_cols);
    let mut stds = Col::zeros(n_cols);

    for j in 0..n_cols {
        let mut sum = 0.0;
        let mut count = 0usize;
        for i in 0..n_rows {
            let v = x[(i, j)];
            if v.is_finite() {
                sum += v;
                count += 1;
            }
        }
        if count == 0 {
            means[j] = f64::NAN;
            stds[j] = f64::NAN;
            continue;
        }
        let mean = sum / count as f64;

        let mut ss = 0.0;
        for i in 0..n_rows {
            let v = x[(i, j)];
            if v.is_finite() {
                let d = v - mean;
                ss += d * d;
            }
        }
        means[j] = mean;
        stds[j] = (ss / count as f64).sqrt();
    }

    (means, stds)
}

/// Z-score every column of `x` independently: (value - mean) / population std.
///
/// Any non-finite result (zero-variance columns divide by zero) becomes NaN
/// so infinities never reach the correlation step.
pub fn zscore_columns(x: &Mat<f64>) -> Mat<f64> {
    let (means, stds) = column_moments(x);
    Mat::from_fn(x.nrows(), x.ncols(), |i, j| {
        let z = (x[(i, j)] - means[j]) / stds[j];
        if z.is_finite() {
            z
        } else {
            f64::NAN
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_column_moments_population_std() {
        let x = Mat::from_fn(4, 1, |i, _| (i + 1) as f64); // [1, 2, 3, 4]
        let (means, stds) = column_moments(&x);
        assert_relative_eq!(means[0], 2.5, epsilon = 1e-12);
        // population std of [1,2,3,4] = sqrt(1.25), not the sample value
        assert_relative_eq!(stds[0], 1.25_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_column_moments_skip_nan() {
        let mut x = Mat::zeros(3, 1);
        x[(0, 0)] = 1.0;
        x[(1, 0)] = f64::NAN;
        x[(2, 0)] = 3.0;
        let (means, stds) = column_moments(&x);
        assert_relative_eq!(means[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(stds[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscore_zero_mean_unit_std() {
        let x = Mat::from_fn(5, 1, |i, _| (i as f64) * 3.0 + 2.0);
        let z = zscore_columns(&x);
        let (means, stds) = column_moments(&z);
        assert_relative_eq!(means[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(stds[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zscore_constant_column_becomes_nan() {
        let x = Mat::from_fn(4, 1, |_, _| 7.0);
        let z = zscore_columns(&x);
        for i in 0..4 {
            assert!(z[(i, 0)].is_nan());
        }
    }
}
