//! Labeled square matrix returned by the collinearity analysis.

use faer::Mat;

/// A square matrix whose rows and columns are both indexed by the same
/// ordered set of feature names.
///
/// Correlation-derived matrices are symmetric; entries may be NaN where the
/// underlying statistic is undefined (e.g. zero-variance columns).
#[derive(Debug, Clone)]
pub struct CollinearityMatrix {
    labels: Vec<String>,
    values: Mat<f64>,
}

impl CollinearityMatrix {
    /// Wrap a square value matrix with its feature labels.
    ///
    /// # Panics
    /// Panics if `values` is not square or its dimension does not match the
    /// number of labels. Both are construction bugs, not runtime conditions.
    pub fn new(labels: Vec<String>, values: Mat<f64>) -> Self {
        assert_eq!(values.nrows(), values.ncols(), "matrix must be square");
        assert_eq!(labels.len(), values.nrows(), "one label per row/column");
        Self { labels, values }
    }

    /// Number of rows (equal to the number of columns).
    pub fn dim(&self) -> usize {
        self.labels.len()
    }

    /// Feature names, shared by rows and columns, in analysis order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The raw value matrix.
    pub fn values(&self) -> &Mat<f64> {
        &self.values
    }

    /// Value at (row, column).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// Value addressed by row/column labels, if both exist.
    pub fn get_by_label(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.labels.iter().position(|l| l == row)?;
        let j = self.labels.iter().position(|l| l == col)?;
        Some(self.values[(i, j)])
    }

    /// Finite minimum and maximum over all entries, ignoring NaN.
    ///
    /// Returns `None` when the matrix holds no finite value at all.
    pub fn finite_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for j in 0..self.values.ncols() {
            for i in 0..self.values.nrows() {
                let v = self.values[(i, j)];
                if v.is_finite() {
                    range = Some(match range {
                        Some((lo, hi)) => (lo.min(v), hi.max(v)),
                        None => (v, v),
                    });
                }
            }
        }
        range
    }
}
