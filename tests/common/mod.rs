//! Common test utilities and data generators.

use collinearity::core::CollinearityMatrix;
use collinearity::frame::{Column, DataFrame};
use faer::Mat;

/// Two perfectly anti-correlated features plus a numeric label column.
pub fn frame_with_label() -> DataFrame {
    DataFrame::new(vec![
        Column::numeric("a", vec![1.0, 2.0, 3.0, 4.0]),
        Column::numeric("b", vec![4.0, 3.0, 2.0, 1.0]),
        Column::numeric("label", vec![10.0, 20.0, 30.0, 40.0]),
    ])
}

/// Deterministic pseudo-random frame with `n_features` numeric columns and
/// one text column, for property-style tests.
pub fn generate_frame(n_rows: usize, n_features: usize, seed: u64) -> DataFrame {
    let mut rng_state = seed;
    let mut next_rand = move || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64) * 2.0 - 1.0
    };

    let mut columns = Vec::with_capacity(n_features + 1);
    for j in 0..n_features {
        let values = (0..n_rows).map(|_| next_rand()).collect();
        columns.push(Column::numeric(format!("f{j}"), values));
    }
    columns.push(Column::text(
        "comment",
        (0..n_rows).map(|i| format!("row-{i}")).collect(),
    ));
    DataFrame::new(columns)
}

/// A square labeled matrix filled with a single value.
pub fn uniform_matrix(dim: usize, value: f64) -> CollinearityMatrix {
    let labels = (0..dim).map(|i| format!("f{i}")).collect();
    CollinearityMatrix::new(labels, Mat::from_fn(dim, dim, |_, _| value))
}

/// A fresh output path in the system temp directory.
pub fn temp_png(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("collinearity-test-{name}-{}.png", std::process::id()))
}
