//! Pairwise correlation matrices (Pearson, Spearman, Kendall tau-b).
//!
//! All matrix functions use pairwise-complete observations: for each column
//! pair only the rows where both values are finite enter the statistic. A
//! pair with fewer than two complete rows, or with a zero-variance side,
//! yields NaN.

use faer::Mat;

/// Pearson correlation coefficient of two equally long, finite slices.
///
/// Returns NaN for fewer than two observations or zero variance on either
/// side. The result is clamped to [-1, 1] to absorb floating-point drift.
pub fn pearson_pair(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mean_x: f64 = xs.iter().sum::<f64>() / n as f64;
    let mean_y: f64 = ys.iter().sum::<f64>() / n as f64;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 || syy <= 0.0 {
        return f64::NAN;
    }
    (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0)
}

/// Average ranks (1-based) of the values, ties receiving the mean of the
/// ranks they span.
pub fn average_ranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        // Extend over the tie group starting at sorted position i.
        let mut j = i;
        while j + 1 < n && values[order[j + 1]] == values[order[i]] {
            j += 1;
        }
        let rank = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = rank;
        }
        i = j + 1;
    }
    ranks
}

/// Kendall tau-b of two equally long, finite slices (tie-corrected).
///
/// Returns NaN for fewer than two observations or when either side is
/// entirely tied.
pub fn kendall_tau_b(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }

    let mut concordant = 0u64;
    let mut discordant = 0u64;
    let mut ties_x = 0u64;
    let mut ties_y = 0u64;
    for i in 0..n {
        for j in (i + 1)..n {
            let dx = xs[i] - xs[j];
            let dy = ys[i] - ys[j];
            if dx == 0.0 {
                ties_x += 1;
            }
            if dy == 0.0 {
                ties_y += 1;
            }
            if dx != 0.0 && dy != 0.0 {
                if (dx > 0.0) == (dy > 0.0) {
                    concordant += 1;
                } else {
                    discordant += 1;
                }
            }
        }
    }

    let n0 = (n * (n - 1) / 2) as f64;
    let denom = ((n0 - ties_x as f64) * (n0 - ties_y as f64)).sqrt();
    if denom <= 0.0 {
        return f64::NAN;
    }
    ((concordant as f64 - discordant as f64) / denom).clamp(-1.0, 1.0)
}

/// Rows of columns `a` and `b` where both values are finite.
fn complete_pairs(x: &Mat<f64>, a: usize, b: usize) -> (Vec<f64>, Vec<f64>) {
    let n = x.nrows();
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    for i in 0..n {
        let xv = x[(i, a)];
        let yv = x[(i, b)];
        if xv.is_finite() && yv.is_finite() {
            xs.push(xv);
            ys.push(yv);
        }
    }
    (xs, ys)
}

fn symmetric_matrix(p: usize, mut pair_stat: impl FnMut(usize, usize) -> f64) -> Mat<f64> {
    let mut m = Mat::zeros(p, p);
    for a in 0..p {
        for b in a..p {
            let v = pair_stat(a, b);
            m[(a, b)] = v;
            m[(b, a)] = v;
        }
    }
    m
}

/// Pairwise Pearson correlation matrix of the columns of `x`.
pub fn pearson_matrix(x: &Mat<f64>) -> Mat<f64> {
    symmetric_matrix(x.ncols(), |a, b| {
        let (xs, ys) = complete_pairs(x, a, b);
        pearson_pair(&xs, &ys)
    })
}

/// Pairwise Spearman correlation matrix: Pearson on average-rank-transformed
/// values, ranks taken within each pairwise-complete subset.
pub fn spearman_matrix(x: &Mat<f64>) -> Mat<f64> {
    symmetric_matrix(x.ncols(), |a, b| {
        let (xs, ys) = complete_pairs(x, a, b);
        pearson_pair(&average_ranks(&xs), &average_ranks(&ys))
    })
}

/// Pairwise Kendall tau-b matrix of the columns of `x`.
pub fn kendall_matrix(x: &Mat<f64>) -> Mat<f64> {
    symmetric_matrix(x.ncols(), |a, b| {
        let (xs, ys) = complete_pairs(x, a, b);
        kendall_tau_b(&xs, &ys)
    })
}
