//! Pairwise statistics over column-major numeric buffers.

mod pairwise;
mod standardize;

pub use pairwise::{
    average_ranks, kendall_matrix, kendall_tau_b, pearson_matrix, pearson_pair, spearman_matrix,
};
pub use standardize::{column_moments, zscore_columns};
