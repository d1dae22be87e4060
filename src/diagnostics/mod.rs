//! Collinearity diagnostics.
//!
//! The matrix builder selects the numeric columns of a data frame, applies
//! the exclusion policy, and fills a labeled square matrix with one of four
//! pairwise association measures:
//!
//! - **Pearson / Spearman / Kendall**: standard correlation coefficients
//! - **PairwiseVif**: a variance-inflation approximation derived from the
//!   squared Pearson correlation, 1 / (1 - r²)
//!
//! # Example
//!
//! ```rust,ignore
//! use collinearity::prelude::*;
//!
//! let options = CollinearityOptions::builder()
//!     .method(CorrelationMethod::PairwiseVif)
//!     .label("target")
//!     .build();
//! let matrix = compute_collinearity_matrix(&frame, &options)?;
//! ```

mod collinearity;

pub use collinearity::compute_collinearity_matrix;
