//! Feature collinearity diagnostics for tabular numeric data.
//!
//! This library computes collinearity matrices (Pearson, Spearman, Kendall
//! correlations or a pairwise variance-inflation approximation) over the
//! numeric columns of an in-memory data frame and renders them as raster
//! heatmaps.
//!
//! # Example
//!
//! ```rust,ignore
//! use collinearity::prelude::*;
//!
//! let frame = read_csv("dataset.csv")?;
//!
//! let options = CollinearityOptions::builder()
//!     .method(CorrelationMethod::Pearson)
//!     .absolute(true)
//!     .label("label")
//!     .exclude_columns(["ts", "datetime_utc"])
//!     .build();
//!
//! let matrix = compute_collinearity_matrix(&frame, &options)?;
//!
//! let heatmap = HeatmapOptions::builder()
//!     .title("Collinearity (|Pearson|)")
//!     .annotate(true)
//!     .build();
//! save_collinearity_heatmap(&matrix, "collinearity.png", &heatmap)?;
//! ```

pub mod core;
pub mod diagnostics;
pub mod frame;
pub mod render;
pub mod scaler;
pub mod stats;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CollinearityError, CollinearityMatrix, CollinearityOptions, CollinearityOptionsBuilder,
        CorrelationMethod, COMMON_LABEL_NAMES,
    };
    pub use crate::diagnostics::compute_collinearity_matrix;
    pub use crate::frame::{read_csv, Column, ColumnData, DataFrame, LoadError};
    pub use crate::render::{
        save_collinearity_heatmap, HeatmapOptions, HeatmapOptionsBuilder, RenderError,
    };
    pub use crate::scaler::{ScalerError, ScalerParams, StandardScaler};
}

pub use crate::core::{
    CollinearityError, CollinearityMatrix, CollinearityOptions, CorrelationMethod,
    COMMON_LABEL_NAMES,
};
pub use crate::diagnostics::compute_collinearity_matrix;
pub use crate::frame::DataFrame;
pub use crate::render::{save_collinearity_heatmap, HeatmapOptions, RenderError};
