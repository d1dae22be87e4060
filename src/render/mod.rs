//! Heatmap rendering.
//!
//! Turns a [`CollinearityMatrix`] into a raster image: a color grid with
//! axis tick labels, an always-present color-scale legend, an optional
//! title, and (for matrices up to 50x50) per-cell value overlays.
//!
//! [`CollinearityMatrix`]: crate::core::CollinearityMatrix

mod colormap;
mod font;
mod heatmap;

pub use heatmap::{
    save_collinearity_heatmap, HeatmapOptions, HeatmapOptionsBuilder, RenderError,
};
