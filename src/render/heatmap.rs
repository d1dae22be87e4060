//! Heatmap rendering of a collinearity matrix to a raster image file.

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use log::{debug, info};
use thiserror::Error;

use super::colormap::{luminance, viridis};
use super::font::{
    draw_text, draw_text_rotated45, draw_text_rotated90, text_height, text_width,
};
use crate::core::CollinearityMatrix;

/// Largest matrix dimension that still gets per-cell value overlays; beyond
/// this the text is illegible and slow to draw.
const ANNOTATION_CAP: usize = 50;

/// Minimum color-scale width; a degenerate (uniform) matrix is stretched to
/// this instead of dividing by zero.
const MIN_RANGE: f64 = 1e-9;

// Plot area sized like an 8x6 inch figure at 150 DPI; cells shrink to fit
// large matrices and are clamped so tiny matrices stay readable.
const PLOT_TARGET_W: u32 = 1200;
const PLOT_TARGET_H: u32 = 900;
const CELL_MIN: u32 = 12;
const CELL_MAX: u32 = 64;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FOREGROUND: Rgb<u8> = Rgb([30, 30, 30]);
const NAN_CELL: Rgb<u8> = Rgb([200, 200, 200]);

/// Errors that can occur while rendering a heatmap.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot render an empty matrix")]
    EmptyMatrix,

    #[error("image write failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Rendering options for [`save_collinearity_heatmap`].
#[derive(Debug, Clone)]
pub struct HeatmapOptions {
    /// Optional title displayed above the plot.
    pub title: Option<String>,
    /// Overlay per-cell values, capped at 50x50 (default: true).
    pub annotate: bool,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            title: None,
            annotate: true,
        }
    }
}

impl HeatmapOptions {
    /// Create a new builder for heatmap options.
    pub fn builder() -> HeatmapOptionsBuilder {
        HeatmapOptionsBuilder::default()
    }
}

/// Builder for [`HeatmapOptions`].
#[derive(Debug, Clone, Default)]
pub struct HeatmapOptionsBuilder {
    options: HeatmapOptions,
}

impl HeatmapOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plot title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    /// Set whether cell values are overlaid.
    pub fn annotate(mut self, annotate: bool) -> Self {
        self.options.annotate = annotate;
        self
    }

    /// Build the options.
    pub fn build(self) -> HeatmapOptions {
        self.options
    }
}

pub(crate) fn annotation_enabled(rows: usize, cols: usize, annotate: bool) -> bool {
    annotate && rows <= ANNOTATION_CAP && cols <= ANNOTATION_CAP
}

/// Render `matrix` as a color grid with axis labels and a color-scale
/// legend, and write it to `out_path` (format chosen by extension).
///
/// The color scale spans the finite value range of the matrix; NaN cells are
/// drawn in neutral gray and never annotated. Returns `out_path` unchanged.
///
/// # Errors
/// - [`RenderError::EmptyMatrix`] for a 0x0 matrix.
/// - [`RenderError::Image`] when the file cannot be written.
pub fn save_collinearity_heatmap<P: AsRef<Path>>(
    matrix: &CollinearityMatrix,
    out_path: P,
    options: &HeatmapOptions,
) -> Result<PathBuf, RenderError> {
    let n = matrix.dim();
    if n == 0 {
        return Err(RenderError::EmptyMatrix);
    }

    // Color bounds over finite entries only; an all-NaN matrix keeps the
    // unit range and renders every cell as missing.
    let (vmin, mut vmax) = matrix.finite_range().unwrap_or((0.0, 1.0));
    if vmax - vmin < MIN_RANGE {
        vmax = vmin + MIN_RANGE;
    }

    let cell_w = (PLOT_TARGET_W / n as u32).clamp(CELL_MIN, CELL_MAX);
    let cell_h = (PLOT_TARGET_H / n as u32).clamp(CELL_MIN, CELL_MAX);
    let plot_w = cell_w * n as u32;
    let plot_h = cell_h * n as u32;

    let label_scale = 1u32;
    let title_scale = 2u32;
    let max_label_w = matrix
        .labels()
        .iter()
        .map(|l| text_width(l, label_scale))
        .max()
        .unwrap_or(0);

    // Tight margins: left fits the row labels plus the rotated y-axis label,
    // bottom fits the 45-degree column labels, right fits the legend.
    let axis_label_h = text_height(label_scale) + 8;
    let margin_left = axis_label_h + max_label_w + 10;
    let rotated_extent =
        ((max_label_w + text_height(label_scale)) as f64 * std::f64::consts::FRAC_1_SQRT_2) as u32;
    let margin_bottom = rotated_extent + axis_label_h + 14;
    let margin_top = match &options.title {
        Some(_) => text_height(title_scale) + 20,
        None => 12,
    };
    let bar_w = 20u32;
    let tick_label_w = [vmin, (vmin + vmax) / 2.0, vmax]
        .iter()
        .map(|v| text_width(&format_value(*v), label_scale))
        .max()
        .unwrap_or(0);
    let margin_right = 16 + bar_w + 8 + tick_label_w + 8 + axis_label_h;

    let width = margin_left + plot_w + margin_right;
    let height = margin_top + plot_h + margin_bottom;
    debug!(
        "heatmap layout: {n}x{n} cells at {cell_w}x{cell_h}px, canvas {width}x{height}"
    );

    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    draw_cells(&mut img, matrix, vmin, vmax, margin_left, margin_top, cell_w, cell_h);

    if annotation_enabled(n, n, options.annotate) {
        draw_annotations(&mut img, matrix, margin_left, margin_top, cell_w, cell_h, vmin, vmax);
    }

    draw_axis_labels(&mut img, matrix, margin_left, margin_top, plot_h, cell_w, cell_h, label_scale);

    // Axis captions
    let caption = "Features";
    draw_text(
        &mut img,
        (margin_left + plot_w / 2) as i64 - text_width(caption, label_scale) as i64 / 2,
        (height - text_height(label_scale) - 4) as i64,
        caption,
        label_scale,
        FOREGROUND,
    );
    draw_text_rotated90(
        &mut img,
        2,
        (margin_top + plot_h / 2) as i64 - text_width(caption, label_scale) as i64 / 2,
        caption,
        label_scale,
        FOREGROUND,
    );

    if let Some(title) = &options.title {
        draw_text(
            &mut img,
            (width / 2) as i64 - text_width(title, title_scale) as i64 / 2,
            6,
            title,
            title_scale,
            FOREGROUND,
        );
    }

    draw_colorbar(
        &mut img,
        margin_left + plot_w + 16,
        margin_top,
        bar_w,
        plot_h,
        vmin,
        vmax,
        label_scale,
    );

    img.save(out_path.as_ref())?;
    info!("wrote heatmap to {}", out_path.as_ref().display());
    Ok(out_path.as_ref().to_path_buf())
}

fn format_value(v: f64) -> String {
    format!("{v:.2}")
}

#[allow(clippy::too_many_arguments)]
fn draw_cells(
    img: &mut RgbImage,
    matrix: &CollinearityMatrix,
    vmin: f64,
    vmax: f64,
    x0: u32,
    y0: u32,
    cell_w: u32,
    cell_h: u32,
) {
    let n = matrix.dim();
    for i in 0..n {
        for j in 0..n {
            let v = matrix.get(i, j);
            let color = if v.is_nan() {
                NAN_CELL
            } else {
                Rgb(viridis((v - vmin) / (vmax - vmin)))
            };
            let px0 = x0 + j as u32 * cell_w;
            let py0 = y0 + i as u32 * cell_h;
            for dy in 0..cell_h {
                for dx in 0..cell_w {
                    img.put_pixel(px0 + dx, py0 + dy, color);
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_annotations(
    img: &mut RgbImage,
    matrix: &CollinearityMatrix,
    x0: u32,
    y0: u32,
    cell_w: u32,
    cell_h: u32,
    vmin: f64,
    vmax: f64,
) {
    let n = matrix.dim();
    for i in 0..n {
        for j in 0..n {
            let v = matrix.get(i, j);
            if !v.is_finite() {
                continue;
            }
            let text = format_value(v);
            let cell_color = viridis((v - vmin) / (vmax - vmin));
            let text_color = if luminance(cell_color) > 0.5 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            };
            let cx = x0 + j as u32 * cell_w + cell_w / 2;
            let cy = y0 + i as u32 * cell_h + cell_h / 2;
            draw_text(
                img,
                cx as i64 - text_width(&text, 1) as i64 / 2,
                cy as i64 - text_height(1) as i64 / 2,
                &text,
                1,
                text_color,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_labels(
    img: &mut RgbImage,
    matrix: &CollinearityMatrix,
    x0: u32,
    y0: u32,
    plot_h: u32,
    cell_w: u32,
    cell_h: u32,
    scale: u32,
) {
    for (i, label) in matrix.labels().iter().enumerate() {
        // Row labels: right-aligned against the plot's left edge.
        let ly = y0 + i as u32 * cell_h + cell_h / 2;
        draw_text(
            img,
            x0 as i64 - 6 - text_width(label, scale) as i64,
            ly as i64 - text_height(scale) as i64 / 2,
            label,
            scale,
            FOREGROUND,
        );

        // Column labels: rotated 45 degrees, right-anchored under the tick.
        let lx = x0 + i as u32 * cell_w + cell_w / 2;
        draw_text_rotated45(
            img,
            lx as i64,
            (y0 + plot_h + 8) as i64,
            label,
            scale,
            FOREGROUND,
        );
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_colorbar(
    img: &mut RgbImage,
    x0: u32,
    y0: u32,
    bar_w: u32,
    bar_h: u32,
    vmin: f64,
    vmax: f64,
    scale: u32,
) {
    for dy in 0..bar_h {
        // Top of the bar is the high end of the scale.
        let t = 1.0 - dy as f64 / (bar_h - 1).max(1) as f64;
        let color = Rgb(viridis(t));
        for dx in 0..bar_w {
            img.put_pixel(x0 + dx, y0 + dy, color);
        }
    }

    let ticks = [
        (vmax, y0),
        ((vmin + vmax) / 2.0, y0 + bar_h / 2),
        (vmin, y0 + bar_h - 1),
    ];
    let mut max_tick_w = 0;
    for (value, y) in ticks {
        let text = format_value(value);
        max_tick_w = max_tick_w.max(text_width(&text, scale));
        draw_text(
            img,
            (x0 + bar_w + 8) as i64,
            y as i64 - text_height(scale) as i64 / 2,
            &text,
            scale,
            FOREGROUND,
        );
    }

    let caption = "Score";
    draw_text_rotated90(
        img,
        (x0 + bar_w + 8 + max_tick_w + 8) as i64,
        (y0 + bar_h / 2) as i64 - text_width(caption, scale) as i64 / 2,
        caption,
        scale,
        FOREGROUND,
    );
}
