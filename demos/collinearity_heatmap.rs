//! Compute a collinearity matrix from a CSV dataset and save it as a
//! heatmap.
//!
//! Usage: cargo run --example collinearity_heatmap -- <dataset.csv> [out.png]

use anyhow::{bail, Context, Result};
use collinearity::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        bail!("usage: collinearity_heatmap <dataset.csv> [out.png]");
    };
    let output = args.next().unwrap_or_else(|| "collinearity.png".to_string());

    let frame = read_csv(&input).with_context(|| format!("loading {input}"))?;
    println!(
        "loaded {} rows, {} columns ({} numeric)",
        frame.n_rows(),
        frame.n_cols(),
        frame.numeric_column_names().len()
    );

    let options = CollinearityOptions::builder()
        .method(CorrelationMethod::Pearson)
        .absolute(true)
        .label("label")
        .exclude_columns(["ts", "datetime_utc"])
        .auto_drop_label_names(true)
        .build();
    let matrix = compute_collinearity_matrix(&frame, &options)?;

    println!("features: {:?}", matrix.labels());
    for i in 0..matrix.dim() {
        let row: Vec<String> = (0..matrix.dim())
            .map(|j| format!("{:5.2}", matrix.get(i, j)))
            .collect();
        println!("{:>12} {}", matrix.labels()[i], row.join(" "));
    }

    let heatmap = HeatmapOptions::builder()
        .title("Collinearity (|Pearson|)")
        .annotate(true)
        .build();
    let path = save_collinearity_heatmap(&matrix, &output, &heatmap)?;
    println!("heatmap written to {}", path.display());
    Ok(())
}
