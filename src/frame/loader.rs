//! CSV loading into a [`DataFrame`].
//!
//! Column types are inferred from the cell values: a column is numeric when
//! every non-empty cell parses as `f64` (empty cells become NaN), boolean
//! when every cell is `true`/`false`, text otherwise.

use std::path::Path;

use log::debug;
use thiserror::Error;

use super::{Column, ColumnData, DataFrame};

/// Errors that can occur while loading a delimited file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("file has a header but no data rows")]
    EmptyInput,

    #[error("row {row} has {got} fields, expected {expected}")]
    RaggedRow {
        row: usize,
        got: usize,
        expected: usize,
    },
}

/// Read a delimited text file with a header row into a [`DataFrame`].
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame, LoadError> {
    // Flexible mode so ragged rows surface as our own error, with the row
    // number, instead of a generic csv failure.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let n_cols = headers.len();

    // Cells gathered column-wise as raw text; typing happens once the row
    // count is known.
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); n_cols];
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != n_cols {
            return Err(LoadError::RaggedRow {
                row: row_no,
                got: record.len(),
                expected: n_cols,
            });
        }
        for (j, value) in record.iter().enumerate() {
            cells[j].push(value.trim().to_string());
        }
    }

    if cells.first().map_or(true, |c| c.is_empty()) {
        return Err(LoadError::EmptyInput);
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column {
            name,
            data: infer_column(raw),
        })
        .collect();

    let frame = DataFrame::new(columns);
    debug!(
        "loaded {} rows x {} columns ({} numeric)",
        frame.n_rows(),
        frame.n_cols(),
        frame.numeric_column_names().len()
    );
    Ok(frame)
}

fn infer_column(raw: Vec<String>) -> ColumnData {
    let numeric = raw
        .iter()
        .all(|s| s.is_empty() || s.parse::<f64>().is_ok());
    // All-empty columns carry no numeric information; keep them as text.
    if numeric && raw.iter().any(|s| !s.is_empty()) {
        return ColumnData::Numeric(
            raw.iter()
                .map(|s| s.parse::<f64>().unwrap_or(f64::NAN))
                .collect(),
        );
    }

    if raw.iter().all(|s| s == "true" || s == "false") {
        return ColumnData::Bool(raw.iter().map(|s| s == "true").collect());
    }

    ColumnData::Text(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("collinearity-loader-{name}.csv"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_read_csv_infers_types() {
        let path = write_temp_csv(
            "types",
            "a,flag,name\n1.5,true,foo\n2.5,false,bar\n,true,baz\n",
        );
        let frame = read_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(frame.n_rows(), 3);
        match &frame.column("a").unwrap().data {
            ColumnData::Numeric(v) => {
                assert_eq!(v[0], 1.5);
                assert!(v[2].is_nan());
            }
            other => panic!("expected numeric column, got {other:?}"),
        }
        assert!(matches!(
            frame.column("flag").unwrap().data,
            ColumnData::Bool(_)
        ));
        assert!(matches!(
            frame.column("name").unwrap().data,
            ColumnData::Text(_)
        ));
    }

    #[test]
    fn test_read_csv_empty_body() {
        let path = write_temp_csv("empty", "a,b\n");
        let result = read_csv(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(LoadError::EmptyInput)));
    }
}
