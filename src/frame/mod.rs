//! In-memory tabular dataset.
//!
//! A [`DataFrame`] is an ordered collection of equally long named columns.
//! The collinearity analysis only reads it; ownership stays with the caller.

mod loader;

pub use loader::{read_csv, LoadError};

use faer::Mat;

/// Values of a single column, uniform per column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    /// Floating-point values; missing entries are NaN.
    Numeric(Vec<f64>),
    /// Free-form text.
    Text(Vec<String>),
    /// Booleans.
    Bool(Vec<bool>),
    /// Timestamps kept as ISO-8601 text for simplicity.
    DateTime(Vec<String>),
}

impl ColumnData {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::DateTime(v) => v.len(),
        }
    }

    /// Whether the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    /// Construct a numeric column.
    pub fn numeric(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Numeric(values),
        }
    }

    /// Construct a text column.
    pub fn text(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            data: ColumnData::Text(values),
        }
    }

    /// The numeric values, if this is a numeric column.
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            _ => None,
        }
    }
}

/// An ordered collection of named columns, all equal length.
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    columns: Vec<Column>,
}

impl DataFrame {
    /// Build a frame from columns.
    ///
    /// # Panics
    /// Panics if the columns are not all the same length; ragged input is a
    /// construction bug.
    pub fn new(columns: Vec<Column>) -> Self {
        if let Some(first) = columns.first() {
            let n = first.data.len();
            assert!(
                columns.iter().all(|c| c.data.len() == n),
                "all columns must have equal length"
            );
        }
        Self { columns }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// All columns in source order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of the numeric columns, in source order.
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| matches!(c.data, ColumnData::Numeric(_)))
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Assemble the named numeric columns into a column-major matrix.
    ///
    /// Column order follows `names`; callers are expected to pass names that
    /// exist and are numeric (internal use after selection).
    pub(crate) fn numeric_matrix(&self, names: &[String]) -> Mat<f64> {
        let n_rows = self.n_rows();
        let cols: Vec<&[f64]> = names
            .iter()
            .filter_map(|name| self.column(name).and_then(Column::as_numeric))
            .collect();
        Mat::from_fn(n_rows, cols.len(), |i, j| cols[j][i])
    }
}
