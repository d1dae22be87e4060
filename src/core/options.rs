//! Collinearity analysis options and configuration.

use std::str::FromStr;

use thiserror::Error;

/// Column names that are commonly used for labels/targets and are dropped
/// automatically when [`CollinearityOptions::auto_drop_label_names`] is set.
pub const COMMON_LABEL_NAMES: &[&str] = &["label", "labels", "target", "class", "y"];

/// Pairwise association measure used to fill the collinearity matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorrelationMethod {
    /// Linear (covariance-based) correlation coefficient (default).
    #[default]
    Pearson,
    /// Pearson correlation on average-rank-transformed values.
    Spearman,
    /// Kendall tau-b rank concordance.
    Kendall,
    /// Pairwise variance-inflation approximation: 1 / (1 - r²).
    PairwiseVif,
}

impl CorrelationMethod {
    /// Canonical identifier, matching the accepted `FromStr` spellings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CorrelationMethod::Pearson => "pearson",
            CorrelationMethod::Spearman => "spearman",
            CorrelationMethod::Kendall => "kendall",
            CorrelationMethod::PairwiseVif => "pairwise_vif",
        }
    }
}

impl FromStr for CorrelationMethod {
    type Err = CollinearityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pearson" => Ok(CorrelationMethod::Pearson),
            "spearman" => Ok(CorrelationMethod::Spearman),
            "kendall" => Ok(CorrelationMethod::Kendall),
            "pairwise_vif" => Ok(CorrelationMethod::PairwiseVif),
            other => Err(CollinearityError::UnsupportedMethod(other.to_string())),
        }
    }
}

/// Errors that can occur during collinearity analysis.
#[derive(Debug, Error)]
pub enum CollinearityError {
    #[error("no numeric columns left after exclusions ({considered} numeric columns considered)")]
    NoFeaturesRemaining { considered: usize },

    #[error("unknown method: {0}")]
    UnsupportedMethod(String),
}

/// Configuration options for [`compute_collinearity_matrix`].
///
/// Defaults mirror typical usage: absolute Pearson correlations with the
/// common label names dropped automatically.
///
/// [`compute_collinearity_matrix`]: crate::diagnostics::compute_collinearity_matrix
#[derive(Debug, Clone)]
pub struct CollinearityOptions {
    /// Association measure (default: Pearson).
    pub method: CorrelationMethod,
    /// Take absolute values after computation, ignoring sign (default: true).
    pub absolute: bool,
    /// Z-score each surviving column (population std) before correlating
    /// (default: false).
    pub standardize: bool,
    /// Label/target column to exclude, if present among the numeric columns.
    pub label: Option<String>,
    /// Additional columns to exclude; names absent from the numeric columns
    /// are ignored.
    pub exclude_columns: Vec<String>,
    /// Also exclude every name from [`COMMON_LABEL_NAMES`] (default: true).
    pub auto_drop_label_names: bool,
}

impl Default for CollinearityOptions {
    fn default() -> Self {
        Self {
            method: CorrelationMethod::Pearson,
            absolute: true,
            standardize: false,
            label: None,
            exclude_columns: Vec::new(),
            auto_drop_label_names: true,
        }
    }
}

impl CollinearityOptions {
    /// Create a new builder for collinearity options.
    pub fn builder() -> CollinearityOptionsBuilder {
        CollinearityOptionsBuilder::default()
    }
}

/// Builder for [`CollinearityOptions`].
#[derive(Debug, Clone, Default)]
pub struct CollinearityOptionsBuilder {
    options: CollinearityOptions,
}

impl CollinearityOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the association measure.
    pub fn method(mut self, method: CorrelationMethod) -> Self {
        self.options.method = method;
        self
    }

    /// Set whether to take absolute values of the result.
    pub fn absolute(mut self, absolute: bool) -> Self {
        self.options.absolute = absolute;
        self
    }

    /// Set whether to z-score columns before correlating.
    pub fn standardize(mut self, standardize: bool) -> Self {
        self.options.standardize = standardize;
        self
    }

    /// Set the label/target column to exclude.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    /// Set the explicit exclusion list.
    pub fn exclude_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.exclude_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Set whether common label names are dropped automatically.
    pub fn auto_drop_label_names(mut self, auto_drop: bool) -> Self {
        self.options.auto_drop_label_names = auto_drop;
        self
    }

    /// Build the options.
    pub fn build(self) -> CollinearityOptions {
        self.options
    }
}
