//! Core types for collinearity analysis.

mod matrix;
mod options;

pub use matrix::CollinearityMatrix;
pub use options::{
    CollinearityError, CollinearityOptions, CollinearityOptionsBuilder, CorrelationMethod,
    COMMON_LABEL_NAMES,
};
