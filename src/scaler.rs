//! Feature scaling parameters shared with downstream model consumers.
//!
//! The training pipeline persists per-feature means and scales as JSON so
//! that inference code can reproduce the exact transform. The record shape
//! (`mean`, `scale`, `features`) is a compatibility contract; the
//! collinearity core itself never depends on it.

use std::path::Path;

use faer::Mat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::stats::column_moments;

/// Errors from scaler fitting and parameter persistence.
#[derive(Debug, Error)]
pub enum ScalerError {
    #[error("scaler expects {expected} features, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persisted scaling-parameter record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    pub features: Vec<String>,
}

impl ScalerParams {
    /// Write the record as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ScalerError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a record written by [`ScalerParams::save_json`] (or by any
    /// producer using the same shape).
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, ScalerError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// Standard (z-score) scaler: per-feature mean and population standard
/// deviation learned from a training matrix.
///
/// Zero-variance features keep a scale of 1 so transforming them centers
/// without blowing up.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    params: ScalerParams,
}

impl StandardScaler {
    /// Learn means and scales from the columns of `x`.
    pub fn fit(x: &Mat<f64>, features: Vec<String>) -> Result<Self, ScalerError> {
        if features.len() != x.ncols() {
            return Err(ScalerError::FeatureCountMismatch {
                expected: x.ncols(),
                got: features.len(),
            });
        }
        let (means, stds) = column_moments(x);
        let mean: Vec<f64> = (0..x.ncols()).map(|j| means[j]).collect();
        let scale: Vec<f64> = (0..x.ncols())
            .map(|j| if stds[j] > 0.0 { stds[j] } else { 1.0 })
            .collect();
        Ok(Self {
            params: ScalerParams {
                mean,
                scale,
                features,
            },
        })
    }

    /// Rebuild a scaler from a persisted record.
    pub fn from_params(params: ScalerParams) -> Self {
        Self { params }
    }

    /// The learned parameters.
    pub fn params(&self) -> &ScalerParams {
        &self.params
    }

    /// Apply the learned transform: (x - mean) / scale, column by column.
    pub fn transform(&self, x: &Mat<f64>) -> Result<Mat<f64>, ScalerError> {
        if x.ncols() != self.params.mean.len() {
            return Err(ScalerError::FeatureCountMismatch {
                expected: self.params.mean.len(),
                got: x.ncols(),
            });
        }
        Ok(Mat::from_fn(x.nrows(), x.ncols(), |i, j| {
            (x[(i, j)] - self.params.mean[j]) / self.params.scale[j]
        }))
    }
}
