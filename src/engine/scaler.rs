//! Standard Scaler
//!
//! Per-feature affine standardization `(x - mean) / scale`, fitted offline
//! and shipped inside the statistical bundle.

use ndarray::{Array1, Array2, ArrayView2};
use serde::Deserialize;

use super::bundle::BundleError;
use super::inference::ScoringError;

/// Fitted standardization parameters
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f64>,
    scale: Array1<f64>,
}

/// On-disk scaler record
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ScalerParams {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self, BundleError> {
        if mean.is_empty() {
            return Err(BundleError::Invalid("scaler has no features".to_string()));
        }
        if mean.len() != scale.len() {
            return Err(BundleError::Invalid(format!(
                "scaler mean has {} entries but scale has {}",
                mean.len(),
                scale.len()
            )));
        }
        if let Some(i) = mean.iter().position(|m| !m.is_finite()) {
            return Err(BundleError::Invalid(format!("scaler mean[{}] is not finite", i)));
        }
        if let Some(i) = scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(BundleError::Invalid(format!(
                "scaler scale[{}] must be finite and non-zero",
                i
            )));
        }

        Ok(Self {
            mean: Array1::from(mean),
            scale: Array1::from(scale),
        })
    }

    /// Number of features the scaler was fitted on
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Standardize a (time_steps x num_features) window
    pub fn transform(&self, x: ArrayView2<f64>) -> Result<Array2<f64>, ScoringError> {
        let actual = x.ncols();
        if actual != self.n_features() {
            return Err(ScoringError::DimensionMismatch {
                expected: self.n_features(),
                actual,
            });
        }

        Ok((&x - &self.mean) / &self.scale)
    }
}
