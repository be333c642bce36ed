//! Statistical Bundle
//!
//! Immutable artifact produced by the training pipeline: fitted scaler, the
//! two decision thresholds and a Mahalanobis mean / inverse-covariance pair.
//! The Mahalanobis pair is carried for artifact compatibility only; scoring
//! does not consult it.

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::scaler::{ScalerParams, StandardScaler};
use super::threshold::Thresholds;

/// Newest artifact schema this build understands
pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

fn default_format_version() -> u32 {
    1
}

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to read bundle {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse bundle: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid bundle: {0}")]
    Invalid(String),

    #[error("unsupported bundle format v{found} (this build reads up to v{supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Raw on-disk layout
#[derive(Debug, Deserialize)]
struct BundleFile {
    #[serde(default = "default_format_version")]
    format_version: u32,
    scaler: ScalerParams,
    #[serde(rename = "T1")]
    t1: f64,
    #[serde(rename = "T2")]
    t2: f64,
    mahal_mu: Vec<f64>,
    mahal_cov_inv: Vec<Vec<f64>>,
}

/// Loaded, validated bundle
#[derive(Debug, Clone)]
pub struct StatisticalBundle {
    format_version: u32,
    scaler: StandardScaler,
    thresholds: Thresholds,
    mahal_mu: Array1<f64>,
    mahal_cov_inv: Array2<f64>,
    fingerprint: Option<String>,
}

/// Operator-facing description of the loaded bundle
#[derive(Debug, Clone, Serialize)]
pub struct BundleSummary {
    pub format_version: u32,
    pub n_features: usize,
    pub t1: f64,
    pub t2: f64,
    pub fingerprint: Option<String>,
}

impl StatisticalBundle {
    /// Assemble a bundle from already-decoded parts
    pub fn new(
        scaler: StandardScaler,
        thresholds: Thresholds,
        mahal_mu: Vec<f64>,
        mahal_cov_inv: Vec<Vec<f64>>,
    ) -> Result<Self, BundleError> {
        if !thresholds.t1.is_finite() || !thresholds.t2.is_finite() {
            return Err(BundleError::Invalid("thresholds T1/T2 must be finite".to_string()));
        }
        if !thresholds.is_ordered() {
            tracing::warn!(
                "Bundle thresholds are not ascending (T1={}, T2={}); SUSPICIOUS band is empty",
                thresholds.t1,
                thresholds.t2
            );
        }

        let mahal_mu = Array1::from(mahal_mu);
        let mahal_cov_inv = square_matrix(mahal_cov_inv, mahal_mu.len())?;
        if mahal_mu.iter().chain(mahal_cov_inv.iter()).any(|v| !v.is_finite()) {
            return Err(BundleError::Invalid("mahalanobis parameters must be finite".to_string()));
        }

        Ok(Self {
            format_version: SUPPORTED_FORMAT_VERSION,
            scaler,
            thresholds,
            mahal_mu,
            mahal_cov_inv,
            fingerprint: None,
        })
    }

    /// Decode a bundle from raw artifact bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, BundleError> {
        let file: BundleFile = serde_json::from_slice(bytes)?;

        if file.format_version > SUPPORTED_FORMAT_VERSION {
            return Err(BundleError::UnsupportedVersion {
                found: file.format_version,
                supported: SUPPORTED_FORMAT_VERSION,
            });
        }

        let scaler = StandardScaler::new(file.scaler.mean, file.scaler.scale)?;
        let mut bundle = Self::new(
            scaler,
            Thresholds::new(file.t1, file.t2),
            file.mahal_mu,
            file.mahal_cov_inv,
        )?;
        bundle.format_version = file.format_version;
        bundle.fingerprint = Some(fingerprint(bytes));

        Ok(bundle)
    }

    /// Load bundle from disk
    pub fn load(path: &Path) -> Result<Self, BundleError> {
        tracing::info!("Loading statistical bundle from: {}", path.display());

        let bytes = fs::read(path).map_err(|source| BundleError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_slice(&bytes)
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn mahal_mu(&self) -> &Array1<f64> {
        &self.mahal_mu
    }

    pub fn mahal_cov_inv(&self) -> &Array2<f64> {
        &self.mahal_cov_inv
    }

    pub fn summary(&self) -> BundleSummary {
        BundleSummary {
            format_version: self.format_version,
            n_features: self.scaler.n_features(),
            t1: self.thresholds.t1,
            t2: self.thresholds.t2,
            fingerprint: self.fingerprint.clone(),
        }
    }
}

fn square_matrix(rows: Vec<Vec<f64>>, side: usize) -> Result<Array2<f64>, BundleError> {
    if rows.len() != side || rows.iter().any(|r| r.len() != side) {
        return Err(BundleError::Invalid(format!(
            "mahal_cov_inv must be {}x{} to match mahal_mu",
            side, side
        )));
    }

    let flat: Vec<f64> = rows.into_iter().flatten().collect();
    Array2::from_shape_vec((side, side), flat)
        .map_err(|e| BundleError::Invalid(format!("mahal_cov_inv shape error: {}", e)))
}

/// SHA-256 of the artifact bytes, hex encoded
fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
