//! Inference Engine
//!
//! Maps a (time_steps x num_features) sensor window to a decision record:
//!
//! 1. standardize with the bundle scaler
//! 2. score = mean(|standardized|) over every element
//! 3. classify against T1 / T2
//! 4. risk = floor(min(score * 20, 100))
//! 5. round score to 4 decimals for display
//!
//! The mean-absolute-standardized score is the deployed behavior. The
//! Mahalanobis parameters in the bundle are intentionally left out of it.

use std::path::Path;

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bundle::{BundleError, BundleSummary, StatisticalBundle};
use super::threshold::{risk_score, round_score, Confidence, Decision};

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("X has {actual} features, but the scaler is expecting {expected} features as input.")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("sensor_data contains no values to score.")]
    EmptyMatrix,

    #[error("anomaly score is not finite")]
    NonFiniteScore,
}

impl ScoringError {
    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. } | Self::EmptyMatrix)
    }
}

/// Output of one scoring call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub final_decision: Decision,
    pub risk_score: u8,
    /// Mean absolute standardized value. Not a Mahalanobis distance despite
    /// the field name, which dashboard clients depend on.
    pub mahal_score: f64,
    pub confidence: Confidence,
}

/// Stateless scorer over an immutable bundle
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bundle: StatisticalBundle,
}

impl ScoringEngine {
    pub fn new(bundle: StatisticalBundle) -> Self {
        Self { bundle }
    }

    /// Load the bundle artifact and build an engine around it
    pub fn load(path: &Path) -> Result<Self, BundleError> {
        StatisticalBundle::load(path).map(Self::new)
    }

    pub fn summary(&self) -> BundleSummary {
        self.bundle.summary()
    }

    /// Raw anomaly score for a window
    pub fn score(&self, matrix: ArrayView2<f64>) -> Result<f64, ScoringError> {
        let standardized = self.bundle.scaler().transform(matrix)?;

        let score = standardized
            .mapv(f64::abs)
            .mean()
            .ok_or(ScoringError::EmptyMatrix)?;

        if !score.is_finite() {
            return Err(ScoringError::NonFiniteScore);
        }

        Ok(score)
    }

    pub fn score_and_classify(
        &self,
        matrix: ArrayView2<f64>,
    ) -> Result<DecisionRecord, ScoringError> {
        let score = self.score(matrix)?;
        let (final_decision, confidence) = self.bundle.thresholds().classify(score);

        Ok(DecisionRecord {
            final_decision,
            risk_score: risk_score(score),
            mahal_score: round_score(score),
            confidence,
        })
    }
}
