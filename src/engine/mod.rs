//! Scoring Engine - Sensor Window Risk Inference
//!
//! Owns the fitted scaler and the two decision thresholds loaded from the
//! statistical bundle. The engine is immutable after construction and can be
//! shared across request handlers without locking.

pub mod bundle;
pub mod inference;
pub mod scaler;
pub mod threshold;

// Re-export common types
pub use bundle::{BundleError, BundleSummary, StatisticalBundle};
pub use inference::{DecisionRecord, ScoringEngine, ScoringError};
pub use scaler::StandardScaler;
pub use threshold::{Confidence, Decision, Thresholds};
