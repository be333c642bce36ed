//! Prediction payloads

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use crate::engine::DecisionRecord as PredictionResponse;

/// Body of `POST /predict`
///
/// Rows are kept as raw JSON so that 1D, 3D and ragged inputs reach the
/// shape validator instead of failing inside the deserializer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PredictionRequest {
    #[validate(length(min = 1, message = "sensor_data must contain at least 1 row."))]
    pub sensor_data: Vec<serde_json::Value>,
}

/// Static acknowledgement for the liveness probe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
