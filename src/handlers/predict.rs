//! Prediction handler

use axum::{extract::State, Json};

use crate::middleware::json::ValidatedJson;
use crate::models::{PredictionRequest, PredictionResponse, SensorMatrix};
use crate::{AppResult, AppState};

/// Score a sensor window
///
/// Expected payload:
///
/// ```json
/// { "sensor_data": [[f1, f2, f3, ...], [f1, f2, f3, ...], ...] }
/// ```
pub async fn predict(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<PredictionRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let matrix = SensorMatrix::from_rows(&req.sensor_data)?;

    tracing::debug!(
        "Scoring window: {} timesteps x {} features",
        matrix.time_steps(),
        matrix.num_features()
    );

    let result = state.engine.score_and_classify(matrix.view())?;

    tracing::debug!(
        "Decision: {:?} (risk {}, score {})",
        result.final_decision,
        result.risk_score,
        result.mahal_score
    );

    Ok(Json(result))
}
