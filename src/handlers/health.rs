//! Liveness and readiness handlers

use axum::{extract::State, Json};
use serde::Serialize;

use crate::engine::BundleSummary;
use crate::models::MessageResponse;
use crate::AppState;

pub const LIVENESS_MESSAGE: &str = "HydroVigil Backend Running";

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    bundle: BundleSummary,
}

/// Static acknowledgement, independent of bundle state
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        bundle: state.engine.summary(),
    })
}
