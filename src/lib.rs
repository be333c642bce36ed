//! HydroVigil Backend
//!
//! Single-endpoint inference service. A dashboard POSTs a window of sensor
//! readings; the service standardizes it with a pre-fitted scaler, computes an
//! anomaly score and returns one of three risk tiers.
//!
//! ```text
//!  POST /predict
//!       │
//!       ▼
//!  ValidatedJson ──► SensorMatrix ──► ScoringEngine ──► DecisionRecord
//!   (422 body)        (422 shape)      (422 features)
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, compression::CompressionLayer, trace::TraceLayer};

pub use config::Config;
pub use engine::ScoringEngine;
pub use error::{AppError, AppResult};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ScoringEngine>,
}

impl AppState {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Create the main router with all routes
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/", get(handlers::health::home))
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .layer(CatchPanicLayer::custom(middleware::panic::handle_panic))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors::cors_layer(&config.cors_origins))
        .with_state(state)
}
