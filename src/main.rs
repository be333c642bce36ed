//! HydroVigil Backend Server
//!
//! Loads the statistical bundle once, then serves `/predict` until shutdown.
//! A bundle that cannot be loaded aborts startup before the listener binds.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hydrovigil::{AppState, Config, ScoringEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    init_tracing(&config);

    tracing::info!("HydroVigil Backend starting...");

    let engine = ScoringEngine::load(&config.bundle_path).with_context(|| {
        format!("failed to load statistical bundle from {}", config.bundle_path.display())
    })?;

    let summary = engine.summary();
    tracing::info!(
        "Bundle v{} loaded: {} features, T1={}, T2={}, sha256={}",
        summary.format_version,
        summary.n_features,
        summary.t1,
        summary.t2,
        summary.fingerprint.as_deref().unwrap_or("-")
    );

    let app = hydrovigil::create_router(AppState::new(engine), &config);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "hydrovigil=debug,tower_http=debug".into());

    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
