//! Claims Triage - API Server Binary
//!
//! This binary starts the HTTP API server for claim triage.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-triage-api
//!
//! # Override settings from the environment
//! TRIAGE_PORT=9090 TRIAGE_RULES__HIGH_CLAIM_AMOUNT=7500 cargo run --bin claims-triage-api
//! ```
//!
//! # Environment Variables
//!
//! * `TRIAGE_HOST` - Server host (default: 0.0.0.0)
//! * `TRIAGE_PORT` - Server port (default: 8080)
//! * `TRIAGE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `TRIAGE_LOG_JSON` - Emit JSON log lines (default: false)
//! * `TRIAGE_RULES__*` - Rule thresholds, e.g. `TRIAGE_RULES__NEW_POLICY_DAYS`
//!
//! Settings may also come from `config/triage.toml`.

use std::net::SocketAddr;

use anyhow::Context;
use domain_triage::ClaimTriage;
use interface_api::{config::ApiConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the API server.
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded or is invalid
/// - Server fails to bind to the configured address
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    init_tracing(&config.log_level, config.log_json);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        new_policy_days = config.rules.new_policy_days,
        high_claim_amount = %config.rules.high_claim_amount,
        prior_claims_limit = config.rules.prior_claims_limit,
        min_supporting_photos = config.rules.min_supporting_photos,
        "Starting Claims Triage API Server"
    );

    let triage = ClaimTriage::with_thresholds(config.rules.clone())?;

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid listen address {}", config.server_addr()))?;

    let app = create_router(triage, config);

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
