//! HTTP API Layer
//!
//! This crate exposes claims triage over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for triage, rule listing and health
//! - **Middleware**: Request id propagation, tracing, audit logging
//! - **DTOs**: Response shapes that are not domain types
//! - **Error Handling**: Consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(triage, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use domain_triage::ClaimTriage;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, rules, triage};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub triage: Arc<ClaimTriage>,
    pub config: Arc<ApiConfig>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `triage` - Triage service, shared read-only by all requests
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(triage: ClaimTriage, config: ApiConfig) -> Router {
    let state = AppState {
        triage: Arc::new(triage),
        config: Arc::new(config),
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let api_routes = Router::new()
        .route("/claims/triage", post(triage::triage_claim))
        .route("/rules", get(rules::list_rules))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
