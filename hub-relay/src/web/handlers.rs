//! Forward-action endpoint handlers.
//!
//! The forward-actions handler only:
//! 1. Reads the body as text
//! 2. Notifies the local listener
//! 3. Schedules the fan-out and returns 200 immediately
//!
//! Delivery to subscribers happens in the background pool.

use std::sync::Arc;

use axum::{
    extract::{rejection::StringRejection, DefaultBodyLimit, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use crate::forward::{ForwardChain, ForwardPool};
use crate::listener::ForwardActionListener;
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chain: ForwardChain,
    pub listener: Arc<dyn ForwardActionListener>,
    pub pool: ForwardPool,
}

impl AppState {
    pub fn new(config: Config, listener: Arc<dyn ForwardActionListener>, pool: ForwardPool) -> Self {
        Self {
            chain: ForwardChain::new(config.forward_chain.clone()),
            config: Arc::new(config),
            listener,
            pool,
        }
    }
}

/// Build the router: health check plus the forward-actions route.
///
/// Bodies are read in full whatever their size; axum's 2 MB default is lifted.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(&state.config.forward_actions_path, post(forward_actions))
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Forward Actions
// =============================================================================

/// Forward-actions endpoint.
///
/// Always answers 200 with an empty body. A body that cannot be read as text
/// is logged and dropped: no listener call, no forwarding.
pub async fn forward_actions(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> StatusCode {
    let json = match body {
        Ok(json) => json,
        Err(rejection) => {
            warn!(
                status_code = rejection.status().as_u16(),
                error = %rejection.body_text(),
                "forward_action_body_unreadable"
            );
            return StatusCode::OK;
        }
    };

    debug!(payload = %json, "forward_action_handle");

    state.listener.post(&json);

    // Handle dropped on purpose: the hub never waits on subscribers.
    let _ = state.pool.dispatch(&state.chain, json);

    StatusCode::OK
}
