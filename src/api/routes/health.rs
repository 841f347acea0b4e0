//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe.
/// Returns 200 once the roster is readable; both components are in-process,
/// so a completed read is the whole check.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    let _ = state.roster.len().await;
    StatusCode::OK
}

/// GET /health
///
/// Full health status with component details. The roster and the
/// notification queue live in this process and cannot be down while the
/// handler runs, so the status is "healthy" whenever it answers at all.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let _ = state.roster.len().await;
    let _ = state.notifications.len().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        roster: "ok".to_string(),
        notifications: "ok".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
