//! Cohort REST API
//!
//! HTTP API layer for Cohort, built with Axum. This is the presentation
//! shell: handlers parse DTOs, call into the core components, push
//! notifications, and serialize results. No business logic lives here.
//!
//! # Endpoints
//!
//! ## Participants
//! - `GET /api/v1/participants` - List, with optional status/program filters
//! - `POST /api/v1/participants` - Enroll a new participant
//! - `PUT /api/v1/participants/:id` - Update a participant
//! - `DELETE /api/v1/participants/:id` - Delete a participant
//!
//! ## Dashboard & Programs
//! - `GET /api/v1/dashboard` - Metrics, metric cards, activity feed
//! - `GET /api/v1/programs` - Per-program enrollment rollup
//!
//! ## Notifications
//! - `GET /api/v1/notifications` - Active notifications
//! - `DELETE /api/v1/notifications/:id` - Dismiss early
//!
//! ## Profile
//! - `GET /api/v1/profile` - Signed-in admin profile
//! - `PUT /api/v1/profile` - Update the profile
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Participant routes
        .route("/participants", get(routes::participants::list_participants))
        .route("/participants", post(routes::participants::enroll_participant))
        .route("/participants/:id", put(routes::participants::update_participant))
        .route("/participants/:id", delete(routes::participants::delete_participant))
        // Dashboard and program routes
        .route("/dashboard", get(routes::dashboard::get_dashboard))
        .route("/programs", get(routes::programs::get_program_rollup))
        // Notification routes
        .route("/notifications", get(routes::notifications::list_notifications))
        .route("/notifications/:id", delete(routes::notifications::dismiss_notification))
        // Profile routes
        .route("/profile", get(routes::profile::get_profile))
        .route("/profile", put(routes::profile::update_profile));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Cohort API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Cohort API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
