//! Dashboard Routes
//!
//! - GET /api/v1/dashboard - Live metrics, metric cards, and activity feed
//!
//! Everything numeric is recomputed from the current roster on each request;
//! the activity feed is the read-only seed collection.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::DashboardResponse;
use crate::api::state::AppState;
use crate::views::{compute_metrics, metric_cards};

/// GET /api/v1/dashboard
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let records = state.roster.list().await;

    Json(DashboardResponse {
        metrics: compute_metrics(&records),
        cards: metric_cards(&records),
        activity: state.activities.as_ref().clone(),
    })
}
