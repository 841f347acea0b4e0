//! Notification Routes
//!
//! - GET /api/v1/notifications - Active (unexpired) notifications
//! - DELETE /api/v1/notifications/:id - Dismiss a notification early
//!
//! Dismissal is idempotent and always answers 204; a message that already
//! expired on its own is indistinguishable from one that never existed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::NotificationListResponse;
use crate::api::state::AppState;

/// GET /api/v1/notifications
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
) -> Json<NotificationListResponse> {
    let notifications = state.notifications.active().await;

    Json(NotificationListResponse {
        total: notifications.len(),
        notifications,
    })
}

/// DELETE /api/v1/notifications/:id
pub async fn dismiss_notification(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> StatusCode {
    state.notifications.dismiss(&id).await;
    StatusCode::NO_CONTENT
}
