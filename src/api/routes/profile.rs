//! Profile Routes
//!
//! - GET /api/v1/profile - The signed-in admin profile
//! - PUT /api/v1/profile - Update the profile
//!
//! The profile is independent of the participant roster; updating it never
//! touches the record store.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::UpdateProfileRequest;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::notify::Severity;
use crate::store::types::UserProfile;

/// GET /api/v1/profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<UserProfile> {
    Json(state.profile.read().await.clone())
}

/// PUT /api/v1/profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Json<UserProfile>> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }
    }

    let updated = {
        let mut profile = state.profile.write().await;
        if let Some(name) = req.name {
            profile.name = name;
        }
        if let Some(email) = req.email {
            profile.email = email;
        }
        if let Some(role) = req.role {
            profile.role = role;
        }
        if let Some(avatar) = req.avatar {
            profile.avatar = avatar;
        }
        profile.clone()
    };

    state
        .notifications
        .push("Profile updated successfully.", Severity::Success)
        .await;

    tracing::info!(name = %updated.name, "Updated admin profile");

    Ok(Json(updated))
}
