//! Program Routes
//!
//! - GET /api/v1/programs - Enrollment rollup per program
//!
//! The rollup always lists every program in the fixed enumeration, including
//! those with zero enrollees, so program views stay complete.

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::ProgramRollupResponse;
use crate::api::state::AppState;
use crate::views::compute_program_rollup;

/// GET /api/v1/programs
pub async fn get_program_rollup(
    State(state): State<Arc<AppState>>,
) -> Json<ProgramRollupResponse> {
    let records = state.roster.list().await;

    Json(ProgramRollupResponse {
        programs: compute_program_rollup(&records),
    })
}
