//! Participant Routes
//!
//! CRUD endpoints for the participant roster.
//!
//! - GET /api/v1/participants - List participants, optionally filtered
//! - POST /api/v1/participants - Enroll a new participant
//! - PUT /api/v1/participants/:id - Update a participant
//! - DELETE /api/v1/participants/:id - Delete a participant
//!
//! Each mutation pushes a notification describing the outcome. The delete
//! notification uses the "error" severity tier as a labeling convention for
//! visual emphasis; the operation itself cannot fail.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::api::dto::{
    EnrollRequest, ListParticipantsQuery, ParticipantListResponse, ParticipantResponse,
    UpdateParticipantRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::notify::Severity;
use crate::query::FilterSpec;
use crate::store::types::{NewParticipant, ParticipantUpdate, PaymentStatus, Program};

/// GET /api/v1/participants
///
/// List the roster in store order (newest first), optionally filtered by
/// payment-status bucket and/or program.
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListParticipantsQuery>,
) -> ApiResult<Json<ParticipantListResponse>> {
    let filter = parse_filter(&query)?;

    let records = state.roster.list().await;
    let filtered = filter.apply(&records);

    let participants: Vec<ParticipantResponse> =
        filtered.iter().map(ParticipantResponse::from).collect();

    Ok(Json(ParticipantListResponse {
        total: participants.len(),
        participants,
    }))
}

/// POST /api/v1/participants
///
/// Enroll a new participant. The store assigns the id, timestamp, and
/// avatar; this handler only validates the fields.
pub async fn enroll_participant(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EnrollRequest>,
) -> ApiResult<(StatusCode, Json<ParticipantResponse>)> {
    validate_enroll_request(&req)?;

    let data = NewParticipant {
        name: req.name.clone(),
        email: req.email,
        program: parse_program(&req.program)?,
        payment_status: parse_status(&req.payment_status)?,
        attendance: req.attendance,
    };

    let record = state.roster.enroll(data).await;

    state
        .notifications
        .push(
            format!("Enrolled {} successfully.", record.name),
            Severity::Success,
        )
        .await;

    tracing::info!(participant_id = %record.id, name = %record.name, "Enrolled participant");

    Ok((StatusCode::CREATED, Json(ParticipantResponse::from(&record))))
}

/// PUT /api/v1/participants/:id
///
/// Merge the supplied fields into an existing record. The store treats an
/// unknown id as a silent no-op; at the HTTP edge that surfaces as 404,
/// since a caller here can hold a stale id.
pub async fn update_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateParticipantRequest>,
) -> ApiResult<Json<ParticipantResponse>> {
    let update = parse_update(&req)?;

    let record = state
        .roster
        .update(&id, update)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("Participant with id {} not found", id)))?;

    state
        .notifications
        .push(
            format!("Updated {} successfully.", record.name),
            Severity::Success,
        )
        .await;

    tracing::info!(participant_id = %id, "Updated participant");

    Ok(Json(ParticipantResponse::from(&record)))
}

/// DELETE /api/v1/participants/:id
///
/// Remove a record. Deleting a non-existent id is a no-op; the response is
/// 204 either way.
pub async fn delete_participant(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let removed = state.roster.remove(&id).await;

    state
        .notifications
        .push("Participant record deleted.", Severity::Error)
        .await;

    tracing::info!(participant_id = %id, removed, "Delete participant requested");

    Ok(StatusCode::NO_CONTENT)
}

/// Validate an enroll request
fn validate_enroll_request(req: &EnrollRequest) -> ApiResult<()> {
    if req.name.trim().is_empty() {
        return Err(ApiError::Validation("Name cannot be empty".to_string()));
    }

    if req.email.trim().is_empty() {
        return Err(ApiError::Validation("Email cannot be empty".to_string()));
    }

    validate_attendance(req.attendance)
}

/// Validate an attendance percentage
fn validate_attendance(attendance: u8) -> ApiResult<()> {
    if attendance > 100 {
        return Err(ApiError::Validation(format!(
            "Attendance must be between 0 and 100, got {}",
            attendance
        )));
    }
    Ok(())
}

/// Build a filter spec from list query parameters
fn parse_filter(query: &ListParticipantsQuery) -> ApiResult<FilterSpec> {
    let mut filter = FilterSpec::new();

    if let Some(status) = &query.status {
        filter = filter.status(parse_status(status)?);
    }

    // "All" is the UI's no-filter sentinel
    if let Some(program) = &query.program {
        if !program.eq_ignore_ascii_case("all") {
            filter = filter.program(parse_program(program)?);
        }
    }

    Ok(filter)
}

/// Build a store update from an update request
fn parse_update(req: &UpdateParticipantRequest) -> ApiResult<ParticipantUpdate> {
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(ApiError::Validation("Name cannot be empty".to_string()));
        }
    }
    if let Some(attendance) = req.attendance {
        validate_attendance(attendance)?;
    }

    let mut update = ParticipantUpdate {
        name: req.name.clone(),
        email: req.email.clone(),
        attendance: req.attendance,
        ..Default::default()
    };

    if let Some(program) = &req.program {
        update.program = Some(parse_program(program)?);
    }
    if let Some(status) = &req.payment_status {
        update.payment_status = Some(parse_status(status)?);
    }

    Ok(update)
}

/// Parse a program string
fn parse_program(s: &str) -> ApiResult<Program> {
    match s.to_lowercase().as_str() {
        "lead" => Ok(Program::Lead),
        "biz" => Ok(Program::Biz),
        "tech" => Ok(Program::Tech),
        "arts" => Ok(Program::Arts),
        _ => Err(ApiError::Validation(format!(
            "Invalid program: {}. Use Lead, Biz, Tech, or Arts",
            s
        ))),
    }
}

/// Parse a payment-status string
fn parse_status(s: &str) -> ApiResult<PaymentStatus> {
    match s.to_lowercase().as_str() {
        "paid" => Ok(PaymentStatus::Paid),
        "certificate" => Ok(PaymentStatus::Certificate),
        "waitlist" => Ok(PaymentStatus::Waitlist),
        _ => Err(ApiError::Validation(format!(
            "Invalid payment status: {}. Use Paid, Certificate, or Waitlist",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_program() {
        assert!(matches!(parse_program("tech"), Ok(Program::Tech)));
        assert!(matches!(parse_program("LEAD"), Ok(Program::Lead)));
        assert!(parse_program("invalid").is_err());
    }

    #[test]
    fn test_parse_status() {
        assert!(matches!(parse_status("Paid"), Ok(PaymentStatus::Paid)));
        assert!(matches!(
            parse_status("WAITLIST"),
            Ok(PaymentStatus::Waitlist)
        ));
        assert!(parse_status("invalid").is_err());
    }

    #[test]
    fn test_parse_filter_all_sentinel() {
        let query = ListParticipantsQuery {
            status: None,
            program: Some("All".to_string()),
        };
        let filter = parse_filter(&query).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_parse_filter_combines_both() {
        let query = ListParticipantsQuery {
            status: Some("paid".to_string()),
            program: Some("tech".to_string()),
        };
        let filter = parse_filter(&query).unwrap();
        assert_eq!(filter.status, Some(PaymentStatus::Paid));
        assert_eq!(filter.program, Some(Program::Tech));
    }

    #[test]
    fn test_validate_enroll_request() {
        let valid = EnrollRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            program: "Tech".to_string(),
            payment_status: "Paid".to_string(),
            attendance: 90,
        };
        assert!(validate_enroll_request(&valid).is_ok());

        let empty_name = EnrollRequest {
            name: "  ".to_string(),
            ..valid.clone()
        };
        assert!(validate_enroll_request(&empty_name).is_err());

        let bad_attendance = EnrollRequest {
            attendance: 101,
            ..valid
        };
        assert!(validate_enroll_request(&bad_attendance).is_err());
    }

    #[test]
    fn test_parse_update_rejects_bad_fields() {
        let req = UpdateParticipantRequest {
            attendance: Some(150),
            ..Default::default()
        };
        assert!(parse_update(&req).is_err());

        let req = UpdateParticipantRequest {
            program: Some("unknown".to_string()),
            ..Default::default()
        };
        assert!(parse_update(&req).is_err());

        let req = UpdateParticipantRequest {
            payment_status: Some("certificate".to_string()),
            attendance: Some(100),
            ..Default::default()
        };
        let update = parse_update(&req).unwrap();
        assert_eq!(update.payment_status, Some(PaymentStatus::Certificate));
        assert_eq!(update.attendance, Some(100));
    }
}
