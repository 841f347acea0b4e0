//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use crate::notify::Notification;
use crate::store::types::{ActivityEntry, Participant};
use crate::views::{DashboardMetrics, MetricCardData, ProgramSummary};
use serde::{Deserialize, Serialize};

// ============================================
// PARTICIPANT DTOs
// ============================================

/// Enroll request
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollRequest {
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Program track: Lead, Biz, Tech, or Arts
    pub program: String,
    /// Payment status: Paid, Certificate, or Waitlist
    pub payment_status: String,
    /// Attendance percentage, 0-100
    #[serde(default)]
    pub attendance: u8,
}

/// Partial update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateParticipantRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub attendance: Option<u8>,
}

/// Query parameters for the participant list
///
/// Both filters may be supplied at once; they AND-combine. The UI convention
/// of clearing one when the other is set lives in the client, not here.
#[derive(Debug, Default, Deserialize)]
pub struct ListParticipantsQuery {
    /// Payment-status bucket filter
    #[serde(default)]
    pub status: Option<String>,
    /// Program filter; "All" is accepted as a no-filter sentinel
    #[serde(default)]
    pub program: Option<String>,
}

/// A single participant record
#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub program: String,
    pub payment_status: String,
    pub attendance: u8,
    /// ISO-8601 enrollment timestamp
    pub created_at: String,
    pub avatar: String,
}

impl From<&Participant> for ParticipantResponse {
    fn from(record: &Participant) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            program: record.program.to_string(),
            payment_status: record.payment_status.to_string(),
            attendance: record.attendance,
            created_at: record.created_at.to_rfc3339(),
            avatar: record.avatar.clone(),
        }
    }
}

/// Participant list response
#[derive(Debug, Serialize)]
pub struct ParticipantListResponse {
    pub total: usize,
    pub participants: Vec<ParticipantResponse>,
}

// ============================================
// DASHBOARD / PROGRAM DTOs
// ============================================

/// Dashboard response: live metrics plus the seed activity feed
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub metrics: DashboardMetrics,
    pub cards: Vec<MetricCardData>,
    pub activity: Vec<ActivityEntry>,
}

/// Program rollup response
#[derive(Debug, Serialize)]
pub struct ProgramRollupResponse {
    pub programs: Vec<ProgramSummary>,
}

// ============================================
// NOTIFICATION DTOs
// ============================================

/// Active notification list response
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub total: usize,
    pub notifications: Vec<Notification>,
}

// ============================================
// PROFILE DTOs
// ============================================

/// Profile update request; omitted fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub roster: String,
    pub notifications: String,
    pub uptime_seconds: u64,
    pub version: String,
}
