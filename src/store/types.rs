//! Core data types for the Cohort record store
//!
//! This module defines the fundamental types used throughout the service:
//! - `Participant`: A single enrollment record
//! - `Program` and `PaymentStatus`: Classification enums
//! - `NewParticipant` and `ParticipantUpdate`: Store operation inputs
//! - `ActivityEntry` and `UserProfile`: Read-only collaborator data

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Program track a participant is enrolled in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Program {
    /// Leadership program
    Lead,
    /// Business program
    Biz,
    /// Technology program
    Tech,
    /// Arts program
    Arts,
}

impl Program {
    /// Get all programs for exhaustive iteration
    pub fn all() -> &'static [Program] {
        &[Program::Lead, Program::Biz, Program::Tech, Program::Arts]
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Program::Lead => write!(f, "Lead"),
            Program::Biz => write!(f, "Biz"),
            Program::Tech => write!(f, "Tech"),
            Program::Arts => write!(f, "Arts"),
        }
    }
}

/// Payment status bucket for a participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PaymentStatus {
    /// Fully paid enrollment
    Paid,
    /// Enrolled on a program certificate
    Certificate,
    /// Waiting for an open seat
    Waitlist,
}

impl PaymentStatus {
    /// Get all status buckets for exhaustive iteration
    pub fn all() -> &'static [PaymentStatus] {
        &[
            PaymentStatus::Paid,
            PaymentStatus::Certificate,
            PaymentStatus::Waitlist,
        ]
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Certificate => write!(f, "Certificate"),
            PaymentStatus::Waitlist => write!(f, "Waitlist"),
        }
    }
}

/// A single participant enrollment record
///
/// Owned exclusively by the `RosterStore`; consumers receive cloned
/// snapshots. `id` and `created_at` are store-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    /// Opaque unique identifier (UUIDv4, assigned by the store)
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Program track
    pub program: Program,
    /// Payment status bucket
    pub payment_status: PaymentStatus,
    /// Attendance percentage, 0-100
    pub attendance: u8,
    /// Enrollment timestamp (assigned by the store)
    pub created_at: DateTime<Utc>,
    /// Avatar URI, derived deterministically from the name
    pub avatar: String,
}

/// Input for enrolling a new participant
///
/// Identity fields (`id`, `created_at`, `avatar`) are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewParticipant {
    pub name: String,
    pub email: String,
    pub program: Program,
    pub payment_status: PaymentStatus,
    pub attendance: u8,
}

/// Partial update for an existing participant
///
/// Only supplied fields are merged; `id` and `created_at` are never touched.
#[derive(Debug, Clone, Default)]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub program: Option<Program>,
    pub payment_status: Option<PaymentStatus>,
    pub attendance: Option<u8>,
}

impl ParticipantUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set display name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder: set email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder: set program
    pub fn program(mut self, program: Program) -> Self {
        self.program = Some(program);
        self
    }

    /// Builder: set payment status
    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = Some(status);
        self
    }

    /// Builder: set attendance percentage
    pub fn attendance(mut self, attendance: u8) -> Self {
        self.attendance = Some(attendance);
        self
    }

    /// Merge supplied fields into an existing record
    pub fn apply(&self, record: &mut Participant) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(program) = self.program {
            record.program = program;
        }
        if let Some(status) = self.payment_status {
            record.payment_status = status;
        }
        if let Some(attendance) = self.attendance {
            record.attendance = attendance;
        }
    }
}

/// Derive an avatar URI deterministically from a display name
pub fn avatar_url(name: &str) -> String {
    format!(
        "https://picsum.photos/seed/{}/100/100",
        urlencoding::encode(name)
    )
}

/// A denormalized activity feed entry
///
/// Seed-only display data; not derived from record mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEntry {
    /// Unique identifier
    pub id: String,
    /// Name of the user the entry is about
    pub user_name: String,
    /// Human-readable action description
    pub action: String,
    /// Relative timestamp label (e.g. "2 mins ago")
    pub timestamp: String,
    /// Optional status tag for visual styling
    #[serde(default)]
    pub status: Option<PaymentStatus>,
    /// Avatar URI
    pub avatar: String,
}

/// The currently signed-in admin profile
///
/// Independent of the record store; has its own update operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_all_is_exhaustive() {
        assert_eq!(Program::all().len(), 4);
        assert_eq!(PaymentStatus::all().len(), 3);
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&Program::Tech).unwrap(), "\"Tech\"");
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Waitlist).unwrap(),
            "\"Waitlist\""
        );

        let restored: Program = serde_json::from_str("\"Arts\"").unwrap();
        assert_eq!(restored, Program::Arts);
    }

    #[test]
    fn test_avatar_url_encodes_name() {
        assert_eq!(
            avatar_url("Jane Doe"),
            "https://picsum.photos/seed/Jane%20Doe/100/100"
        );
        assert_eq!(
            avatar_url("sarah"),
            "https://picsum.photos/seed/sarah/100/100"
        );
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut record = Participant {
            id: "r1".to_string(),
            name: "Sarah Jenkins".to_string(),
            email: "sarah.j@example.com".to_string(),
            program: Program::Tech,
            payment_status: PaymentStatus::Paid,
            attendance: 95,
            created_at: Utc::now(),
            avatar: avatar_url("Sarah Jenkins"),
        };
        let created_at = record.created_at;

        let update = ParticipantUpdate::new()
            .payment_status(PaymentStatus::Certificate)
            .attendance(100);
        update.apply(&mut record);

        assert_eq!(record.name, "Sarah Jenkins");
        assert_eq!(record.payment_status, PaymentStatus::Certificate);
        assert_eq!(record.attendance, 100);
        assert_eq!(record.id, "r1");
        assert_eq!(record.created_at, created_at);
    }

    #[test]
    fn test_participant_serialization() {
        let record = Participant {
            id: "r1".to_string(),
            name: "Emily Chen".to_string(),
            email: "emily.c@example.com".to_string(),
            program: Program::Biz,
            payment_status: PaymentStatus::Waitlist,
            attendance: 45,
            created_at: Utc::now(),
            avatar: avatar_url("Emily Chen"),
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: Participant = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }
}
