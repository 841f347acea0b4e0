//! Cohort Roster Store
//!
//! The authoritative in-memory collection of participant records.
//!
//! Write path: enroll → assign id/timestamp/avatar → prepend
//! Read path: list → cloned snapshot in store order (newest first)
//!
//! Thread-safe via Tokio's async RwLock; there is a single logical writer
//! (the request handlers), so no further coordination is needed.

use crate::store::types::{avatar_url, NewParticipant, Participant, ParticipantUpdate};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory store of participant records, newest-first
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Arc<RwLock<Vec<Participant>>>,
}

impl RosterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records (seed data)
    ///
    /// Records are kept in the given order, which is expected to already be
    /// newest-first.
    pub fn with_records(records: Vec<Participant>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Enroll a new participant
    ///
    /// Assigns a fresh unique id and the current timestamp, derives the
    /// avatar from the name, and prepends the record so the most recent
    /// enrollment is listed first. Never fails for well-formed input; field
    /// validation is the caller's responsibility.
    pub async fn enroll(&self, data: NewParticipant) -> Participant {
        let record = Participant {
            id: Uuid::new_v4().to_string(),
            avatar: avatar_url(&data.name),
            name: data.name,
            email: data.email,
            program: data.program,
            payment_status: data.payment_status,
            attendance: data.attendance,
            created_at: Utc::now(),
        };

        let mut records = self.records.write().await;
        records.insert(0, record.clone());

        tracing::debug!(participant_id = %record.id, name = %record.name, "Enrolled participant");
        record
    }

    /// Merge the given fields into the record with this id
    ///
    /// The id and creation timestamp are preserved and the record keeps its
    /// position in the list. Returns `None` without modifying anything if no
    /// record has the id; the caller decides whether that is worth surfacing.
    pub async fn update(&self, id: &str, update: ParticipantUpdate) -> Option<Participant> {
        let mut records = self.records.write().await;
        let record = records.iter_mut().find(|r| r.id == id)?;
        update.apply(record);

        tracing::debug!(participant_id = %id, "Updated participant");
        Some(record.clone())
    }

    /// Remove the record with this id if present
    ///
    /// Removing a non-existent id is a no-op. Returns whether a record was
    /// actually removed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id != id);
        let removed = records.len() < before;

        if removed {
            tracing::debug!(participant_id = %id, "Removed participant");
        }
        removed
    }

    /// Get a snapshot of all records in store order (newest first)
    pub async fn list(&self) -> Vec<Participant> {
        self.records.read().await.clone()
    }

    /// Number of records currently in the store
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::types::{PaymentStatus, Program};
    use std::collections::HashSet;

    fn new_participant(name: &str, program: Program) -> NewParticipant {
        NewParticipant {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            program,
            payment_status: PaymentStatus::Paid,
            attendance: 90,
        }
    }

    #[tokio::test]
    async fn test_enroll_assigns_identity() {
        let store = RosterStore::new();
        let before = Utc::now();
        let record = store
            .enroll(new_participant("Jane Doe", Program::Tech))
            .await;

        assert!(!record.id.is_empty());
        assert!(record.created_at >= before);
        assert_eq!(record.avatar, "https://picsum.photos/seed/Jane%20Doe/100/100");
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_newest_first_ordering() {
        let store = RosterStore::new();
        let a = store.enroll(new_participant("Alice", Program::Lead)).await;
        let b = store.enroll(new_participant("Bob", Program::Biz)).await;

        let records = store.list().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, b.id);
        assert_eq!(records[1].id, a.id);
    }

    #[tokio::test]
    async fn test_ids_stay_unique() {
        let store = RosterStore::new();
        for i in 0..20 {
            store
                .enroll(new_participant(&format!("P{}", i), Program::Arts))
                .await;
        }
        store.remove(&store.list().await[5].id.clone()).await;
        store.enroll(new_participant("P20", Program::Tech)).await;

        let ids: HashSet<String> = store.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 20);
    }

    #[tokio::test]
    async fn test_update_preserves_id_and_timestamp() {
        let store = RosterStore::new();
        let original = store.enroll(new_participant("Jane Doe", Program::Tech)).await;

        let updated = store
            .update(
                &original.id,
                ParticipantUpdate::new()
                    .name("Jane Smith")
                    .payment_status(PaymentStatus::Certificate),
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.name, "Jane Smith");
        assert_eq!(updated.payment_status, PaymentStatus::Certificate);
        assert_eq!(updated.email, original.email);
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let store = RosterStore::new();
        store.enroll(new_participant("Alice", Program::Lead)).await;
        let b = store.enroll(new_participant("Bob", Program::Biz)).await;
        store.enroll(new_participant("Cara", Program::Arts)).await;

        store
            .update(&b.id, ParticipantUpdate::new().attendance(50))
            .await
            .unwrap();

        let records = store.list().await;
        assert_eq!(records[1].id, b.id);
        assert_eq!(records[1].attendance, 50);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let store = RosterStore::new();
        store.enroll(new_participant("Alice", Program::Lead)).await;
        let before = store.list().await;

        let result = store
            .update("missing", ParticipantUpdate::new().attendance(10))
            .await;

        assert!(result.is_none());
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let store = RosterStore::new();
        let record = store.enroll(new_participant("Alice", Program::Lead)).await;
        store.enroll(new_participant("Bob", Program::Biz)).await;

        assert!(store.remove(&record.id).await);
        assert_eq!(store.len().await, 1);

        // Removing twice is equivalent to removing once
        assert!(!store.remove(&record.id).await);
        assert_eq!(store.len().await, 1);

        assert!(!store.remove("missing").await);
        assert_eq!(store.len().await, 1);
    }
}
