//! Transient Notification Queue
//!
//! An ordered set of short-lived user-facing messages. Each pushed message
//! gets a one-shot tokio task that removes it after the configured delay, so
//! expiry needs no polling. Explicit dismissal removes the message right away
//! and aborts the pending expiry task; removal is idempotent either way, so a
//! late-firing timer is harmless.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Default lifetime of a notification before auto-expiry
pub const DEFAULT_TTL: Duration = Duration::from_millis(4000);

/// Visual severity tier of a notification
///
/// `Error` is a styling tag, not a failure signal; deletes are tagged with it
/// purely for emphasis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// A short-lived user-facing message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Unique identifier (UUIDv4)
    pub id: String,
    /// Message text
    pub message: String,
    /// Visual severity tier
    pub severity: Severity,
    /// Creation timestamp; the expiry deadline is this plus the queue TTL
    pub created_at: DateTime<Utc>,
}

/// A queued notification together with its pending expiry task
struct ActiveEntry {
    notification: Notification,
    expiry: JoinHandle<()>,
}

/// Queue of active notifications with automatic expiry
///
/// Preserves insertion order for display: the newest message is appended at
/// the end.
pub struct NotificationQueue {
    entries: Arc<RwLock<Vec<ActiveEntry>>>,
    ttl: Duration,
}

impl NotificationQueue {
    /// Create a queue with the default 4-second message lifetime
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a queue with a custom message lifetime
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            ttl,
        }
    }

    /// Push a new message onto the queue
    ///
    /// The message becomes visible immediately and is removed automatically
    /// once the queue's TTL elapses, unless dismissed earlier.
    pub async fn push(&self, message: impl Into<String>, severity: Severity) -> Notification {
        let notification = Notification {
            id: Uuid::new_v4().to_string(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
        };

        let expiry = self.spawn_expiry(notification.id.clone());

        self.entries.write().await.push(ActiveEntry {
            notification: notification.clone(),
            expiry,
        });

        tracing::debug!(
            notification_id = %notification.id,
            severity = ?severity,
            "Notification pushed"
        );
        notification
    }

    /// Dismiss a message before its expiry
    ///
    /// Removes the message immediately and cancels the pending expiry task.
    /// Dismissing an unknown or already-removed id is a no-op.
    pub async fn dismiss(&self, id: &str) {
        let mut entries = self.entries.write().await;
        if let Some(pos) = entries.iter().position(|e| e.notification.id == id) {
            let entry = entries.remove(pos);
            entry.expiry.abort();
            tracing::debug!(notification_id = %id, "Notification dismissed");
        }
    }

    /// Snapshot of active messages in insertion order (newest last)
    pub async fn active(&self) -> Vec<Notification> {
        self.entries
            .read()
            .await
            .iter()
            .map(|e| e.notification.clone())
            .collect()
    }

    /// Number of active messages
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no messages are active
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Spawn the one-shot expiry task for a message
    fn spawn_expiry(&self, id: String) -> JoinHandle<()> {
        let entries = Arc::clone(&self.entries);
        let ttl = self.ttl;

        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;

            let mut entries = entries.write().await;
            // Idempotent: the entry may already be gone via dismiss
            if let Some(pos) = entries.iter().position(|e| e.notification.id == id) {
                entries.remove(pos);
                tracing::debug!(notification_id = %id, "Notification expired");
            }
        })
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_push_makes_message_visible_immediately() {
        let queue = NotificationQueue::with_ttl(Duration::from_millis(200));
        let pushed = queue.push("Enrolled Jane Doe successfully.", Severity::Success).await;

        let active = queue.active().await;
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, pushed.id);
        assert_eq!(active[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn test_message_expires_after_ttl() {
        let queue = NotificationQueue::with_ttl(Duration::from_millis(50));
        queue.push("Participant record deleted.", Severity::Error).await;

        assert_eq!(queue.len().await, 1);
        sleep(Duration::from_millis(150)).await;
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn test_insertion_order_is_preserved() {
        let queue = NotificationQueue::with_ttl(Duration::from_secs(10));
        let first = queue.push("first", Severity::Success).await;
        let second = queue.push("second", Severity::Success).await;

        let active = queue.active().await;
        assert_eq!(active[0].id, first.id);
        assert_eq!(active[1].id, second.id);
    }

    #[tokio::test]
    async fn test_dismiss_before_expiry() {
        let queue = NotificationQueue::with_ttl(Duration::from_millis(100));
        let pushed = queue.push("Updated Jane successfully.", Severity::Success).await;
        let kept = queue.push("still here", Severity::Success).await;

        queue.dismiss(&pushed.id).await;
        assert_eq!(queue.len().await, 1);
        assert_eq!(queue.active().await[0].id, kept.id);

        // The dismissed message's expiry deadline passing has no further effect
        sleep(Duration::from_millis(60)).await;
        assert_eq!(queue.active().await.iter().filter(|n| n.id == pushed.id).count(), 0);
    }

    #[tokio::test]
    async fn test_dismiss_is_idempotent() {
        let queue = NotificationQueue::with_ttl(Duration::from_secs(10));
        let pushed = queue.push("once", Severity::Success).await;

        queue.dismiss(&pushed.id).await;
        queue.dismiss(&pushed.id).await;
        queue.dismiss("never-existed").await;

        assert!(queue.is_empty().await);
    }
}
