//! Transient Notification Queue
//!
//! - **queue**: Self-expiring user-facing messages with explicit
//!   cancel-on-dismiss

pub mod queue;

pub use queue::{Notification, NotificationQueue, Severity, DEFAULT_TTL};
