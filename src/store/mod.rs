//! Cohort Record Store
//!
//! This module provides the authoritative in-memory participant collection:
//!
//! - **types**: Core data structures (Participant, Program, PaymentStatus)
//! - **roster**: The store itself with enroll/update/remove/list operations
//!
//! # Example
//!
//! ```rust,no_run
//! use cohort::store::{NewParticipant, PaymentStatus, Program, RosterStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = RosterStore::new();
//!
//!     let record = store
//!         .enroll(NewParticipant {
//!             name: "Jane Doe".to_string(),
//!             email: "jane@example.com".to_string(),
//!             program: Program::Tech,
//!             payment_status: PaymentStatus::Paid,
//!             attendance: 90,
//!         })
//!         .await;
//!
//!     let records = store.list().await;
//!     assert_eq!(records[0].id, record.id);
//! }
//! ```

pub mod roster;
pub mod types;

// Re-export commonly used types
pub use roster::RosterStore;
pub use types::{
    avatar_url, ActivityEntry, NewParticipant, Participant, ParticipantUpdate, PaymentStatus,
    Program, UserProfile,
};
