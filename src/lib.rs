//! # Cohort
//!
//! Participant Enrollment Management - an in-memory admin service for
//! tracking program participants, their payment status, and attendance.
//!
//! ## Features
//!
//! - **In-memory roster**: enroll, update, remove, and list participant
//!   records with store-assigned identity
//! - **Live derived views**: dashboard metrics and per-program rollups,
//!   recomputed from the roster on every read
//! - **Stable filtering**: AND-combining status/program filters that never
//!   reorder results
//! - **Self-expiring notifications**: per-message one-shot expiry with
//!   explicit cancel-on-dismiss
//!
//! ## Modules
//!
//! - [`store`]: The participant record store and core data types
//! - [`views`]: Derived-view engine (metrics, rollups)
//! - [`query`]: Filter/query layer
//! - [`notify`]: Transient notification queue
//! - [`api`]: REST API shell with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cohort::store::{NewParticipant, PaymentStatus, Program, RosterStore};
//! use cohort::query::FilterSpec;
//! use cohort::views::compute_metrics;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = RosterStore::new();
//!
//!     // Enroll a participant
//!     store
//!         .enroll(NewParticipant {
//!             name: "Jane Doe".to_string(),
//!             email: "jane@example.com".to_string(),
//!             program: Program::Tech,
//!             payment_status: PaymentStatus::Paid,
//!             attendance: 90,
//!         })
//!         .await;
//!
//!     // Compute dashboard metrics
//!     let records = store.list().await;
//!     let metrics = compute_metrics(&records);
//!     println!("{} participants enrolled", metrics.total);
//!
//!     // Filter by program
//!     let tech = FilterSpec::new().program(Program::Tech).apply(&records);
//!     assert_eq!(tech.len(), 1);
//! }
//! ```

pub mod api;
pub mod config;
pub mod notify;
pub mod query;
pub mod seed;
pub mod store;
pub mod views;

// Re-export top-level types for convenience
pub use store::{
    ActivityEntry, NewParticipant, Participant, ParticipantUpdate, PaymentStatus, Program,
    RosterStore, UserProfile,
};

pub use views::{
    compute_metrics, compute_program_rollup, metric_cards, DashboardMetrics, MetricCardData,
    ProgramSummary, StatusBreakdown,
};

pub use query::FilterSpec;

pub use notify::{Notification, NotificationQueue, Severity};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, LoggingConfig, NotificationsConfig, SeedConfig,
};
