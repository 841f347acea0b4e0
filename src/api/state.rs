//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.
//!
//! The shell owns the composition: the roster, the notification queue, the
//! read-only activity feed, and the admin profile are injected here as plain
//! values; none of the core components knows about the others.

use crate::config::ApiConfig;
use crate::notify::NotificationQueue;
use crate::store::types::{ActivityEntry, UserProfile};
use crate::store::RosterStore;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Participant record store
    pub roster: RosterStore,
    /// Transient notification queue
    pub notifications: Arc<NotificationQueue>,
    /// Seed activity feed, read-only display data
    pub activities: Arc<Vec<ActivityEntry>>,
    /// Signed-in admin profile, independent of the roster
    pub profile: Arc<RwLock<UserProfile>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState from its collaborators
    pub fn new(
        roster: RosterStore,
        notifications: Arc<NotificationQueue>,
        activities: Vec<ActivityEntry>,
        profile: UserProfile,
        config: ApiConfig,
    ) -> Self {
        Self {
            roster,
            notifications,
            activities: Arc::new(activities),
            profile: Arc::new(RwLock::new(profile)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
