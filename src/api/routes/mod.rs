//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod health;
pub mod notifications;
pub mod participants;
pub mod profile;
pub mod programs;
