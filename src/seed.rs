//! Seed data
//!
//! Static collaborators supplied as fixed input: the initial participant
//! list, the activity feed, and the signed-in admin profile. Seeding is
//! optional; an empty roster is a valid starting state.

use crate::store::types::{
    avatar_url, ActivityEntry, Participant, PaymentStatus, Program, UserProfile,
};
use chrono::{DateTime, Utc};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_else(|_| Utc::now())
}

/// The initial participant roster, in reference seed order
pub fn initial_participants() -> Vec<Participant> {
    vec![
        Participant {
            id: "1".to_string(),
            name: "Sarah Jenkins".to_string(),
            email: "sarah.j@example.com".to_string(),
            program: Program::Tech,
            payment_status: PaymentStatus::Paid,
            attendance: 95,
            created_at: ts("2024-03-10T10:00:00Z"),
            avatar: avatar_url("sarah"),
        },
        Participant {
            id: "2".to_string(),
            name: "Maria Rodriguez".to_string(),
            email: "m.rodriguez@example.com".to_string(),
            program: Program::Lead,
            payment_status: PaymentStatus::Certificate,
            attendance: 100,
            created_at: ts("2024-03-08T14:30:00Z"),
            avatar: avatar_url("maria"),
        },
        Participant {
            id: "3".to_string(),
            name: "Emily Chen".to_string(),
            email: "emily.c@example.com".to_string(),
            program: Program::Biz,
            payment_status: PaymentStatus::Waitlist,
            attendance: 45,
            created_at: ts("2024-03-12T09:15:00Z"),
            avatar: avatar_url("emily"),
        },
        Participant {
            id: "4".to_string(),
            name: "Jessica Taylor".to_string(),
            email: "j.taylor@example.com".to_string(),
            program: Program::Arts,
            payment_status: PaymentStatus::Paid,
            attendance: 78,
            created_at: ts("2024-03-11T16:45:00Z"),
            avatar: avatar_url("jessica"),
        },
    ]
}

/// The initial activity feed, read-only display data
pub fn initial_activities() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: "a1".to_string(),
            user_name: "Sarah Jenkins".to_string(),
            action: "Enrolled in Tech Program".to_string(),
            timestamp: "2 mins ago".to_string(),
            status: Some(PaymentStatus::Paid),
            avatar: avatar_url("sarah"),
        },
        ActivityEntry {
            id: "a2".to_string(),
            user_name: "Emily Chen".to_string(),
            action: "Joined Waitlist for Biz".to_string(),
            timestamp: "1 hour ago".to_string(),
            status: Some(PaymentStatus::Waitlist),
            avatar: avatar_url("emily"),
        },
        ActivityEntry {
            id: "a3".to_string(),
            user_name: "Maria Rodriguez".to_string(),
            action: "Earned Program Certificate".to_string(),
            timestamp: "5 hours ago".to_string(),
            status: Some(PaymentStatus::Certificate),
            avatar: avatar_url("maria"),
        },
    ]
}

/// The signed-in admin profile
pub fn admin_profile() -> UserProfile {
    UserProfile {
        name: "Admin User".to_string(),
        email: "admin@cohort.example".to_string(),
        role: "Super Administrator".to_string(),
        avatar: avatar_url("admin"),
    }
}
