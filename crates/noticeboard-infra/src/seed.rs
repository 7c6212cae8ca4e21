//! Demo data for running without a database.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use noticeboard_core::domain::timestamp::render_timestamp;
use noticeboard_core::domain::{Announcement, Teacher};
use noticeboard_core::ports::{AuthError, PasswordService};

/// (username, display name, role, password)
const DEMO_TEACHERS: &[(&str, &str, &str, &str)] = &[
    ("mrodriguez", "Ms. Rodriguez", "teacher", "art123"),
    ("mchen", "Mr. Chen", "teacher", "chess456"),
    ("principal", "Principal Martinez", "admin", "admin789"),
];

/// Demo teacher accounts with freshly hashed passwords.
pub fn demo_teachers(passwords: &dyn PasswordService) -> Result<Vec<Teacher>, AuthError> {
    DEMO_TEACHERS
        .iter()
        .map(|(username, display_name, role, password)| -> Result<Teacher, AuthError> {
            let hash = passwords.hash(password)?;
            Ok(Teacher::new(*username, *display_name, *role, hash))
        })
        .collect()
}

/// A single welcome announcement, active for the next 30 days.
pub fn demo_announcements(now: DateTime<Utc>) -> Vec<Announcement> {
    vec![Announcement {
        id: Uuid::new_v4(),
        title: "Welcome back".to_string(),
        message: "Activity registration is open. Sign up before the end of the month!"
            .to_string(),
        start_date: None,
        expiration_date: render_timestamp(now + Duration::days(30)),
        created_by: "principal".to_string(),
        created_at: render_timestamp(now),
    }]
}
