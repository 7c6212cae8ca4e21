//! Data Transfer Objects - request/response types for the API.
//!
//! Every request parameter travels in the query string.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};

fn default_true() -> bool {
    true
}

/// Query-string boolean: `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`,
/// `y/n`, any case.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"a boolean such as true/false, 1/0, yes/no or on/off",
        )),
    }
}

/// Query for `GET /announcements`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAnnouncementsQuery {
    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub active_only: bool,
}

/// Query carrying only the acting teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherQuery {
    pub teacher_username: String,
}

/// Query for creating or updating an announcement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementQuery {
    pub title: String,
    pub message: String,
    pub expiration_date: String,
    #[serde(default)]
    pub start_date: Option<String>,
    pub teacher_username: String,
}

/// Query for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginQuery {
    pub username: String,
    pub password: String,
}

/// Query for `GET /auth/check-session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionQuery {
    pub username: String,
}

/// Announcement as returned to clients. Dates are ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnouncementResponse {
    pub id: String,
    pub title: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: String,
}

/// A teacher's public information. Never includes the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeacherResponse {
    pub username: String,
    pub display_name: String,
    pub role: String,
}
