use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Announcement entity. Dates are ISO-8601 strings as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub id: Uuid,
    pub title: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: String,
}

impl Announcement {
    /// Whether the start/expiration window contains `now`.
    ///
    /// Both bounds are compared as strings against `now` rendered with
    /// [`render_timestamp`](super::timestamp::render_timestamp). A missing or
    /// empty bound is open.
    pub fn is_active_at(&self, now: &str) -> bool {
        if !self.expiration_date.is_empty() && self.expiration_date.as_str() < now {
            return false;
        }

        match self.start_date.as_deref() {
            Some(start) if !start.is_empty() => start <= now,
            _ => true,
        }
    }

    /// Replace every mutable field.
    pub fn apply(&mut self, changes: AnnouncementChanges) {
        self.title = changes.title;
        self.message = changes.message;
        self.start_date = changes.start_date;
        self.expiration_date = changes.expiration_date;
    }
}

/// An announcement that has not been stored yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    pub title: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: String,
}

impl NewAnnouncement {
    pub fn with_id(self, id: Uuid) -> Announcement {
        Announcement {
            id,
            title: self.title,
            message: self.message,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
            created_by: self.created_by,
            created_at: self.created_at,
        }
    }
}

/// Full replacement of the editable fields.
#[derive(Debug, Clone)]
pub struct AnnouncementChanges {
    pub title: String,
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
}
