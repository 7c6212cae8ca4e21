use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Announcement, AnnouncementChanges, NewAnnouncement, Teacher};
use crate::error::RepoError;

/// Announcement store.
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Every announcement, in store iteration order.
    async fn find_all(&self) -> Result<Vec<Announcement>, RepoError>;

    /// Announcements whose window contains `now` (see [`Announcement::is_active_at`]).
    async fn find_active(&self, now: &str) -> Result<Vec<Announcement>, RepoError>;

    /// Find an announcement by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, RepoError>;

    /// Store a new announcement; the store assigns the id.
    async fn insert(&self, announcement: NewAnnouncement) -> Result<Announcement, RepoError>;

    /// Overwrite the editable fields. Returns the number of matched records.
    async fn update(&self, id: Uuid, changes: AnnouncementChanges) -> Result<u64, RepoError>;

    /// Remove an announcement. Returns the number of deleted records.
    async fn delete(&self, id: Uuid) -> Result<u64, RepoError>;
}

/// Teacher store. Read-only.
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// Find a teacher by username (the primary key).
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, RepoError>;
}
