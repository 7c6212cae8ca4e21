//! In-memory stores - used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use noticeboard_core::domain::{Announcement, AnnouncementChanges, NewAnnouncement, Teacher};
use noticeboard_core::error::RepoError;
use noticeboard_core::ports::{AnnouncementRepository, TeacherRepository};

/// Announcements kept in insertion order.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryAnnouncementRepository {
    store: RwLock<Vec<Announcement>>,
}

impl InMemoryAnnouncementRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_announcements(announcements: Vec<Announcement>) -> Self {
        Self {
            store: RwLock::new(announcements),
        }
    }
}

#[async_trait]
impl AnnouncementRepository for InMemoryAnnouncementRepository {
    async fn find_all(&self) -> Result<Vec<Announcement>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_active(&self, now: &str) -> Result<Vec<Announcement>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().filter(|a| a.is_active_at(now)).cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, announcement: NewAnnouncement) -> Result<Announcement, RepoError> {
        let announcement = announcement.with_id(Uuid::new_v4());
        self.store.write().await.push(announcement.clone());
        Ok(announcement)
    }

    async fn update(&self, id: Uuid, changes: AnnouncementChanges) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        match store.iter_mut().find(|a| a.id == id) {
            Some(existing) => {
                existing.apply(changes);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|a| a.id != id);
        Ok((before - store.len()) as u64)
    }
}

/// Teacher directory held in a map keyed by username.
#[derive(Default)]
pub struct InMemoryTeacherRepository {
    store: RwLock<HashMap<String, Teacher>>,
}

impl InMemoryTeacherRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teachers(teachers: impl IntoIterator<Item = Teacher>) -> Self {
        let store = teachers.into_iter().map(|t| (t.id.clone(), t)).collect();
        Self {
            store: RwLock::new(store),
        }
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, RepoError> {
        Ok(self.store.read().await.get(username).cloned())
    }
}
