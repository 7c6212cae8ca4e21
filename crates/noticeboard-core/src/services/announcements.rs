use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::timestamp::{parse_timestamp, render_timestamp};
use crate::domain::{Announcement, AnnouncementChanges, NewAnnouncement};
use crate::error::DomainError;
use crate::ports::{AnnouncementRepository, Clock, TeacherIdentity};

/// Fields a teacher submits on create and update.
#[derive(Debug, Clone)]
pub struct AnnouncementDraft {
    pub title: String,
    pub message: String,
    pub expiration_date: String,
    pub start_date: Option<String>,
}

impl AnnouncementDraft {
    /// Check that both dates parse. Returns the parsed expiration.
    fn validate_dates(&self) -> Result<DateTime<Utc>, DomainError> {
        let expiration = parse_timestamp(&self.expiration_date)
            .ok_or_else(|| DomainError::validation("Invalid expiration date format"))?;

        if let Some(start) = self.start_date.as_deref() {
            parse_timestamp(start)
                .ok_or_else(|| DomainError::validation("Invalid start date format"))?;
        }

        Ok(expiration)
    }

    fn into_changes(self) -> AnnouncementChanges {
        AnnouncementChanges {
            title: self.title,
            message: self.message,
            start_date: self.start_date,
            expiration_date: self.expiration_date,
        }
    }
}

/// Parse an announcement id as it arrives in a request path.
pub fn parse_announcement_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| DomainError::validation("Invalid announcement ID"))
}

/// Announcement listing and management.
pub struct AnnouncementService {
    repo: Arc<dyn AnnouncementRepository>,
    identity: Arc<dyn TeacherIdentity>,
    clock: Arc<dyn Clock>,
}

impl AnnouncementService {
    pub fn new(
        repo: Arc<dyn AnnouncementRepository>,
        identity: Arc<dyn TeacherIdentity>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repo,
            identity,
            clock,
        }
    }

    /// Public listing. Does not require a teacher, even with `active_only` off.
    pub async fn list(&self, active_only: bool) -> Result<Vec<Announcement>, DomainError> {
        let announcements = if active_only {
            let now = render_timestamp(self.clock.now());
            self.repo.find_active(&now).await?
        } else {
            self.repo.find_all().await?
        };

        Ok(announcements)
    }

    /// Every announcement, including expired and scheduled ones.
    pub async fn list_all(&self, teacher: &str) -> Result<Vec<Announcement>, DomainError> {
        self.identity.require_teacher(teacher).await?;
        Ok(self.repo.find_all().await?)
    }

    pub async fn create(
        &self,
        teacher: &str,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, DomainError> {
        let now = self.clock.now();

        let teacher = self.identity.require_teacher(teacher).await?;

        let expiration = draft.validate_dates()?;
        if expiration <= now {
            return Err(DomainError::validation(
                "Expiration date must be in the future",
            ));
        }

        let announcement = self
            .repo
            .insert(NewAnnouncement {
                title: draft.title,
                message: draft.message,
                start_date: draft.start_date,
                expiration_date: draft.expiration_date,
                created_by: teacher.username,
                created_at: render_timestamp(now),
            })
            .await?;

        tracing::info!(
            announcement_id = %announcement.id,
            created_by = %announcement.created_by,
            "Announcement created"
        );

        Ok(announcement)
    }

    /// Replace every editable field. Unlike [`create`](Self::create), a past
    /// expiration date is accepted.
    pub async fn update(
        &self,
        teacher: &str,
        id: &str,
        draft: AnnouncementDraft,
    ) -> Result<Announcement, DomainError> {
        self.identity.require_teacher(teacher).await?;
        let id = self.require_existing(id).await?;

        draft.validate_dates()?;

        let matched = self.repo.update(id, draft.into_changes()).await?;
        if matched == 0 {
            return Err(DomainError::Internal(
                "Failed to update announcement".to_string(),
            ));
        }

        tracing::info!(announcement_id = %id, "Announcement updated");

        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Announcement",
            })
    }

    pub async fn delete(&self, teacher: &str, id: &str) -> Result<(), DomainError> {
        self.identity.require_teacher(teacher).await?;
        let id = self.require_existing(id).await?;

        let deleted = self.repo.delete(id).await?;
        if deleted == 0 {
            return Err(DomainError::Internal(
                "Failed to delete announcement".to_string(),
            ));
        }

        tracing::info!(announcement_id = %id, "Announcement deleted");
        Ok(())
    }

    async fn require_existing(&self, raw_id: &str) -> Result<Uuid, DomainError> {
        let id = parse_announcement_id(raw_id)?;

        if self.repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Announcement",
            });
        }

        Ok(id)
    }
}
