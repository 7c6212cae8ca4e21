//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use noticeboard_core::domain::{Announcement, AnnouncementChanges, NewAnnouncement, Teacher};
use noticeboard_core::error::RepoError;
use noticeboard_core::ports::{AnnouncementRepository, TeacherRepository};

use super::entity::announcement::{self, Column, Entity as AnnouncementEntity};
use super::entity::teacher::Entity as TeacherEntity;

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => RepoError::Query(e.to_string()),
    }
}

/// PostgreSQL announcement repository.
pub struct PostgresAnnouncementRepository {
    db: DbConn,
}

impl PostgresAnnouncementRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnnouncementRepository for PostgresAnnouncementRepository {
    async fn find_all(&self) -> Result<Vec<Announcement>, RepoError> {
        let result = AnnouncementEntity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self, now: &str) -> Result<Vec<Announcement>, RepoError> {
        // Same window as Announcement::is_active_at, evaluated as text comparison.
        let started = Condition::any()
            .add(Column::StartDate.is_null())
            .add(Column::StartDate.eq(""))
            .add(Column::StartDate.lte(now));
        let not_expired = Condition::any()
            .add(Column::ExpirationDate.eq(""))
            .add(Column::ExpirationDate.gte(now));

        let result = AnnouncementEntity::find()
            .filter(Condition::all().add(started).add(not_expired))
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Announcement>, RepoError> {
        let result = AnnouncementEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, announcement: NewAnnouncement) -> Result<Announcement, RepoError> {
        let active_model: announcement::ActiveModel =
            announcement.with_id(Uuid::new_v4()).into();

        let model = active_model.insert(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, changes: AnnouncementChanges) -> Result<u64, RepoError> {
        let result = AnnouncementEntity::update_many()
            .col_expr(Column::Title, Expr::value(changes.title))
            .col_expr(Column::Message, Expr::value(changes.message))
            .col_expr(Column::StartDate, Expr::value(changes.start_date))
            .col_expr(Column::ExpirationDate, Expr::value(changes.expiration_date))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepoError> {
        let result = AnnouncementEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }
}

/// PostgreSQL teacher repository.
pub struct PostgresTeacherRepository {
    db: DbConn,
}

impl PostgresTeacherRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TeacherRepository for PostgresTeacherRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<Teacher>, RepoError> {
        tracing::debug!(teacher = %username, "Finding teacher by username");

        let result = TeacherEntity::find_by_id(username.to_string())
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }
}
