//! Announcement entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub start_date: Option<String>,
    pub expiration_date: String,
    pub created_by: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Announcement.
impl From<Model> for noticeboard_core::domain::Announcement {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            message: model.message,
            start_date: model.start_date,
            expiration_date: model.expiration_date,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

/// Conversion from Domain Announcement to SeaORM ActiveModel.
impl From<noticeboard_core::domain::Announcement> for ActiveModel {
    fn from(announcement: noticeboard_core::domain::Announcement) -> Self {
        Self {
            id: Set(announcement.id),
            title: Set(announcement.title),
            message: Set(announcement.message),
            start_date: Set(announcement.start_date),
            expiration_date: Set(announcement.expiration_date),
            created_by: Set(announcement.created_by),
            created_at: Set(announcement.created_at),
        }
    }
}
