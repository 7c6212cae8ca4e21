//! Teacher entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub role: String,
    /// Argon2 hash.
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Teacher.
impl From<Model> for noticeboard_core::domain::Teacher {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            display_name: model.display_name,
            role: model.role,
            password_hash: model.password,
        }
    }
}
