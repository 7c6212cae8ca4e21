use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Dates are ISO-8601 text; the active filter compares them as strings.
        manager
            .create_table(
                Table::create()
                    .table(Announcements::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Announcements::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Announcements::Title).string().not_null())
                    .col(ColumnDef::new(Announcements::Message).text().not_null())
                    .col(ColumnDef::new(Announcements::StartDate).string().null())
                    .col(ColumnDef::new(Announcements::ExpirationDate).string().not_null())
                    .col(ColumnDef::new(Announcements::CreatedBy).string().not_null())
                    .col(ColumnDef::new(Announcements::CreatedAt).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_announcements_created_at")
                    .table(Announcements::Table)
                    .col(Announcements::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Announcements::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Announcements {
    Table,
    Id,
    Title,
    Message,
    StartDate,
    ExpirationDate,
    CreatedBy,
    CreatedAt,
}
