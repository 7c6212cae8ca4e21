use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).string().not_null().primary_key())
                    .col(ColumnDef::new(Teachers::Username).string().not_null())
                    .col(ColumnDef::new(Teachers::DisplayName).string().not_null())
                    .col(ColumnDef::new(Teachers::Role).string().not_null())
                    // Argon2 PHC string
                    .col(ColumnDef::new(Teachers::Password).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    Username,
    DisplayName,
    Role,
    Password,
}
