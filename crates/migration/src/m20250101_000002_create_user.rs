//! Create `user` table.
//!
//! Registered end-users; includes soft-delete timestamp.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len(User::FirstName, 100).not_null())
                    .col(string_len(User::LastName, 100).not_null())
                    .col(string_len(User::Email, 255).not_null())
                    .col(string_len(User::PhoneNumber, 20).not_null())
                    .col(string_len(User::Address, 200).not_null())
                    .col(timestamp_with_time_zone(User::CreatedDate).not_null())
                    .col(boolean(User::IsActive).not_null())
                    .col(
                        ColumnDef::new(User::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
    CreatedDate,
    IsActive,
    DeletedAt,
}
