//! Create `realtor` table.
//!
//! Listing agents; rows are soft-deleted via `deleted_at`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Realtor::Table)
                    .if_not_exists()
                    .col(pk_auto(Realtor::Id))
                    .col(string_len(Realtor::FirstName, 100).not_null())
                    .col(string_len(Realtor::LastName, 100).not_null())
                    .col(string_len(Realtor::Email, 255).not_null())
                    .col(string_len(Realtor::PhoneNumber, 20).not_null())
                    .col(string_len(Realtor::LicenseNumber, 50).not_null())
                    .col(string_len(Realtor::Agency, 200).not_null())
                    .col(integer(Realtor::YearsOfExperience).not_null())
                    .col(string_len(Realtor::Specialization, 100).not_null())
                    .col(boolean(Realtor::IsActive).not_null())
                    .col(
                        ColumnDef::new(Realtor::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Realtor::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Realtor {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    LicenseNumber,
    Agency,
    YearsOfExperience,
    Specialization,
    IsActive,
    DeletedAt,
}
