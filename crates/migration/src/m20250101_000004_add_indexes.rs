//! Lookup indexes for the unique-among-live columns and the filtered reads.
//!
//! Uniqueness of email/license is scoped to live rows and enforced by the
//! repository layer, so these stay plain b-tree indexes.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_realtor_email")
                    .table(Realtor::Table)
                    .col(Realtor::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_realtor_license_number")
                    .table(Realtor::Table)
                    .col(Realtor::LicenseNumber)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_user_email")
                    .table(User::Table)
                    .col(User::Email)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_property_realtor_id")
                    .table(Property::Table)
                    .col(Property::RealtorId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_property_property_type")
                    .table(Property::Table)
                    .col(Property::PropertyType)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_property_property_type").table(Property::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_property_realtor_id").table(Property::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_user_email").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_realtor_license_number").table(Realtor::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_realtor_email").table(Realtor::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Realtor {
    Table,
    Email,
    LicenseNumber,
}

#[derive(DeriveIden)]
enum User {
    Table,
    Email,
}

#[derive(DeriveIden)]
enum Property {
    Table,
    RealtorId,
    PropertyType,
}
