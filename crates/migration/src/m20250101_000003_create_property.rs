//! Create `property` table with a nullable FK to `realtor`.
//!
//! The FK clears on realtor removal instead of cascading, so listings
//! survive their agent.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string_len(Property::Address, 200).not_null())
                    .col(string_len(Property::City, 100).not_null())
                    .col(string_len(Property::State, 50).not_null())
                    .col(string_len(Property::ZipCode, 10).not_null())
                    .col(decimal_len(Property::Price, 18, 2).not_null())
                    .col(integer(Property::Bedrooms).not_null())
                    .col(integer(Property::Bathrooms).not_null())
                    .col(integer(Property::SquareFeet).not_null())
                    .col(string_len(Property::PropertyType, 50).not_null())
                    .col(string_len(Property::Status, 50).not_null())
                    .col(ColumnDef::new(Property::RealtorId).integer().null())
                    .col(timestamp_with_time_zone(Property::ListedDate).not_null())
                    .col(string_len(Property::Description, 2000).not_null())
                    .col(
                        ColumnDef::new(Property::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_realtor")
                            .from(Property::Table, Property::RealtorId)
                            .to(Realtor::Table, Realtor::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Property::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Property {
    Table,
    Id,
    Address,
    City,
    State,
    ZipCode,
    Price,
    Bedrooms,
    Bathrooms,
    SquareFeet,
    PropertyType,
    Status,
    RealtorId,
    ListedDate,
    Description,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Realtor {
    Table,
    Id,
}
