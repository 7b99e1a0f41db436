use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::realtor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub price: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: i32,
    pub property_type: String,
    pub status: String,
    pub realtor_id: Option<i32>,
    pub listed_date: DateTimeWithTimeZone,
    pub description: String,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Realtor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Realtor => Entity::belongs_to(realtor::Entity)
                .from(Column::RealtorId)
                .to(realtor::Column::Id)
                .into(),
        }
    }
}

impl Related<realtor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Realtor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
