use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use models::property;

use crate::crud::Crud;
use crate::errors::ServiceError;
use crate::property::domain::PropertyDraft;
use crate::property::repository::PropertyRepository;

/// SeaORM-backed property store.
pub struct SeaOrmPropertyRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Crud for SeaOrmPropertyRepository {
    type Entity = property::Model;
    type Draft = PropertyDraft;

    async fn list(&self) -> Result<Vec<property::Model>, ServiceError> {
        property::Entity::find()
            .filter(property::Column::DeletedAt.is_null())
            .order_by_asc(property::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn get(&self, id: i32) -> Result<Option<property::Model>, ServiceError> {
        property::Entity::find_by_id(id)
            .filter(property::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert(&self, draft: PropertyDraft) -> Result<property::Model, ServiceError> {
        let am = property::ActiveModel {
            id: NotSet,
            address: Set(draft.address),
            city: Set(draft.city),
            state: Set(draft.state),
            zip_code: Set(draft.zip_code),
            price: Set(draft.price),
            bedrooms: Set(draft.bedrooms),
            bathrooms: Set(draft.bathrooms),
            square_feet: Set(draft.square_feet),
            property_type: Set(draft.property_type),
            status: Set(draft.status),
            realtor_id: Set(draft.realtor_id),
            listed_date: Set(draft.listed_date),
            description: Set(draft.description),
            deleted_at: Set(None),
        };
        am.insert(&self.db).await.map_err(ServiceError::db)
    }

    async fn replace(&self, id: i32, draft: PropertyDraft) -> Result<Option<property::Model>, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(None);
        };
        let mut am: property::ActiveModel = current.into();
        am.address = Set(draft.address);
        am.city = Set(draft.city);
        am.state = Set(draft.state);
        am.zip_code = Set(draft.zip_code);
        am.price = Set(draft.price);
        am.bedrooms = Set(draft.bedrooms);
        am.bathrooms = Set(draft.bathrooms);
        am.square_feet = Set(draft.square_feet);
        am.property_type = Set(draft.property_type);
        am.status = Set(draft.status);
        am.realtor_id = Set(draft.realtor_id);
        am.listed_date = Set(draft.listed_date);
        am.description = Set(draft.description);
        am.update(&self.db).await.map(Some).map_err(ServiceError::db)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(false);
        };
        let mut am: property::ActiveModel = current.into();
        am.deleted_at = Set(Some(Utc::now().into()));
        am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(true)
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = property::Entity::find_by_id(id)
            .filter(property::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(n > 0)
    }
}

#[async_trait]
impl PropertyRepository for SeaOrmPropertyRepository {
    async fn list_by_realtor(&self, realtor_id: i32) -> Result<Vec<property::Model>, ServiceError> {
        property::Entity::find()
            .filter(property::Column::RealtorId.eq(realtor_id))
            .filter(property::Column::DeletedAt.is_null())
            .order_by_asc(property::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn list_by_type(&self, property_type: &str) -> Result<Vec<property::Model>, ServiceError> {
        property::Entity::find()
            .filter(property::Column::PropertyType.eq(property_type))
            .filter(property::Column::DeletedAt.is_null())
            .order_by_asc(property::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn detach_realtor(&self, realtor_id: i32) -> Result<u64, ServiceError> {
        let res = property::Entity::update_many()
            .col_expr(property::Column::RealtorId, Expr::value(Option::<i32>::None))
            .filter(property::Column::RealtorId.eq(realtor_id))
            .filter(property::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.rows_affected)
    }
}
