use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use models::realtor;

use crate::crud::Crud;
use crate::errors::ServiceError;
use crate::realtor::domain::RealtorDraft;
use crate::realtor::repository::RealtorRepository;

/// SeaORM-backed realtor store.
pub struct SeaOrmRealtorRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Crud for SeaOrmRealtorRepository {
    type Entity = realtor::Model;
    type Draft = RealtorDraft;

    async fn list(&self) -> Result<Vec<realtor::Model>, ServiceError> {
        realtor::Entity::find()
            .filter(realtor::Column::DeletedAt.is_null())
            .order_by_asc(realtor::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn get(&self, id: i32) -> Result<Option<realtor::Model>, ServiceError> {
        realtor::Entity::find_by_id(id)
            .filter(realtor::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert(&self, draft: RealtorDraft) -> Result<realtor::Model, ServiceError> {
        let am = realtor::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            email: Set(draft.email),
            phone_number: Set(draft.phone_number),
            license_number: Set(draft.license_number),
            agency: Set(draft.agency),
            years_of_experience: Set(draft.years_of_experience),
            specialization: Set(draft.specialization),
            is_active: Set(draft.is_active),
            deleted_at: Set(None),
        };
        am.insert(&self.db).await.map_err(ServiceError::db)
    }

    async fn replace(&self, id: i32, draft: RealtorDraft) -> Result<Option<realtor::Model>, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(None);
        };
        let mut am: realtor::ActiveModel = current.into();
        am.first_name = Set(draft.first_name);
        am.last_name = Set(draft.last_name);
        am.email = Set(draft.email);
        am.phone_number = Set(draft.phone_number);
        am.license_number = Set(draft.license_number);
        am.agency = Set(draft.agency);
        am.years_of_experience = Set(draft.years_of_experience);
        am.specialization = Set(draft.specialization);
        am.is_active = Set(draft.is_active);
        am.update(&self.db).await.map(Some).map_err(ServiceError::db)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(false);
        };
        let mut am: realtor::ActiveModel = current.into();
        am.deleted_at = Set(Some(Utc::now().into()));
        am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(true)
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = realtor::Entity::find_by_id(id)
            .filter(realtor::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(n > 0)
    }
}

#[async_trait]
impl RealtorRepository for SeaOrmRealtorRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<realtor::Model>, ServiceError> {
        realtor::Entity::find()
            .filter(realtor::Column::Email.eq(email))
            .filter(realtor::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn find_by_license(&self, license_number: &str) -> Result<Option<realtor::Model>, ServiceError> {
        realtor::Entity::find()
            .filter(realtor::Column::LicenseNumber.eq(license_number))
            .filter(realtor::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}
