use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use models::user;

use crate::crud::Crud;
use crate::errors::ServiceError;
use crate::user::domain::UserDraft;
use crate::user::repository::UserRepository;

/// SeaORM-backed user store.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Crud for SeaOrmUserRepository {
    type Entity = user::Model;
    type Draft = UserDraft;

    async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(user::Column::DeletedAt.is_null())
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }

    async fn insert(&self, draft: UserDraft) -> Result<user::Model, ServiceError> {
        let am = user::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            email: Set(draft.email),
            phone_number: Set(draft.phone_number),
            address: Set(draft.address),
            created_date: Set(Utc::now().into()),
            is_active: Set(draft.is_active),
            deleted_at: Set(None),
        };
        am.insert(&self.db).await.map_err(ServiceError::db)
    }

    async fn replace(&self, id: i32, draft: UserDraft) -> Result<Option<user::Model>, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(None);
        };
        let mut am: user::ActiveModel = current.into();
        am.first_name = Set(draft.first_name);
        am.last_name = Set(draft.last_name);
        am.email = Set(draft.email);
        am.phone_number = Set(draft.phone_number);
        am.address = Set(draft.address);
        am.is_active = Set(draft.is_active);
        am.update(&self.db).await.map(Some).map_err(ServiceError::db)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        let Some(current) = self.get(id).await? else {
            return Ok(false);
        };
        let mut am: user::ActiveModel = current.into();
        am.deleted_at = Set(Some(Utc::now().into()));
        am.update(&self.db).await.map_err(ServiceError::db)?;
        Ok(true)
    }

    async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
        let n = user::Entity::find_by_id(id)
            .filter(user::Column::DeletedAt.is_null())
            .count(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(n > 0)
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .map_err(ServiceError::db)
    }
}
