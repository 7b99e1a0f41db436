use std::sync::Arc;

use tracing::{info, instrument};

use models::user;

use super::domain::{NewUser, UserDraft, UserPatch};
use super::repository::UserRepository;
use crate::crud::{require, Crud};
use crate::errors::ServiceError;

/// Business rules for users: email uniqueness among live rows.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<user::Model, ServiceError> {
        require(&*self.repo, "user", id).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<user::Model, ServiceError> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user with email {email} not found")))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewUser) -> Result<user::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.ensure_unique_email(&draft, None).await?;
        let created = self.repo.insert(draft).await?;
        info!(id = created.id, email = %created.email, "user_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: NewUser) -> Result<user::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.ensure_unique_email(&draft, Some(id)).await?;
        let updated = self
            .repo
            .replace(id, draft)
            .await?
            .ok_or_else(|| ServiceError::not_found("user", id))?;
        info!(id = updated.id, "user_replaced");
        Ok(updated)
    }

    /// Merges only the provided fields onto the stored snapshot and
    /// re-validates the merged record before persisting it.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: i32, patch: UserPatch) -> Result<user::Model, ServiceError> {
        let current = require(&*self.repo, "user", id).await?;
        let merged = patch.apply(&current);
        self.replace(id, merged).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "user_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("user", id))
        }
    }

    async fn ensure_unique_email(&self, draft: &UserDraft, current_id: Option<i32>) -> Result<(), ServiceError> {
        if let Some(other) = self.repo.find_by_email(&draft.email).await? {
            if Some(other.id) != current_id {
                return Err(ServiceError::Conflict(format!(
                    "email {} is already in use",
                    draft.email
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::repository::mock::MockUserRepository;

    fn service() -> UserService<MockUserRepository> {
        UserService::new(Arc::new(MockUserRepository::default()))
    }

    fn payload(email: &str) -> NewUser {
        NewUser {
            first_name: "John".into(),
            last_name: "Smith".into(),
            email: email.into(),
            phone_number: "555-1001".into(),
            address: "123 Main St, Anytown, CA 90210".into(),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_created_date() {
        let svc = service();
        let created = svc.create(payload("john@email.com")).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(created.is_active);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn email_lookup_finds_and_misses() {
        let svc = service();
        svc.create(payload("john@email.com")).await.unwrap();

        let found = svc.get_by_email("john@email.com").await.unwrap();
        assert_eq!(found.email, "john@email.com");

        let err = svc.get_by_email("emma@email.com").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let svc = service();
        svc.create(payload("john@email.com")).await.unwrap();
        let err = svc.create(payload("john@email.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn patch_cannot_take_a_used_email() {
        let svc = service();
        svc.create(payload("john@email.com")).await.unwrap();
        let second = svc.create(payload("emma@email.com")).await.unwrap();

        let patch = UserPatch { email: Some("john@email.com".into()), ..Default::default() };
        let err = svc.patch(second.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn replace_preserves_identity_and_creation_date() {
        let svc = service();
        let created = svc.create(payload("john@email.com")).await.unwrap();

        let mut update = payload("john.smith@email.com");
        update.first_name = "Johnny".into();
        let updated = svc.replace(created.id, update).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_date, created.created_date);
        assert_eq!(updated.first_name, "Johnny");
    }

    #[tokio::test]
    async fn replace_on_unknown_id_is_not_found() {
        let svc = service();
        let err = svc.replace(9, payload("john@email.com")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(payload("john@email.com")).await.unwrap();
        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await.unwrap_err(), ServiceError::NotFound(_)));
        assert!(matches!(svc.delete(created.id).await.unwrap_err(), ServiceError::NotFound(_)));
    }
}
