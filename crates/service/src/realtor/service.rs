use std::sync::Arc;

use tracing::{info, instrument};

use models::{property, realtor};

use super::domain::{NewRealtor, RealtorDraft, RealtorPatch};
use super::repository::RealtorRepository;
use crate::crud::{require, Crud};
use crate::errors::ServiceError;
use crate::property::repository::PropertyRepository;

/// Business rules for realtors: uniqueness of email and license number
/// among live rows, and reference cleanup on removal.
pub struct RealtorService<R: RealtorRepository, P: PropertyRepository> {
    repo: Arc<R>,
    properties: Arc<P>,
}

impl<R: RealtorRepository, P: PropertyRepository> RealtorService<R, P> {
    pub fn new(repo: Arc<R>, properties: Arc<P>) -> Self {
        Self { repo, properties }
    }

    pub async fn list(&self) -> Result<Vec<realtor::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn get(&self, id: i32) -> Result<realtor::Model, ServiceError> {
        require(&*self.repo, "realtor", id).await
    }

    /// Live properties listed by an existing realtor.
    pub async fn properties(&self, id: i32) -> Result<Vec<property::Model>, ServiceError> {
        require(&*self.repo, "realtor", id).await?;
        self.properties.list_by_realtor(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewRealtor) -> Result<realtor::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.ensure_unique(&draft, None).await?;
        let created = self.repo.insert(draft).await?;
        info!(id = created.id, email = %created.email, "realtor_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: NewRealtor) -> Result<realtor::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.ensure_unique(&draft, Some(id)).await?;
        let updated = self
            .repo
            .replace(id, draft)
            .await?
            .ok_or_else(|| ServiceError::not_found("realtor", id))?;
        info!(id = updated.id, "realtor_replaced");
        Ok(updated)
    }

    /// Merges only the provided fields onto the stored snapshot and
    /// re-validates the merged record before persisting it.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: i32, patch: RealtorPatch) -> Result<realtor::Model, ServiceError> {
        let current = require(&*self.repo, "realtor", id).await?;
        let merged = patch.apply(&current);
        self.replace(id, merged).await
    }

    /// Soft-deletes the realtor and clears the back-reference on every live
    /// property it listed; the properties themselves survive.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.exists(id).await? {
            return Err(ServiceError::not_found("realtor", id));
        }
        let detached = self.properties.detach_realtor(id).await?;
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("realtor", id));
        }
        info!(id, detached_properties = detached, "realtor_deleted");
        Ok(())
    }

    /// Email and license number must be unique among live realtors; the row
    /// being replaced (if any) is exempt from its own values.
    async fn ensure_unique(&self, draft: &RealtorDraft, current_id: Option<i32>) -> Result<(), ServiceError> {
        if let Some(other) = self.repo.find_by_email(&draft.email).await? {
            if Some(other.id) != current_id {
                return Err(ServiceError::Conflict(format!(
                    "email {} is already in use",
                    draft.email
                )));
            }
        }
        if let Some(other) = self.repo.find_by_license(&draft.license_number).await? {
            if Some(other.id) != current_id {
                return Err(ServiceError::Conflict(format!(
                    "license number {} is already in use",
                    draft.license_number
                )));
            }
        }
        Ok(())
    }
}
