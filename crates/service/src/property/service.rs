use std::sync::Arc;

use tracing::{info, instrument};

use models::property;

use super::domain::{NewProperty, PropertyPatch};
use super::repository::PropertyRepository;
use crate::crud::{require, Crud};
use crate::errors::ServiceError;
use crate::realtor::repository::RealtorRepository;

/// Business rules for property listings: create-time defaults, existence
/// checks, and realtor reference validation.
pub struct PropertyService<P: PropertyRepository, R: RealtorRepository> {
    repo: Arc<P>,
    realtors: Arc<R>,
}

impl<P: PropertyRepository, R: RealtorRepository> PropertyService<P, R> {
    pub fn new(repo: Arc<P>, realtors: Arc<R>) -> Self {
        Self { repo, realtors }
    }

    pub async fn list(&self) -> Result<Vec<property::Model>, ServiceError> {
        self.repo.list().await
    }

    pub async fn list_by_type(&self, property_type: &str) -> Result<Vec<property::Model>, ServiceError> {
        self.repo.list_by_type(property_type).await
    }

    pub async fn list_by_realtor(&self, realtor_id: i32) -> Result<Vec<property::Model>, ServiceError> {
        self.repo.list_by_realtor(realtor_id).await
    }

    pub async fn get(&self, id: i32) -> Result<property::Model, ServiceError> {
        require(&*self.repo, "property", id).await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewProperty) -> Result<property::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.check_realtor(draft.realtor_id).await?;
        let created = self.repo.insert(draft).await?;
        info!(id = created.id, status = %created.status, "property_created");
        Ok(created)
    }

    #[instrument(skip(self, input))]
    pub async fn replace(&self, id: i32, input: NewProperty) -> Result<property::Model, ServiceError> {
        let draft = input.into_draft()?;
        self.check_realtor(draft.realtor_id).await?;
        let updated = self
            .repo
            .replace(id, draft)
            .await?
            .ok_or_else(|| ServiceError::not_found("property", id))?;
        info!(id = updated.id, "property_replaced");
        Ok(updated)
    }

    /// Merges only the provided fields onto the stored snapshot and
    /// re-validates the merged record before persisting it.
    #[instrument(skip(self, patch))]
    pub async fn patch(&self, id: i32, patch: PropertyPatch) -> Result<property::Model, ServiceError> {
        let current = require(&*self.repo, "property", id).await?;
        let merged = patch.apply(&current);
        self.replace(id, merged).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(id, "property_deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found("property", id))
        }
    }

    /// A provided realtor reference must point at a live realtor.
    async fn check_realtor(&self, realtor_id: Option<i32>) -> Result<(), ServiceError> {
        if let Some(rid) = realtor_id {
            if !self.realtors.exists(rid).await? {
                return Err(ServiceError::invalid_field(
                    "realtorId",
                    format!("realtor {rid} does not exist"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::domain::DEFAULT_STATUS;
    use crate::property::repository::mock::MockPropertyRepository;
    use crate::realtor::domain::NewRealtor;
    use crate::realtor::repository::mock::MockRealtorRepository;
    use rust_decimal::Decimal;

    fn services() -> (PropertyService<MockPropertyRepository, MockRealtorRepository>, Arc<MockRealtorRepository>) {
        let realtors = Arc::new(MockRealtorRepository::default());
        let svc = PropertyService::new(Arc::new(MockPropertyRepository::default()), realtors.clone());
        (svc, realtors)
    }

    fn payload() -> NewProperty {
        NewProperty {
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            price: Decimal::new(100_000, 0),
            bedrooms: 2,
            bathrooms: 1,
            square_feet: 900,
            property_type: "House".into(),
            status: None,
            realtor_id: None,
            listed_date: None,
            description: String::new(),
        }
    }

    async fn seed_realtor(realtors: &MockRealtorRepository) -> i32 {
        let draft = NewRealtor {
            first_name: "Sarah".into(),
            last_name: "Johnson".into(),
            email: "sarah.johnson@realty.com".into(),
            phone_number: "555-0101".into(),
            license_number: "RE-2024-001".into(),
            agency: "Prime Realty Group".into(),
            years_of_experience: 8,
            specialization: "Residential".into(),
            is_active: true,
        }
        .into_draft()
        .unwrap();
        realtors.insert(draft).await.unwrap().id
    }

    #[tokio::test]
    async fn create_then_get_round_trips_with_defaults() {
        let (svc, _) = services();
        let created = svc.create(payload()).await.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.status, DEFAULT_STATUS);

        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn replace_on_unknown_id_is_not_found_and_creates_nothing() {
        let (svc, _) = services();
        let err = svc.replace(42, payload()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_is_terminal_and_not_repeatable() {
        let (svc, _) = services();
        let created = svc.create(payload()).await.unwrap();

        svc.delete(created.id).await.unwrap();
        assert!(matches!(svc.get(created.id).await.unwrap_err(), ServiceError::NotFound(_)));
        assert!(matches!(svc.delete(created.id).await.unwrap_err(), ServiceError::NotFound(_)));

        // Unknown ids report the same way.
        assert!(matches!(svc.delete(999).await.unwrap_err(), ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn patch_changes_only_the_supplied_field() {
        let (svc, _) = services();
        let created = svc.create(payload()).await.unwrap();

        let patch = PropertyPatch { bedrooms: Some(4), ..Default::default() };
        let updated = svc.patch(created.id, patch).await.unwrap();

        assert_eq!(updated.bedrooms, 4);
        assert_eq!(updated.address, created.address);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.listed_date, created.listed_date);
    }

    #[tokio::test]
    async fn patch_revalidates_the_merged_record() {
        let (svc, _) = services();
        let created = svc.create(payload()).await.unwrap();

        let patch = PropertyPatch { bedrooms: Some(500), ..Default::default() };
        let err = svc.patch(created.id, patch).await.unwrap_err();
        match err {
            ServiceError::Validation(fields) => {
                assert_eq!(fields.as_slice()[0].field, "bedrooms");
            }
            other => panic!("unexpected error: {other}"),
        }
        // The stored row is untouched.
        assert_eq!(svc.get(created.id).await.unwrap().bedrooms, 2);
    }

    #[tokio::test]
    async fn unknown_realtor_reference_is_rejected() {
        let (svc, _) = services();
        let mut input = payload();
        input.realtor_id = Some(77);
        let err = svc.create(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn patch_can_detach_the_realtor_with_explicit_null() {
        let (svc, realtors) = services();
        let rid = seed_realtor(&realtors).await;

        let mut input = payload();
        input.realtor_id = Some(rid);
        let created = svc.create(input).await.unwrap();
        assert_eq!(created.realtor_id, Some(rid));

        let detach: PropertyPatch = serde_json::from_str(r#"{"realtorId": null}"#).unwrap();
        let updated = svc.patch(created.id, detach).await.unwrap();
        assert_eq!(updated.realtor_id, None);

        // An absent field leaves the reference alone.
        let keep: PropertyPatch = serde_json::from_str(r#"{"bedrooms": 3}"#).unwrap();
        let reattached = svc
            .patch(created.id, PropertyPatch { realtor_id: Some(Some(rid)), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(reattached.realtor_id, Some(rid));
        let untouched = svc.patch(created.id, keep).await.unwrap();
        assert_eq!(untouched.realtor_id, Some(rid));
    }

    #[tokio::test]
    async fn type_filter_matches_exactly() {
        let (svc, _) = services();
        svc.create(payload()).await.unwrap();
        let mut condo = payload();
        condo.property_type = "Condo".into();
        let created = svc.create(condo).await.unwrap();

        let found = svc.list_by_type("Condo").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, created.id);
        assert!(svc.list_by_type("Castle").await.unwrap().is_empty());
    }
}
