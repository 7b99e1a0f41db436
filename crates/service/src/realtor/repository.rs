use async_trait::async_trait;

use models::realtor;

use super::domain::RealtorDraft;
use crate::crud::Crud;
use crate::errors::ServiceError;

/// Realtor store contract: generic CRUD plus the lookups backing the
/// uniqueness rules on email and license number.
#[async_trait]
pub trait RealtorRepository: Crud<Entity = realtor::Model, Draft = RealtorDraft> {
    async fn find_by_email(&self, email: &str) -> Result<Option<realtor::Model>, ServiceError>;

    async fn find_by_license(&self, license_number: &str) -> Result<Option<realtor::Model>, ServiceError>;
}

/// Mutex-guarded in-memory store for tests and doc examples.
pub mod mock {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct MockRealtorRepository {
        state: Mutex<Store>,
    }

    #[derive(Default)]
    struct Store {
        next_id: i32,
        rows: BTreeMap<i32, realtor::Model>,
    }

    impl Store {
        fn materialize(&mut self, draft: RealtorDraft) -> realtor::Model {
            self.next_id += 1;
            realtor::Model {
                id: self.next_id,
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone_number: draft.phone_number,
                license_number: draft.license_number,
                agency: draft.agency,
                years_of_experience: draft.years_of_experience,
                specialization: draft.specialization,
                is_active: draft.is_active,
                deleted_at: None,
            }
        }
    }

    #[async_trait]
    impl Crud for MockRealtorRepository {
        type Entity = realtor::Model;
        type Draft = RealtorDraft;

        async fn list(&self) -> Result<Vec<realtor::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().filter(|m| m.deleted_at.is_none()).cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<realtor::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).filter(|m| m.deleted_at.is_none()).cloned())
        }

        async fn insert(&self, draft: RealtorDraft) -> Result<realtor::Model, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let created = state.materialize(draft);
            state.rows.insert(created.id, created.clone());
            Ok(created)
        }

        async fn replace(&self, id: i32, draft: RealtorDraft) -> Result<Option<realtor::Model>, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id).filter(|m| m.deleted_at.is_none()) {
                None => Ok(None),
                Some(row) => {
                    row.first_name = draft.first_name;
                    row.last_name = draft.last_name;
                    row.email = draft.email;
                    row.phone_number = draft.phone_number;
                    row.license_number = draft.license_number;
                    row.agency = draft.agency;
                    row.years_of_experience = draft.years_of_experience;
                    row.specialization = draft.specialization;
                    row.is_active = draft.is_active;
                    Ok(Some(row.clone()))
                }
            }
        }

        async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id).filter(|m| m.deleted_at.is_none()) {
                None => Ok(false),
                Some(row) => {
                    row.deleted_at = Some(Utc::now().into());
                    Ok(true)
                }
            }
        }

        async fn exists(&self, id: i32) -> Result<bool, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).is_some_and(|m| m.deleted_at.is_none()))
        }
    }

    #[async_trait]
    impl RealtorRepository for MockRealtorRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<realtor::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .find(|m| m.deleted_at.is_none() && m.email == email)
                .cloned())
        }

        async fn find_by_license(&self, license_number: &str) -> Result<Option<realtor::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .find(|m| m.deleted_at.is_none() && m.license_number == license_number)
                .cloned())
        }
    }
}
