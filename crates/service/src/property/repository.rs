use async_trait::async_trait;

use models::property;

use super::domain::PropertyDraft;
use crate::crud::Crud;
use crate::errors::ServiceError;

/// Property store contract: the generic CRUD capability set plus the
/// filtered reads the listing screens need.
#[async_trait]
pub trait PropertyRepository: Crud<Entity = property::Model, Draft = PropertyDraft> {
    async fn list_by_realtor(&self, realtor_id: i32) -> Result<Vec<property::Model>, ServiceError>;

    async fn list_by_type(&self, property_type: &str) -> Result<Vec<property::Model>, ServiceError>;

    /// Clears `realtor_id` on every live property of the given realtor,
    /// returning how many rows were touched.
    async fn detach_realtor(&self, realtor_id: i32) -> Result<u64, ServiceError>;
}

/// Mutex-guarded in-memory store for tests and doc examples. Id assignment
/// happens under the same lock as the mutation, and iteration follows id
/// order like the database-backed store.
pub mod mock {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct MockPropertyRepository {
        state: Mutex<Store>,
    }

    #[derive(Default)]
    struct Store {
        next_id: i32,
        rows: BTreeMap<i32, property::Model>,
    }

    impl Store {
        fn materialize(&mut self, draft: PropertyDraft) -> property::Model {
            self.next_id += 1;
            property::Model {
                id: self.next_id,
                address: draft.address,
                city: draft.city,
                state: draft.state,
                zip_code: draft.zip_code,
                price: draft.price,
                bedrooms: draft.bedrooms,
                bathrooms: draft.bathrooms,
                square_feet: draft.square_feet,
                property_type: draft.property_type,
                status: draft.status,
                realtor_id: draft.realtor_id,
                listed_date: draft.listed_date,
                description: draft.description,
                deleted_at: None,
            }
        }
    }

    #[async_trait]
    impl Crud for MockPropertyRepository {
        type Entity = property::Model;
        type Draft = PropertyDraft;

        async fn list(&self) -> Result<Vec<property::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().filter(|m| m.deleted_at.is_none()).cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<property::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).filter(|m| m.deleted_at.is_none()).cloned())
        }

        async fn insert(&self, draft: PropertyDraft) -> Result<property::Model, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let created = state.materialize(draft);
            state.rows.insert(created.id, created.clone());
            Ok(created)
        }

        async fn replace(&self, id: i32, draft: PropertyDraft) -> Result<Option<property::Model>, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id).filter(|m| m.deleted_at.is_none()) {
                None => Ok(None),
                Some(row) => {
                    row.address = draft.address;
                    row.city = draft.city;
                    row.state = draft.state;
                    row.zip_code = draft.zip_code;
                    row.price = draft.price;
                    row.bedrooms = draft.bedrooms;
                    row.bathrooms = draft.bathrooms;
                    row.square_feet = draft.square_feet;
                    row.property_type = draft.property_type;
                    row.status = draft.status;
                    row.realtor_id = draft.realtor_id;
                    row.listed_date = draft.listed_date;
                    row.description = draft.description;
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
    impl PropertyRepository for MockPropertyRepository {
        async fn list_by_realtor(&self, realtor_id: i32) -> Result<Vec<property::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .filter(|m| m.deleted_at.is_none() && m.realtor_id == Some(realtor_id))
                .cloned()
                .collect())
        }

        async fn list_by_type(&self, property_type: &str) -> Result<Vec<property::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .filter(|m| m.deleted_at.is_none() && m.property_type == property_type)
                .cloned()
                .collect())
        }

        async fn detach_realtor(&self, realtor_id: i32) -> Result<u64, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let mut touched = 0;
            for row in state.rows.values_mut() {
                if row.deleted_at.is_none() && row.realtor_id == Some(realtor_id) {
                    row.realtor_id = None;
                    touched += 1;
                }
            }
            Ok(touched)
        }
    }
}
