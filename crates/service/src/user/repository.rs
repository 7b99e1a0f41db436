use async_trait::async_trait;

use models::user;

use super::domain::UserDraft;
use crate::crud::Crud;
use crate::errors::ServiceError;

/// User store contract: generic CRUD plus the email lookup backing the
/// uniqueness rule and the by-email query.
#[async_trait]
pub trait UserRepository: Crud<Entity = user::Model, Draft = UserDraft> {
    async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError>;
}

/// Mutex-guarded in-memory store for tests and doc examples.
pub mod mock {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    pub struct MockUserRepository {
        state: Mutex<Store>,
    }

    #[derive(Default)]
    struct Store {
        next_id: i32,
        rows: BTreeMap<i32, user::Model>,
    }

    impl Store {
        fn materialize(&mut self, draft: UserDraft) -> user::Model {
            self.next_id += 1;
            user::Model {
                id: self.next_id,
                first_name: draft.first_name,
                last_name: draft.last_name,
                email: draft.email,
                phone_number: draft.phone_number,
                address: draft.address,
                created_date: Utc::now().into(),
                is_active: draft.is_active,
                deleted_at: None,
            }
        }
    }

    #[async_trait]
    impl Crud for MockUserRepository {
        type Entity = user::Model;
        type Draft = UserDraft;

        async fn list(&self) -> Result<Vec<user::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.values().filter(|m| m.deleted_at.is_none()).cloned().collect())
        }

        async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state.rows.get(&id).filter(|m| m.deleted_at.is_none()).cloned())
        }

        async fn insert(&self, draft: UserDraft) -> Result<user::Model, ServiceError> {
            let mut state = self.state.lock().unwrap();
            let created = state.materialize(draft);
            state.rows.insert(created.id, created.clone());
            Ok(created)
        }

        async fn replace(&self, id: i32, draft: UserDraft) -> Result<Option<user::Model>, ServiceError> {
            let mut state = self.state.lock().unwrap();
            match state.rows.get_mut(&id).filter(|m| m.deleted_at.is_none()) {
                None => Ok(None),
                Some(row) => {
                    row.first_name = draft.first_name;
                    row.last_name = draft.last_name;
                    row.email = draft.email;
                    row.phone_number = draft.phone_number;
                    row.address = draft.address;
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
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ServiceError> {
            let state = self.state.lock().unwrap();
            Ok(state
                .rows
                .values()
                .find(|m| m.deleted_at.is_none() && m.email == email)
                .cloned())
        }
    }
}
