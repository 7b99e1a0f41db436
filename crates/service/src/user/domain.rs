use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ServiceError};

/// Inbound payload for create and full replace. The creation date is
/// server-assigned and never accepted from the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Fully validated user record, minus the identifier and creation date.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub is_active: bool,
}

impl NewUser {
    pub fn into_draft(self) -> Result<UserDraft, ServiceError> {
        let mut errors = FieldErrors::new();
        errors.require_text("firstName", &self.first_name, 100);
        errors.require_text("lastName", &self.last_name, 100);
        errors.email("email", &self.email, 255);
        errors.limit_text("phoneNumber", &self.phone_number, 20);
        errors.limit_text("address", &self.address, 200);
        errors.into_result()?;

        Ok(UserDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            is_active: self.is_active,
        })
    }
}

/// Partial update: only the fields present in the request body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
}

impl UserPatch {
    /// Applies only the provided fields to the stored snapshot, yielding the
    /// full payload that is then re-validated as a whole.
    pub fn apply(self, current: &models::user::Model) -> NewUser {
        NewUser {
            first_name: self.first_name.unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            phone_number: self.phone_number.unwrap_or_else(|| current.phone_number.clone()),
            address: self.address.unwrap_or_else(|| current.address.clone()),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}

/// Wire representation of a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub created_date: DateTimeWithTimeZone,
    pub is_active: bool,
}

impl From<models::user::Model> for UserView {
    fn from(m: models::user::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone_number: m.phone_number,
            address: m.address,
            created_date: m.created_date,
            is_active: m.is_active,
        }
    }
}
