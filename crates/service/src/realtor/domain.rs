use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ServiceError};

/// Inbound payload for create and full replace.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRealtor {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub agency: String,
    pub years_of_experience: i32,
    #[serde(default)]
    pub specialization: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Fully validated realtor record, minus the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct RealtorDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub agency: String,
    pub years_of_experience: i32,
    pub specialization: String,
    pub is_active: bool,
}

impl NewRealtor {
    pub fn into_draft(self) -> Result<RealtorDraft, ServiceError> {
        let mut errors = FieldErrors::new();
        errors.require_text("firstName", &self.first_name, 100);
        errors.require_text("lastName", &self.last_name, 100);
        errors.email("email", &self.email, 255);
        errors.require_text("phoneNumber", &self.phone_number, 20);
        errors.require_text("licenseNumber", &self.license_number, 50);
        errors.require_text("agency", &self.agency, 200);
        errors.range_i32("yearsOfExperience", self.years_of_experience, 0, 100);
        errors.limit_text("specialization", &self.specialization, 100);
        errors.into_result()?;

        Ok(RealtorDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone_number: self.phone_number,
            license_number: self.license_number,
            agency: self.agency,
            years_of_experience: self.years_of_experience,
            specialization: self.specialization,
            is_active: self.is_active,
        })
    }
}

/// Partial update: only the fields present in the request body are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RealtorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub license_number: Option<String>,
    pub agency: Option<String>,
    pub years_of_experience: Option<i32>,
    pub specialization: Option<String>,
    pub is_active: Option<bool>,
}

impl RealtorPatch {
    /// Applies only the provided fields to the stored snapshot, yielding the
    /// full payload that is then re-validated as a whole.
    pub fn apply(self, current: &models::realtor::Model) -> NewRealtor {
        NewRealtor {
            first_name: self.first_name.unwrap_or_else(|| current.first_name.clone()),
            last_name: self.last_name.unwrap_or_else(|| current.last_name.clone()),
            email: self.email.unwrap_or_else(|| current.email.clone()),
            phone_number: self.phone_number.unwrap_or_else(|| current.phone_number.clone()),
            license_number: self.license_number.unwrap_or_else(|| current.license_number.clone()),
            agency: self.agency.unwrap_or_else(|| current.agency.clone()),
            years_of_experience: self.years_of_experience.unwrap_or(current.years_of_experience),
            specialization: self.specialization.unwrap_or_else(|| current.specialization.clone()),
            is_active: self.is_active.unwrap_or(current.is_active),
        }
    }
}

/// Wire representation of a realtor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RealtorView {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub license_number: String,
    pub agency: String,
    pub years_of_experience: i32,
    pub specialization: String,
    pub is_active: bool,
}

impl From<models::realtor::Model> for RealtorView {
    fn from(m: models::realtor::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            last_name: m.last_name,
            email: m.email,
            phone_number: m.phone_number,
            license_number: m.license_number,
            agency: m.agency,
            years_of_experience: m.years_of_experience,
            specialization: m.specialization,
            is_active: m.is_active,
        }
    }
}
