use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::errors::{FieldErrors, ServiceError};
use crate::patch::double_option;

/// Status applied when a create payload leaves it unspecified.
pub const DEFAULT_STATUS: &str = "Available";

/// Inbound payload for create and full replace. Identifier and bookkeeping
/// columns are always server-controlled.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: i32,
    pub property_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub realtor_id: Option<i32>,
    #[serde(default)]
    pub listed_date: Option<DateTimeWithTimeZone>,
    #[serde(default)]
    pub description: String,
}

/// Fully validated and defaulted property record, minus the identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub price: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: i32,
    pub property_type: String,
    pub status: String,
    pub realtor_id: Option<i32>,
    pub listed_date: DateTimeWithTimeZone,
    pub description: String,
}

impl NewProperty {
    /// Validates every field, reporting all violations together, and applies
    /// the create-time defaults: status falls back to "Available", the
    /// listing date to the current time.
    pub fn into_draft(self) -> Result<PropertyDraft, ServiceError> {
        let mut errors = FieldErrors::new();
        errors.require_text("address", &self.address, 200);
        errors.require_text("city", &self.city, 100);
        errors.require_text("state", &self.state, 50);
        errors.require_text("zipCode", &self.zip_code, 10);
        errors.non_negative("price", self.price);
        errors.range_i32("bedrooms", self.bedrooms, 0, 100);
        errors.range_i32("bathrooms", self.bathrooms, 0, 100);
        errors.at_least_i32("squareFeet", self.square_feet, 0);
        errors.require_text("propertyType", &self.property_type, 50);

        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_STATUS.to_string(),
            Some(s) => s.to_string(),
        };
        errors.limit_text("status", &status, 50);
        errors.limit_text("description", &self.description, 2000);
        errors.into_result()?;

        Ok(PropertyDraft {
            address: self.address,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
            price: self.price,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
            property_type: self.property_type,
            status,
            realtor_id: self.realtor_id,
            listed_date: self.listed_date.unwrap_or_else(|| Utc::now().into()),
            description: self.description,
        })
    }
}

/// Partial update: only the fields present in the request body are applied.
/// `realtorId` distinguishes "absent" from an explicit null (detach).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyPatch {
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub square_feet: Option<i32>,
    pub property_type: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub realtor_id: Option<Option<i32>>,
    pub listed_date: Option<DateTimeWithTimeZone>,
    pub description: Option<String>,
}

impl PropertyPatch {
    /// Applies only the provided fields to the stored snapshot, yielding the
    /// full payload that is then re-validated as a whole.
    pub fn apply(self, current: &models::property::Model) -> NewProperty {
        NewProperty {
            address: self.address.unwrap_or_else(|| current.address.clone()),
            city: self.city.unwrap_or_else(|| current.city.clone()),
            state: self.state.unwrap_or_else(|| current.state.clone()),
            zip_code: self.zip_code.unwrap_or_else(|| current.zip_code.clone()),
            price: self.price.unwrap_or(current.price),
            bedrooms: self.bedrooms.unwrap_or(current.bedrooms),
            bathrooms: self.bathrooms.unwrap_or(current.bathrooms),
            square_feet: self.square_feet.unwrap_or(current.square_feet),
            property_type: self.property_type.unwrap_or_else(|| current.property_type.clone()),
            status: Some(self.status.unwrap_or_else(|| current.status.clone())),
            realtor_id: self.realtor_id.unwrap_or(current.realtor_id),
            listed_date: Some(self.listed_date.unwrap_or(current.listed_date)),
            description: self.description.unwrap_or_else(|| current.description.clone()),
        }
    }
}

/// Wire representation of a property; bookkeeping columns stay internal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyView {
    pub id: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub square_feet: i32,
    pub property_type: String,
    pub status: String,
    pub realtor_id: Option<i32>,
    pub listed_date: DateTimeWithTimeZone,
    pub description: String,
}

impl From<models::property::Model> for PropertyView {
    fn from(m: models::property::Model) -> Self {
        Self {
            id: m.id,
            address: m.address,
            city: m.city,
            state: m.state,
            zip_code: m.zip_code,
            price: m.price,
            bedrooms: m.bedrooms,
            bathrooms: m.bathrooms,
            square_feet: m.square_feet,
            property_type: m.property_type,
            status: m.status,
            realtor_id: m.realtor_id,
            listed_date: m.listed_date,
            description: m.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> NewProperty {
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

    #[test]
    fn defaults_apply_when_unspecified() {
        let draft = valid_payload().into_draft().unwrap();
        assert_eq!(draft.status, DEFAULT_STATUS);
        let age = Utc::now().signed_duration_since(draft.listed_date.with_timezone(&Utc));
        assert!(age.num_seconds().abs() < 5);
    }

    #[test]
    fn blank_status_counts_as_unspecified() {
        let mut payload = valid_payload();
        payload.status = Some("  ".into());
        assert_eq!(payload.into_draft().unwrap().status, DEFAULT_STATUS);
    }

    #[test]
    fn explicit_status_kept() {
        let mut payload = valid_payload();
        payload.status = Some("Pending".into());
        assert_eq!(payload.into_draft().unwrap().status, "Pending");
    }

    #[test]
    fn reports_all_invalid_fields() {
        let mut payload = valid_payload();
        payload.address = String::new();
        payload.price = Decimal::new(-1, 0);
        payload.bathrooms = 250;
        let err = payload.into_draft().unwrap_err();
        match err {
            ServiceError::Validation(fields) => {
                let names: Vec<_> = fields.as_slice().iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["address", "price", "bathrooms"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn patch_distinguishes_missing_from_null_realtor() {
        let absent: PropertyPatch = serde_json::from_str(r#"{"bedrooms": 3}"#).unwrap();
        assert_eq!(absent.realtor_id, None);

        let null: PropertyPatch = serde_json::from_str(r#"{"realtorId": null}"#).unwrap();
        assert_eq!(null.realtor_id, Some(None));

        let set: PropertyPatch = serde_json::from_str(r#"{"realtorId": 7}"#).unwrap();
        assert_eq!(set.realtor_id, Some(Some(7)));
    }

    #[test]
    fn patch_rejects_undeclared_fields() {
        let res: Result<PropertyPatch, _> = serde_json::from_str(r#"{"op": "replace"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let stored = models::property::Model {
            id: 9,
            address: "1 Main St".into(),
            city: "Springfield".into(),
            state: "IL".into(),
            zip_code: "62701".into(),
            price: Decimal::new(100_000, 0),
            bedrooms: 2,
            bathrooms: 1,
            square_feet: 900,
            property_type: "House".into(),
            status: "Available".into(),
            realtor_id: Some(3),
            listed_date: Utc::now().into(),
            description: "starter home".into(),
            deleted_at: None,
        };
        let patch = PropertyPatch { bedrooms: Some(4), ..Default::default() };
        let merged = patch.apply(&stored).into_draft().unwrap();
        assert_eq!(merged.bedrooms, 4);
        assert_eq!(merged.address, stored.address);
        assert_eq!(merged.realtor_id, Some(3));
        assert_eq!(merged.status, "Available");
        assert_eq!(merged.listed_date, stored.listed_date);
    }
}
