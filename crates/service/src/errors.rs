use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single field-level constraint violation, reported under the wire name
/// of the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulates field violations so a rejected payload reports every broken
/// field at once instead of the first one found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError { field, message: message.into() });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// Required, non-blank text with a maximum length.
    pub fn require_text(&mut self, field: &'static str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        } else if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
    }

    /// Optional text, length-checked only.
    pub fn limit_text(&mut self, field: &'static str, value: &str, max: usize) {
        if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        }
    }

    pub fn range_i32(&mut self, field: &'static str, value: i32, min: i32, max: i32) {
        if value < min || value > max {
            self.push(field, format!("must be between {min} and {max}"));
        }
    }

    pub fn at_least_i32(&mut self, field: &'static str, value: i32, min: i32) {
        if value < min {
            self.push(field, format!("must be at least {min}"));
        }
    }

    pub fn non_negative(&mut self, field: &'static str, value: rust_decimal::Decimal) {
        if value.is_sign_negative() {
            self.push(field, "must be zero or greater");
        }
    }

    /// Required text that must also look like an email address.
    pub fn email(&mut self, field: &'static str, value: &str, max: usize) {
        if value.trim().is_empty() {
            self.push(field, "is required");
        } else if value.chars().count() > max {
            self.push(field, format!("must be at most {max} characters"));
        } else if !looks_like_email(value) {
            self.push(field, "is not a valid email address");
        }
    }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Structural check only: one '@', non-empty local part, dotted domain.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || value.contains(char::is_whitespace) {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str, id: i32) -> Self {
        Self::NotFound(format!("{entity} {id} not found"))
    }

    /// Validation failure over a single field.
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(field, message);
        Self::Validation(errors)
    }

    pub fn db(e: impl fmt::Display) -> Self {
        Self::Db(e.to_string())
    }
}
