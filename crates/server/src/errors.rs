use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use service::errors::{FieldError, ServiceError};

/// JSON error envelope returned by every API route:
/// `{"error", "detail", "fields"}`, with `fields` populated only for
/// validation failures.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub title: &'static str,
    pub detail: Option<String>,
    pub fields: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, title: &'static str, detail: Option<String>) -> Self {
        Self { status, title, detail, fields: Vec::new() }
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(fields) => Self {
                status: StatusCode::BAD_REQUEST,
                title: "Validation Error",
                detail: None,
                fields: fields.as_slice().to_vec(),
            },
            ServiceError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, "Not Found", Some(msg)),
            ServiceError::Conflict(msg) => Self::new(StatusCode::CONFLICT, "Conflict", Some(msg)),
            ServiceError::Db(msg) => {
                // Storage failures surface without driver detail.
                error!(err = %msg, "storage error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Storage Error", None)
            }
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.title,
            "detail": self.detail,
            "fields": self.fields,
        });
        (self.status, Json(body)).into_response()
    }
}
