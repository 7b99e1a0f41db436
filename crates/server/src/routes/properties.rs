use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use service::property::domain::{NewProperty, PropertyPatch, PropertyView};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Restrict to one property type (exact match).
    pub property_type: Option<String>,
    /// Restrict to the listings of one realtor; takes precedence over
    /// `propertyType` when both are present.
    pub realtor_id: Option<i32>,
}

#[utoipa::path(
    get, path = "/api/properties", tag = "properties",
    params(ListQuery),
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<PropertyView>>, JsonApiError> {
    let rows = match (q.realtor_id, q.property_type.as_deref()) {
        (Some(rid), _) => state.properties.list_by_realtor(rid).await?,
        (None, Some(kind)) => state.properties.list_by_type(kind).await?,
        (None, None) => state.properties.list().await?,
    };
    info!(count = rows.len(), "list properties");
    Ok(Json(rows.into_iter().map(PropertyView::from).collect()))
}

#[utoipa::path(
    get, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<PropertyView>, JsonApiError> {
    let found = state.properties.get(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    post, path = "/api/properties", tag = "properties",
    request_body = crate::openapi::NewPropertyDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewProperty>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<PropertyView>), JsonApiError> {
    let created = state.properties.create(input).await?;
    info!(id = created.id, "created property");
    let location = format!("/api/properties/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created.into())))
}

#[utoipa::path(
    put, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    request_body = crate::openapi::NewPropertyDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewProperty>,
) -> Result<Json<PropertyView>, JsonApiError> {
    let updated = state.properties.replace(id, input).await?;
    info!(id = updated.id, "updated property");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    request_body = crate::openapi::PropertyPatchDoc,
    responses(
        (status = 200, description = "Patched"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<PropertyPatch>,
) -> Result<Json<PropertyView>, JsonApiError> {
    let updated = state.properties.patch(id, input).await?;
    info!(id = updated.id, "patched property");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/api/properties/{id}", tag = "properties",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.properties.delete(id).await?;
    info!(id, "deleted property");
    Ok(StatusCode::NO_CONTENT)
}
