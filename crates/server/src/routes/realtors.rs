use axum::extract::{Path, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use tracing::info;

use service::property::domain::PropertyView;
use service::realtor::domain::{NewRealtor, RealtorPatch, RealtorView};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/api/realtors", tag = "realtors",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<RealtorView>>, JsonApiError> {
    let rows = state.realtors.list().await?;
    info!(count = rows.len(), "list realtors");
    Ok(Json(rows.into_iter().map(RealtorView::from).collect()))
}

#[utoipa::path(
    get, path = "/api/realtors/{id}", tag = "realtors",
    params(("id" = i32, Path, description = "Realtor id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<RealtorView>, JsonApiError> {
    let found = state.realtors.get(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    get, path = "/api/realtors/{id}/properties", tag = "realtors",
    params(("id" = i32, Path, description = "Realtor id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn properties(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<PropertyView>>, JsonApiError> {
    let rows = state.realtors.properties(id).await?;
    Ok(Json(rows.into_iter().map(PropertyView::from).collect()))
}

#[utoipa::path(
    post, path = "/api/realtors", tag = "realtors",
    request_body = crate::openapi::NewRealtorDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewRealtor>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<RealtorView>), JsonApiError> {
    let created = state.realtors.create(input).await?;
    info!(id = created.id, "created realtor");
    let location = format!("/api/realtors/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created.into())))
}

#[utoipa::path(
    put, path = "/api/realtors/{id}", tag = "realtors",
    params(("id" = i32, Path, description = "Realtor id")),
    request_body = crate::openapi::NewRealtorDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Conflict"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<NewRealtor>,
) -> Result<Json<RealtorView>, JsonApiError> {
    let updated = state.realtors.replace(id, input).await?;
    info!(id = updated.id, "updated realtor");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch, path = "/api/realtors/{id}", tag = "realtors",
    params(("id" = i32, Path, description = "Realtor id")),
    request_body = crate::openapi::RealtorPatchDoc,
    responses(
        (status = 200, description = "Patched"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Not Found"),
        (status = 409, description = "Conflict"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn patch(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<RealtorPatch>,
) -> Result<Json<RealtorView>, JsonApiError> {
    let updated = state.realtors.patch(id, input).await?;
    info!(id = updated.id, "patched realtor");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/api/realtors/{id}", tag = "realtors",
    params(("id" = i32, Path, description = "Realtor id")),
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
    state.realtors.delete(id).await?;
    info!(id, "deleted realtor");
    Ok(StatusCode::NO_CONTENT)
}
