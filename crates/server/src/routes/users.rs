use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderName, StatusCode};
use axum::Json;
use serde::Deserialize;
use tracing::info;

use service::user::domain::{NewUser, UserPatch, UserView};

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

#[utoipa::path(
    get, path = "/api/users", tag = "users",
    responses(
        (status = 200, description = "List OK"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<UserView>>, JsonApiError> {
    let rows = state.users.list().await?;
    info!(count = rows.len(), "list users");
    Ok(Json(rows.into_iter().map(UserView::from).collect()))
}

#[utoipa::path(
    get, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<UserView>, JsonApiError> {
    let found = state.users.get(id).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    get, path = "/api/users/by-email", tag = "users",
    params(EmailQuery),
    responses(
        (status = 200, description = "OK"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn by_email(
    State(state): State<ServerState>,
    Query(q): Query<EmailQuery>,
) -> Result<Json<UserView>, JsonApiError> {
    let found = state.users.get_by_email(&q.email).await?;
    Ok(Json(found.into()))
}

#[utoipa::path(
    post, path = "/api/users", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 201, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Conflict"),
        (status = 500, description = "Storage Error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewUser>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<UserView>), JsonApiError> {
    let created = state.users.create(input).await?;
    info!(id = created.id, "created user");
    let location = format!("/api/users/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created.into())))
}

#[utoipa::path(
    put, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::NewUserDoc,
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
    Json(input): Json<NewUser>,
) -> Result<Json<UserView>, JsonApiError> {
    let updated = state.users.replace(id, input).await?;
    info!(id = updated.id, "updated user");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    patch, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = crate::openapi::UserPatchDoc,
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
    Json(input): Json<UserPatch>,
) -> Result<Json<UserView>, JsonApiError> {
    let updated = state.users.patch(id, input).await?;
    info!(id = updated.id, "patched user");
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete, path = "/api/users/{id}", tag = "users",
    params(("id" = i32, Path, description = "User id")),
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
    state.users.delete(id).await?;
    info!(id, "deleted user");
    Ok(StatusCode::NO_CONTENT)
}
