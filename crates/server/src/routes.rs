pub mod properties;
pub mod realtors;
pub mod users;

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: API routes, docs, health, and the
/// static single-page client as the fallback.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    let api = Router::new()
        .route("/api/properties", get(properties::list).post(properties::create))
        .route(
            "/api/properties/:id",
            get(properties::get)
                .put(properties::update)
                .patch(properties::patch)
                .delete(properties::delete),
        )
        .route("/api/realtors", get(realtors::list).post(realtors::create))
        .route(
            "/api/realtors/:id",
            get(realtors::get)
                .put(realtors::update)
                .patch(realtors::patch)
                .delete(realtors::delete),
        )
        .route("/api/realtors/:id/properties", get(realtors::properties))
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/users/by-email", get(users::by_email))
        .route(
            "/api/users/:id",
            get(users::get).put(users::update).patch(users::patch).delete(users::delete),
        )
        .with_state(state);

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(static_dir)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
