use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::model::api::StatusDto;

pub static SYSTEM_TAG: &str = "system";

#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        "Server is deployed and running successfully.",
    )
}

/// Fallback for every method and path without a handler.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    let target = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    (
        StatusCode::NOT_FOUND,
        Json(StatusDto::failure(format!(
            "Route not found: {} {}",
            method, target
        ))),
    )
}
