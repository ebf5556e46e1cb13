use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        record::{create_record, delete_record, get_records, update_record},
        system::health,
    },
    docs::ApiDoc,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
        .nest("/api/data", record_router())
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}

fn record_router() -> Router<AppState> {
    Router::new()
        .route("/submit", post(create_record))
        .route("/data", get(get_records))
        .route("/data/{id}", put(update_record).delete(delete_record))
}
