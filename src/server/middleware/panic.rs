use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::StatusDto, server::config::Environment};

/// Builds the response used by `CatchPanicLayer` when a handler panics.
///
/// The panic detail is always logged and only echoed to the client as `stack`
/// in development mode.
pub fn panic_handler(
    environment: Environment,
) -> impl Fn(Box<dyn Any + Send + 'static>) -> Response + Clone {
    move |err| {
        let detail = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic payload".to_string()
        };

        tracing::error!("Global error handler triggered: {}", detail);

        let mut body = StatusDto::failure("Internal Server Error");
        if environment.is_development() {
            body.stack = Some(detail);
        }

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
