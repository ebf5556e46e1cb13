use axum::{extract::Request, middleware::Next, response::Response};
use chrono::Utc;

/// Logs method, URI and arrival time of every request at info level.
///
/// Request headers are logged at debug level and only appear with `RUST_LOG=debug`.
pub async fn log_request(request: Request, next: Next) -> Response {
    tracing::info!(
        "[{}] {} {}",
        Utc::now().to_rfc3339(),
        request.method(),
        request.uri()
    );
    tracing::debug!("Headers: {:?}", request.headers());

    next.run(request).await
}
