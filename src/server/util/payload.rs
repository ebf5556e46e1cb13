use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        FromRequest, Request,
    },
    http::header::CONTENT_TYPE,
    Form, Json, RequestExt,
};

use crate::server::error::AppError;

/// Request body accepted as either JSON or `application/x-www-form-urlencoded`.
///
/// Form bodies are selected by content type, everything else is parsed as JSON so a
/// missing or foreign content type surfaces the JSON rejection (415).
pub struct Payload<T>(pub T);

impl<T, S> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    Json<T>: FromRequest<(), Rejection = JsonRejection>,
    Form<T>: FromRequest<(), Rejection = FormRejection>,
    T: 'static,
{
    type Rejection = AppError;

    async fn from_request(req: Request, _state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = req.extract::<Form<T>, _>().await?;
            return Ok(Self(payload));
        }

        let Json(payload) = req.extract::<Json<T>, _>().await?;
        Ok(Self(payload))
    }
}
