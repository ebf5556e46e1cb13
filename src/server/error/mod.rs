//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, StatusDto},
    server::error::config::ConfigError,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Startup-only variants (`ConfigErr`, `IoErr`)
/// are returned from `main` and never reach a client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM not attributed to a record operation.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O failure while binding listeners or reading TLS material.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Record store failure during a specific operation.
    ///
    /// Results in 500 Internal Server Error. `source` is logged, only `message`
    /// is returned to the client.
    ///
    /// # Fields
    /// - `message` - Client-facing description of the failed operation
    /// - `source` - Underlying database error
    #[error("{message}: {source}")]
    StoreErr {
        message: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// JSON request body could not be parsed into the expected shape.
    ///
    /// Results in the rejection's own status (400, 415 or 422).
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// Form-encoded request body could not be parsed into the expected shape.
    ///
    /// Results in the rejection's own status (400, 415 or 422).
    #[error(transparent)]
    FormRejection(#[from] FormRejection),
}

impl AppError {
    /// Wraps a database error raised by the given record operation.
    pub fn store(message: &'static str) -> impl FnOnce(sea_orm::DbErr) -> Self {
        move |source| Self::StoreErr { message, source }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400/415/422 - For body rejections, using the `{success, message}` shape
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For `StoreErr` with its operation message, and a
///   generic message for every other variant
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::StoreErr { message, source } => {
                tracing::error!("{}: {}", message, source);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: message.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected JSON body: {}", rejection.body_text());
                (
                    rejection.status(),
                    Json(StatusDto::failure(rejection.body_text())),
                )
                    .into_response()
            }
            Self::FormRejection(rejection) => {
                tracing::debug!("Rejected form body: {}", rejection.body_text());
                (
                    rejection.status(),
                    Json(StatusDto::failure(rejection.body_text())),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
