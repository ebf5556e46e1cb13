use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by record handlers.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body carrying only a message.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

/// Body returned for unmatched routes, rejected payloads and unexpected failures.
///
/// `stack` is only populated in development mode.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl StatusDto {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            stack: None,
        }
    }
}
