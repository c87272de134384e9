// Error types for the img2text service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("unknown model: {0}")]
    UnknownModel(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("upstream returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("config parsing error: {0}")]
    ConfigParsing(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

// Convert ServiceError to HTTP responses for Axum.
//
// The response body keeps the `{success: false, error}` envelope callers
// expect, but the status code distinguishes caller mistakes (400) from
// upstream failures (502/504) and local faults (500).
impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::UnknownModel(_) | ServiceError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Upstream { .. }
            | ServiceError::Network(_)
            | ServiceError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ServiceError::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ServiceError::Config(_)
            | ServiceError::ConfigParsing(_)
            | ServiceError::Io(_)
            | ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Upstream error bodies can echo our request headers; redact bearer
        // material before the message reaches the caller
        let body = json!({
            "success": false,
            "error": crate::utils::logging::sanitize(&self.to_string()),
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
