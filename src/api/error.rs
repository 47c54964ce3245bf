use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::brawl::client::UpstreamError;
use crate::brawl::time::FormatError;

#[derive(Debug)]
pub enum ApiError {
    /// Missing, malformed, or cryptographically invalid request signature.
    FailedSignature(String),
    /// Unrecognized command name or interaction type.
    UnhandledCommand(String),
    /// Unparsable interaction body.
    BadRequest(String),
    /// Network failure, non-2xx status, or malformed JSON from the Brawl
    /// Stars API.
    Upstream(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::FailedSignature(msg) => write!(f, "Failed signature: {}", msg),
            ApiError::UnhandledCommand(msg) => write!(f, "Unhandled command: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::FailedSignature(msg) => (StatusCode::UNAUTHORIZED, "failed signature", msg),
            ApiError::UnhandledCommand(msg) => (StatusCode::BAD_REQUEST, "unhandled command", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad request", msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream error", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal error", msg),
        };

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        ApiError::Upstream(err.to_string())
    }
}

impl From<FormatError> for ApiError {
    fn from(err: FormatError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
