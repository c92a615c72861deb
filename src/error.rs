//! Error types for the blog insights server
//!
//! Provides the error taxonomy using thiserror, plus the conversion into
//! generic JSON error responses at the handler boundary.

use std::error::Error as StdError;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

// == Cache Error ==
#[derive(Error, Debug)]
pub enum CacheError {
    /// Key missing or its entry is stale
    #[error("Key not found: {0}")]
    NotFound(String),
}

// == Upstream Error ==
/// Failure while talking to the upstream blog provider.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure, timeout, or client construction failure
    #[error("Upstream request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("Upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Provider answered 2xx but the body was not a blog list
    #[error("Upstream response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),
}

// == Config Error ==
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or empty
    #[error("Missing required environment variable: {0}")]
    MissingSecret(&'static str),
}

// == App Error ==
/// Everything a request handler can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or invalid client input
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Upstream provider failure
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// A blog record is missing data the computation needs
    #[error("Invalid blog record: {0}")]
    InvalidRecord(String),
}

impl AppError {
    // == Into Api Error ==
    /// Logs the failure and converts it into a client-facing error.
    ///
    /// Bad requests keep their own message. Every other failure is
    /// reported with `failure_message` so no internal detail reaches the
    /// client.
    pub fn into_api_error(self, failure_message: &str) -> ApiError {
        match self {
            AppError::BadRequest(message) => {
                warn!(%message, "Rejected request");
                ApiError::new(StatusCode::BAD_REQUEST, message)
            }
            other => {
                let cause = other.source().map(|source| source.to_string());
                error!(error = %other, cause = ?cause, "Request failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, failure_message)
            }
        }
    }
}

// == Api Error ==
/// Status code plus the message returned as `{ "error": message }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse::new(self.message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handler internals.
pub type Result<T> = std::result::Result<T, AppError>;
