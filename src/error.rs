//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! The three generation outcomes callers can observe are `Validation`,
//! `UpstreamEmptyResponse` and `Upstream`; everything else is plumbing that
//! the service folds into `Upstream` before it crosses the HTTP boundary.

use crate::models::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Message returned to callers for every upstream failure.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Failed to generate tweet";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("No response received from model")]
    UpstreamEmptyResponse,

    #[error("Failed to generate tweet")]
    Upstream,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] dotenvy::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message a caller is allowed to see.
    pub fn public_message(&self) -> String {
        match self {
            Error::Validation(msg) => msg.clone(),
            _ => UPSTREAM_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.public_message(),
        });
        (self.status_code(), body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
