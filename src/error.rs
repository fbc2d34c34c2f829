//! Error types shared by the timer, the to-do list and the HTTP layer

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Rejected timer settings input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Durations must be at least one minute
    #[error("{field} must be a positive number of minutes, got {value}")]
    NonPositive { field: &'static str, value: i64 },

    /// Durations are capped so the countdown stays meaningful
    #[error("{field} must be at most {max} minutes, got {value}")]
    TooLarge {
        field: &'static str,
        value: i64,
        max: u32,
    },
}

/// Application-level error returned by `AppState` operations
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid settings: {0}")]
    Validation(#[from] ValidationError),

    /// Settings body that does not decode to two integers
    #[error("Invalid settings: {0}")]
    MalformedSettings(String),

    /// A mutex was poisoned by a panicking holder
    #[error("Failed to lock {0}")]
    StatePoisoned(String),

    #[error("To-do list file error: {0}")]
    TodoIo(#[from] std::io::Error),

    #[error("To-do list format error: {0}")]
    TodoFormat(#[from] serde_json::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedSettings(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) | AppError::MalformedSettings(_) => StatusCode::BAD_REQUEST,
            _ => {
                error!("Request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
