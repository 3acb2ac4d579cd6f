/// Error types for the blog service
///
/// Errors are converted to appropriate HTTP responses for API clients.
/// Validation failures carry per-field messages; not-found responses have
/// no body.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Per-field validation messages, keyed by the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0.entry(field.to_string()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Ok when no messages were collected, otherwise a `Validation` error.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self))
        }
    }
}

/// Application error types
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Input failed validation; carries per-field messages
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Malformed request outside field validation (e.g. id mismatch)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Resource not found
    #[error("Not found")]
    NotFound,

    /// Missing, invalid, or orphaned credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Operation rejected by a storage constraint
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Validation error with a single field message.
    pub fn validation_field(field: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.push(field, message);
        AppError::Validation(errors)
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            // Not-found responses carry no body.
            AppError::NotFound => HttpResponse::NotFound().finish(),
            AppError::Validation(errors) => {
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Validation failed",
                    "status": status.as_u16(),
                    "errors": errors,
                }))
            }
            // A single undifferentiated rejection for every credential
            // failure, orphaned tokens included.
            AppError::Unauthorized(reason) => {
                tracing::debug!("unauthorized request: {}", reason);
                HttpResponse::build(status).json(serde_json::json!({
                    "error": "Unauthorized",
                    "status": status.as_u16(),
                }))
            }
            other => HttpResponse::build(status).json(serde_json::json!({
                "error": other.to_string(),
                "status": status.as_u16(),
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
