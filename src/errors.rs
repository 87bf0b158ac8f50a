//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion. Every error body is a JSON
//! object with at least an `error` key.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Client errors
    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Invalid UUID format for {field}: {value}")]
    InvalidIdentifier { field: &'static str, value: String },

    #[error("{entity} with ID {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("{0}")]
    Conflict(String),

    // Authentication & Authorization (no endpoint raises these yet)
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    /// Transport-level error passed through with its own status.
    #[error("{description}")]
    Http {
        status: StatusCode,
        description: String,
    },

    // Server errors
    /// Persistence failure caught at the resource boundary.
    #[error("Unexpected Error: {0}")]
    Unhandled(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("{0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            description: None,
            message: None,
        }
    }
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidIdentifier { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Http { status, .. } => *status,
            AppError::Unhandled(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            AppError::Validation(details) => ErrorResponse {
                details: serde_json::to_value(details).ok(),
                ..ErrorResponse::new("Validation failed")
            },
            AppError::InvalidIdentifier { .. }
            | AppError::NotFound { .. }
            | AppError::Conflict(_)
            | AppError::Unauthorized(_)
            | AppError::Forbidden(_) => ErrorResponse::new(self.to_string()),
            AppError::Http {
                status,
                description,
            } => ErrorResponse {
                description: Some(description.clone()),
                ..ErrorResponse::new(status.canonical_reason().unwrap_or("Unknown Error"))
            },
            AppError::Unhandled(detail) => {
                tracing::error!("Unhandled persistence failure: {}", detail);
                ErrorResponse {
                    details: Some(serde_json::Value::String(detail.clone())),
                    ..ErrorResponse::new("Unexpected Error")
                }
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_server_error(e.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_server_error(msg.clone())
            }
        }
    }
}

fn internal_server_error(message: String) -> ErrorResponse {
    ErrorResponse {
        message: Some(message),
        ..ErrorResponse::new("Internal Server Error")
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    /// Single-field validation failure.
    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut details = FieldErrors::new();
        details.insert(field.into(), vec![msg.into()]);
        AppError::Validation(details)
    }

    pub fn http(status: StatusCode, description: impl Into<String>) -> Self {
        AppError::Http {
            status,
            description: description.into(),
        }
    }

    pub fn unhandled(detail: impl Into<String>) -> Self {
        AppError::Unhandled(detail.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(err: &AppError) -> serde_json::Value {
        serde_json::to_value(err.body()).unwrap()
    }

    #[test]
    fn test_validation_error_carries_details() {
        let mut details = FieldErrors::new();
        details.insert("username".into(), vec!["too short".into()]);
        let err = AppError::Validation(details);

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        let body = body_json(&err);
        assert_eq!(body["error"], "Validation failed");
        assert_eq!(body["details"]["username"][0], "too short");
    }

    #[test]
    fn test_client_errors_use_message_as_error() {
        let err = AppError::InvalidIdentifier {
            field: "id",
            value: "nope".into(),
        };
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&err)["error"], "Invalid UUID format for id: nope");

        let err = AppError::NotFound {
            entity: "Users",
            id: "abc".into(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(&err)["error"], "Users with ID abc not found");
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(
            AppError::Unauthorized("no".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::Forbidden("no".into()).status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_http_pass_through() {
        let err = AppError::http(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
        assert_eq!(err.status(), StatusCode::METHOD_NOT_ALLOWED);
        let body = body_json(&err);
        assert_eq!(body["error"], "Method Not Allowed");
        assert_eq!(body["description"], "Method not allowed");
    }

    #[test]
    fn test_unhandled_carries_detail() {
        let err = AppError::unhandled("disk full");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(&err);
        assert_eq!(body["error"], "Unexpected Error");
        assert_eq!(body["details"], "disk full");
    }

    #[test]
    fn test_internal_uses_fixed_label() {
        let body = body_json(&AppError::internal("boom"));
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "boom");
    }
}
