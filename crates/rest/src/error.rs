//! Error types for the Registrar REST API.
//!
//! This module defines all error types used throughout the REST layer, with
//! automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Storage errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes:
//!
//! | Storage Error | HTTP Status |
//! |---------------|-------------|
//! | Resource(NotFound) | 404 |
//! | Validation | 400 |
//! | Backend | 500 |
//!
//! Error responses carry a JSON body of the form `{"detail": "..."}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registrar_persistence::error::StorageError;
use std::fmt;
use tracing::error;

/// The primary error type for REST API operations.
///
/// This enum provides semantic error types that map cleanly to HTTP status
/// codes.
#[derive(Debug)]
pub enum RestError {
    /// Resource not found (HTTP 404).
    NotFound {
        /// The resource kind (e.g., "course").
        resource: &'static str,
        /// The resource ID.
        id: i64,
    },

    /// Bad request - validation error (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { resource, id } => {
                write!(f, "Resource not found: {}/{}", resource, id)
            }
            RestError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::InternalError { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            RestError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                format!("No {} matches the given id: {}", resource, id),
            ),
            RestError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            RestError::UnsupportedMediaType { content_type } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                format!("Unsupported media type: {}", content_type),
            ),
            RestError::InternalError { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message.clone())
            }
        };

        let body = serde_json::json!({ "detail": detail });

        (status, Json(body)).into_response()
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(resource_err) => {
                use registrar_persistence::error::ResourceError;
                match resource_err {
                    ResourceError::NotFound { kind, id } => {
                        RestError::NotFound { resource: kind, id }
                    }
                }
            }
            StorageError::Validation(validation_err) => RestError::BadRequest {
                message: validation_err.to_string(),
            },
            StorageError::Backend(backend_err) => {
                // Backend details stay in the log, not in the response.
                error!(error = %backend_err, "Storage backend error");
                RestError::InternalError {
                    message: "Internal storage error".to_string(),
                }
            }
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_persistence::error::{ResourceError, ValidationError};

    #[test]
    fn test_not_found_display() {
        let err = RestError::NotFound {
            resource: "course",
            id: 5,
        };
        assert_eq!(err.to_string(), "Resource not found: course/5");
    }

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let storage_err = StorageError::Resource(ResourceError::NotFound {
            kind: "course",
            id: 9,
        });
        let rest_err: RestError = storage_err.into();
        assert!(matches!(
            rest_err,
            RestError::NotFound {
                resource: "course",
                id: 9
            }
        ));
    }

    #[test]
    fn test_storage_validation_maps_to_400() {
        let storage_err =
            StorageError::Validation(ValidationError::MissingRequiredField { field: "name" });
        let rest_err: RestError = storage_err.into();
        assert!(matches!(rest_err, RestError::BadRequest { .. }));
    }

    #[test]
    fn test_into_response_status() {
        let response = RestError::NotFound {
            resource: "student",
            id: 1,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = RestError::BadRequest {
            message: "bad".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
