//! Error types for the persistence layer.
//!
//! This module defines all error types used throughout the persistence layer,
//! separated into resource-state errors, validation errors, and errors
//! originating from the database backend.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested record was not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: i64 },
}

/// Errors related to record validation.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Missing required field.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A field value failed validation.
    #[error("invalid value for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// An enrollment referenced a student that does not exist.
    #[error("unknown student: {id}")]
    UnknownStudent { id: i64 },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Connection pool exhausted.
    #[error("connection pool exhausted for {backend_name}")]
    PoolExhausted { backend_name: String },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    SerializationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            backend_name: "sqlite".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted {
            backend_name: "sqlite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_error_display() {
        let err = StorageError::Resource(ResourceError::NotFound {
            kind: "course",
            id: 42,
        });
        assert_eq!(err.to_string(), "course not found: 42");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::MissingRequiredField { field: "name" };
        assert_eq!(err.to_string(), "missing required field: name");

        let err = ValidationError::UnknownStudent { id: 7 };
        assert_eq!(err.to_string(), "unknown student: 7");
    }

    #[test]
    fn test_backend_error_display() {
        let err = BackendError::MigrationError {
            message: "bad schema".to_string(),
        };
        assert!(err.to_string().contains("schema migration failed"));
    }

    #[test]
    fn test_storage_error_from_validation() {
        let err: StorageError = ValidationError::MissingRequiredField { field: "name" }.into();
        assert!(matches!(err, StorageError::Validation(_)));
    }
}
