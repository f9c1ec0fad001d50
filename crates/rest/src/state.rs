//! Application state for the Registrar REST API.
//!
//! This module defines the shared application state that is available to all
//! request handlers: the storage backend and the server configuration.

use std::sync::Arc;

use registrar_persistence::core::StorageBackend;

use crate::config::ServerConfig;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `S` - The storage backend type (must implement the persistence store
///   traits)
///
/// # Example
///
/// ```rust,ignore
/// use registrar_rest::{AppState, ServerConfig};
/// use registrar_persistence::backends::sqlite::SqliteBackend;
/// use std::sync::Arc;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig::default();
/// let state = AppState::new(Arc::new(backend), config);
/// ```
pub struct AppState<S> {
    /// The storage backend.
    storage: Arc<S>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since S is wrapped in Arc and doesn't need to be Clone
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            config: Arc::clone(&self.config),
        }
    }
}

impl<S: StorageBackend> AppState<S> {
    /// Creates a new AppState with the given storage and configuration.
    pub fn new(storage: Arc<S>, config: ServerConfig) -> Self {
        Self {
            storage,
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a clone of the storage Arc.
    pub fn storage_arc(&self) -> Arc<S> {
        Arc::clone(&self.storage)
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use registrar_persistence::core::{CourseStore, StorageBackend};
    use registrar_persistence::error::StorageResult;
    use registrar_persistence::types::{Course, CourseFilter, CourseUpdate, NewCourse};

    // Mock storage for testing
    struct MockStorage;

    impl StorageBackend for MockStorage {
        fn backend_name(&self) -> &'static str {
            "mock"
        }
    }

    #[async_trait]
    impl CourseStore for MockStorage {
        async fn create_course(&self, _new: NewCourse) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn get_course(&self, _id: i64) -> StorageResult<Option<Course>> {
            unimplemented!()
        }

        async fn list_courses(&self, _filter: &CourseFilter) -> StorageResult<Vec<Course>> {
            unimplemented!()
        }

        async fn update_course(&self, _id: i64, _patch: CourseUpdate) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn replace_course(&self, _id: i64, _new: NewCourse) -> StorageResult<Course> {
            unimplemented!()
        }

        async fn delete_course(&self, _id: i64) -> StorageResult<()> {
            unimplemented!()
        }

        async fn count_courses(&self) -> StorageResult<u64> {
            unimplemented!()
        }
    }

    #[test]
    fn test_app_state_creation() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);

        assert_eq!(state.storage().backend_name(), "mock");
        assert_eq!(state.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_app_state_config_access() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig {
            base_url: "https://registrar.example.com".to_string(),
            request_timeout: 10,
            ..Default::default()
        };
        let state = AppState::new(storage, config);

        assert_eq!(state.base_url(), "https://registrar.example.com");
        assert_eq!(state.config().request_timeout, 10);
    }

    #[test]
    fn test_app_state_clone() {
        let storage = Arc::new(MockStorage);
        let config = ServerConfig::default();
        let state = AppState::new(storage, config);
        let cloned = state.clone();

        assert_eq!(state.base_url(), cloned.base_url());
    }
}
