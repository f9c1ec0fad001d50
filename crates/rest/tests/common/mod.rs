//! Shared infrastructure for API-level tests.

pub mod fixtures;

use std::sync::Arc;

use axum_test::TestServer;
use registrar_persistence::backends::sqlite::SqliteBackend;
use registrar_rest::{AppState, ServerConfig};

/// Creates an in-process test server over a fresh in-memory backend.
///
/// The backend is returned alongside the server so tests can seed data
/// directly through the storage traits.
pub fn create_test_server() -> (TestServer, Arc<SqliteBackend>) {
    let backend = SqliteBackend::in_memory().expect("Failed to create SQLite backend");
    backend.init_schema().expect("Failed to init schema");
    let backend = Arc::new(backend);

    let config = ServerConfig {
        base_url: "http://localhost:8080".to_string(),
        ..ServerConfig::for_testing()
    };

    let state = AppState::new(Arc::clone(&backend), config);
    let app = registrar_rest::routing::api_routes::create_routes(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, backend)
}
