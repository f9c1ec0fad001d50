//! # registrar-rest - Course Registry RESTful API
//!
//! This crate provides the HTTP layer of the Registrar course service. It
//! exposes CRUD operations over courses and students, with exact-match
//! filtering on the list endpoints, backed by any storage that implements the
//! persistence traits.
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern |
//! |-----------|-------------|-------------|
//! | list courses | GET | `/courses/` (optional `id`, `name` filters) |
//! | create course | POST | `/courses/` |
//! | retrieve course | GET | `/courses/{id}/` |
//! | update course | PATCH | `/courses/{id}/` |
//! | replace course | PUT | `/courses/{id}/` |
//! | delete course | DELETE | `/courses/{id}/` |
//! | list students | GET | `/students/` (optional `id`, `name` filters) |
//! | create student | POST | `/students/` |
//! | retrieve student | GET | `/students/{id}/` |
//! | update student | PATCH | `/students/{id}/` |
//! | replace student | PUT | `/students/{id}/` |
//! | delete student | DELETE | `/students/{id}/` |
//! | health | GET | `/health` |
//!
//! List endpoints return a JSON array; detail endpoints return a single JSON
//! object with at least `id` and `name`. Create and update bodies are
//! accepted as `application/json` or `application/x-www-form-urlencoded`.
//!
//! ## Error Handling
//!
//! Errors are returned as a JSON object with a `detail` field and an
//! appropriate HTTP status code:
//!
//! | HTTP Status | Description |
//! |-------------|-------------|
//! | 400 | Bad request / validation error |
//! | 404 | Resource not found |
//! | 415 | Unsupported media type |
//! | 500 | Internal server error |
//!
//! ## Configuration
//!
//! The server is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `REGISTRAR_SERVER_PORT` | 8080 | Server port |
//! | `REGISTRAR_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `REGISTRAR_LOG_LEVEL` | info | Log level (error, warn, info, debug, trace) |
//! | `REGISTRAR_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `REGISTRAR_ENABLE_CORS` | true | Enable CORS |
//! | `REGISTRAR_CORS_ORIGINS` | * | Allowed CORS origins |
//! | `REGISTRAR_DATABASE_URL` | registrar.db | Database path |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use registrar_rest::{ServerConfig, create_app};
//! use registrar_persistence::backends::sqlite::SqliteBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = SqliteBackend::open("registrar.db")?;
//!     backend.init_schema()?;
//!
//!     let app = create_app(backend);
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error responses
//! - [`config`] - Server configuration
//! - [`state`] - Application state (storage, configuration)
//! - [`handlers`] - HTTP request handlers for each operation
//! - [`extractors`] - Request-body extraction (JSON or urlencoded form)
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use registrar_persistence::core::{CourseStore, StudentStore};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// This is a convenience function that creates the app with default settings.
/// For more control, use [`create_app_with_config`].
pub fn create_app<S>(storage: S) -> Router
where
    S: CourseStore + StudentStore + Send + Sync + 'static,
{
    create_app_with_config(storage, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// This function sets up the complete REST API with all handlers,
/// middleware, and configuration.
///
/// # Example
///
/// ```rust,ignore
/// use registrar_rest::{ServerConfig, create_app_with_config};
/// use registrar_persistence::backends::sqlite::SqliteBackend;
///
/// let backend = SqliteBackend::in_memory()?;
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: true,
///     ..Default::default()
/// };
/// let app = create_app_with_config(backend, config);
/// ```
pub fn create_app_with_config<S>(storage: S, config: ServerConfig) -> Router
where
    S: CourseStore + StudentStore + Send + Sync + 'static,
{
    info!(
        "Creating REST API server with backend: {}",
        storage.backend_name()
    );

    let state = AppState::new(Arc::new(storage), config.clone());

    let router = routing::api_routes::create_routes(state);

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = if config.enable_cors {
        let cors = build_cors_layer(&config);
        router.layer(cors)
    } else {
        router
    };

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("registrar_rest={},tower_http=debug", level)));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
