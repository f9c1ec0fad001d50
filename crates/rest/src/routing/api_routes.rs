//! Registrar route configuration.
//!
//! Defines all routes for the Registrar REST API. The resource routes use
//! the trailing-slash form; that is the public surface of the service.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use registrar_persistence::core::{CourseStore, StudentStore};

use crate::handlers;
use crate::state::AppState;

/// Creates all Registrar REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Courses
/// - `GET /courses/` - List (optional `id`, `name` filters)
/// - `POST /courses/` - Create
/// - `GET /courses/{id}/` - Retrieve
/// - `PATCH /courses/{id}/` - Partial update
/// - `PUT /courses/{id}/` - Replace
/// - `DELETE /courses/{id}/` - Delete
///
/// ## Students
/// - `GET /students/` - List (optional `id`, `name` filters)
/// - `POST /students/` - Create
/// - `GET /students/{id}/` - Retrieve
/// - `PATCH /students/{id}/` - Partial update
/// - `PUT /students/{id}/` - Replace
/// - `DELETE /students/{id}/` - Delete
pub fn create_routes<S>(state: AppState<S>) -> Router
where
    S: CourseStore + StudentStore + Send + Sync + 'static,
{
    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<S>))
        .route("/_liveness", get(handlers::health::liveness_handler))
        .route("/_readiness", get(handlers::health::readiness_handler::<S>))
        // Course routes
        .route("/courses/", get(handlers::course_list_handler::<S>))
        .route("/courses/", post(handlers::course_create_handler::<S>))
        .route("/courses/{id}/", get(handlers::course_read_handler::<S>))
        .route(
            "/courses/{id}/",
            patch(handlers::course_update_handler::<S>),
        )
        .route("/courses/{id}/", put(handlers::course_replace_handler::<S>))
        .route(
            "/courses/{id}/",
            delete(handlers::course_delete_handler::<S>),
        )
        // Student routes
        .route("/students/", get(handlers::student_list_handler::<S>))
        .route("/students/", post(handlers::student_create_handler::<S>))
        .route("/students/{id}/", get(handlers::student_read_handler::<S>))
        .route(
            "/students/{id}/",
            patch(handlers::student_update_handler::<S>),
        )
        .route(
            "/students/{id}/",
            put(handlers::student_replace_handler::<S>),
        )
        .route(
            "/students/{id}/",
            delete(handlers::student_delete_handler::<S>),
        )
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    // Route tests will be in integration tests
}
