//! Retrieve handlers.
//!
//! `GET /courses/{id}/` and `GET /students/{id}/`.

use axum::{
    Json,
    extract::{Path, State},
};
use registrar_persistence::core::{CourseStore, StudentStore};
use registrar_persistence::types::{Course, Student};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::state::AppState;

/// Handler for retrieving a single course.
///
/// # HTTP Request
///
/// `GET /courses/{id}/`
///
/// # Response
///
/// - `200 OK` - Course found, returns the course object
/// - `404 Not Found` - No course with that id
///
/// # Example
///
/// ```http
/// GET /courses/3/ HTTP/1.1
/// Host: registrar.example.com
/// ```
pub async fn course_read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> RestResult<Json<Course>>
where
    S: CourseStore + Send + Sync,
{
    debug!(id, "Processing course read request");

    match state.storage().get_course(id).await? {
        Some(course) => Ok(Json(course)),
        None => Err(RestError::NotFound {
            resource: "course",
            id,
        }),
    }
}

/// Handler for retrieving a single student.
///
/// # HTTP Request
///
/// `GET /students/{id}/`
pub async fn student_read_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> RestResult<Json<Student>>
where
    S: StudentStore + Send + Sync,
{
    debug!(id, "Processing student read request");

    match state.storage().get_student(id).await? {
        Some(student) => Ok(Json(student)),
        None => Err(RestError::NotFound {
            resource: "student",
            id,
        }),
    }
}
