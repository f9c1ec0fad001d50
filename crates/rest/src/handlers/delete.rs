//! Delete handlers.
//!
//! `DELETE /courses/{id}/` and `DELETE /students/{id}/`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use registrar_persistence::core::{CourseStore, StudentStore};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for deleting a course.
///
/// Removes the course and its enrollment links; the students themselves are
/// untouched.
///
/// # HTTP Request
///
/// `DELETE /courses/{id}/`
///
/// # Response
///
/// - `204 No Content` - Course deleted
/// - `404 Not Found` - No course with that id
///
/// # Example
///
/// ```http
/// DELETE /courses/3/ HTTP/1.1
/// Host: registrar.example.com
/// ```
pub async fn course_delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> RestResult<Response>
where
    S: CourseStore + Send + Sync,
{
    debug!(id, "Processing course delete request");

    state.storage().delete_course(id).await?;

    debug!(id, "Course deleted");

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Handler for deleting a student.
///
/// The student is removed from every course roster that references them.
///
/// # HTTP Request
///
/// `DELETE /students/{id}/`
pub async fn student_delete_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
) -> RestResult<Response>
where
    S: StudentStore + Send + Sync,
{
    debug!(id, "Processing student delete request");

    state.storage().delete_student(id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
