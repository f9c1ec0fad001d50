//! Update handlers.
//!
//! `PATCH /courses/{id}/` applies a partial update; `PUT /courses/{id}/`
//! replaces the record wholesale. Students get the same pair.

use axum::{
    Json,
    extract::{Path, State},
};
use registrar_persistence::core::{CourseStore, StudentStore};
use registrar_persistence::types::{
    Course, CourseUpdate, NewCourse, NewStudent, Student, StudentUpdate,
};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::Payload;
use crate::state::AppState;

/// Handler for partially updating a course.
///
/// Fields absent from the body are left untouched; a present `students`
/// array replaces the whole enrollment set.
///
/// # HTTP Request
///
/// `PATCH /courses/{id}/`
///
/// # Response
///
/// - `200 OK` - Course updated, body is the updated course
/// - `400 Bad Request` - Empty name or unknown student id
/// - `404 Not Found` - No course with that id
///
/// # Example
///
/// ```http
/// PATCH /courses/3/ HTTP/1.1
/// Host: registrar.example.com
/// Content-Type: application/json
///
/// {"name": "Operating Systems II"}
/// ```
pub async fn course_update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Payload(patch): Payload<CourseUpdate>,
) -> RestResult<Json<Course>>
where
    S: CourseStore + Send + Sync,
{
    debug!(id, "Processing course update request");

    let course = state.storage().update_course(id, patch).await?;

    debug!(id, name = %course.name, "Course updated");

    Ok(Json(course))
}

/// Handler for replacing a course.
///
/// # HTTP Request
///
/// `PUT /courses/{id}/`
///
/// The body carries the full course payload; omitted students clear the
/// enrollment set.
pub async fn course_replace_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Payload(new): Payload<NewCourse>,
) -> RestResult<Json<Course>>
where
    S: CourseStore + Send + Sync,
{
    debug!(id, "Processing course replace request");

    let course = state.storage().replace_course(id, new).await?;

    Ok(Json(course))
}

/// Handler for partially updating a student.
///
/// # HTTP Request
///
/// `PATCH /students/{id}/`
pub async fn student_update_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Payload(patch): Payload<StudentUpdate>,
) -> RestResult<Json<Student>>
where
    S: StudentStore + Send + Sync,
{
    debug!(id, "Processing student update request");

    let student = state.storage().update_student(id, patch).await?;

    Ok(Json(student))
}

/// Handler for replacing a student.
///
/// # HTTP Request
///
/// `PUT /students/{id}/`
pub async fn student_replace_handler<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<i64>,
    Payload(new): Payload<NewStudent>,
) -> RestResult<Json<Student>>
where
    S: StudentStore + Send + Sync,
{
    debug!(id, "Processing student replace request");

    let student = state.storage().replace_student(id, new).await?;

    Ok(Json(student))
}
