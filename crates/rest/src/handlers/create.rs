//! Create handlers.
//!
//! `POST /courses/` and `POST /students/`. The server assigns the record id
//! and returns it with a `Location` header.

use axum::{
    Json,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use axum::extract::State;
use registrar_persistence::core::{CourseStore, StudentStore};
use registrar_persistence::types::{NewCourse, NewStudent};
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::extractors::Payload;
use crate::state::AppState;

fn location_header(location: &str) -> RestResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    let value = location.parse().map_err(|_| RestError::InternalError {
        message: format!("Invalid Location header: {}", location),
    })?;
    headers.insert(header::LOCATION, value);
    Ok(headers)
}

/// Handler for creating a course.
///
/// # HTTP Request
///
/// `POST /courses/`
///
/// The body is `application/json` or `application/x-www-form-urlencoded`
/// with a required `name` field and an optional `students` array (JSON only).
///
/// # Response
///
/// - `201 Created` - Course created, body is the stored course, `Location`
///   points at its detail URL
/// - `400 Bad Request` - Missing name or unknown student id
/// - `415 Unsupported Media Type` - Body encoding not supported
///
/// # Example
///
/// ```http
/// POST /courses/ HTTP/1.1
/// Host: registrar.example.com
/// Content-Type: application/json
///
/// {"name": "Operating Systems", "students": [1, 2]}
/// ```
pub async fn course_create_handler<S>(
    State(state): State<AppState<S>>,
    Payload(new): Payload<NewCourse>,
) -> RestResult<Response>
where
    S: CourseStore + Send + Sync,
{
    debug!(name = %new.name, students = new.students.len(), "Processing course create request");

    let course = state.storage().create_course(new).await?;

    let location = format!("{}/courses/{}/", state.base_url(), course.id);
    let headers = location_header(&location)?;

    debug!(id = course.id, "Course created");

    Ok((StatusCode::CREATED, headers, Json(course)).into_response())
}

/// Handler for creating a student.
///
/// # HTTP Request
///
/// `POST /students/`
pub async fn student_create_handler<S>(
    State(state): State<AppState<S>>,
    Payload(new): Payload<NewStudent>,
) -> RestResult<Response>
where
    S: StudentStore + Send + Sync,
{
    debug!(name = %new.name, "Processing student create request");

    let student = state.storage().create_student(new).await?;

    let location = format!("{}/students/{}/", state.base_url(), student.id);
    let headers = location_header(&location)?;

    debug!(id = student.id, "Student created");

    Ok((StatusCode::CREATED, headers, Json(student)).into_response())
}
