//! List handlers.
//!
//! `GET /courses/` and `GET /students/` with optional exact-match filters.

use axum::{
    Json,
    extract::{Query, State},
};
use registrar_persistence::core::{CourseStore, StudentStore};
use registrar_persistence::types::{Course, CourseFilter, Student, StudentFilter};
use serde::Deserialize;
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Query parameters for the course list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct CourseQuery {
    /// Match a single course by identifier.
    pub id: Option<i64>,

    /// Match courses by exact name.
    pub name: Option<String>,
}

/// Query parameters for the student list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct StudentQuery {
    /// Match a single student by identifier.
    pub id: Option<i64>,

    /// Match students by exact name.
    pub name: Option<String>,
}

/// Handler for listing courses.
///
/// Returns every course as a JSON array, in creation order. The optional
/// `id` and `name` query parameters restrict the result to exact matches.
///
/// # HTTP Request
///
/// `GET /courses/?id=...&name=...`
///
/// # Response
///
/// - `200 OK` - JSON array of courses (possibly empty)
///
/// # Example
///
/// ```http
/// GET /courses/?name=Databases HTTP/1.1
/// Host: registrar.example.com
/// ```
pub async fn course_list_handler<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<CourseQuery>,
) -> RestResult<Json<Vec<Course>>>
where
    S: CourseStore + Send + Sync,
{
    debug!(id = ?query.id, name = ?query.name, "Processing course list request");

    let filter = CourseFilter {
        id: query.id,
        name: query.name,
    };
    let courses = state.storage().list_courses(&filter).await?;

    debug!(count = courses.len(), "Courses listed");

    Ok(Json(courses))
}

/// Handler for listing students.
///
/// Same filter semantics as [`course_list_handler`].
///
/// # HTTP Request
///
/// `GET /students/?id=...&name=...`
pub async fn student_list_handler<S>(
    State(state): State<AppState<S>>,
    Query(query): Query<StudentQuery>,
) -> RestResult<Json<Vec<Student>>>
where
    S: StudentStore + Send + Sync,
{
    debug!(id = ?query.id, name = ?query.name, "Processing student list request");

    let filter = StudentFilter {
        id: query.id,
        name: query.name,
    };
    let students = state.storage().list_students(&filter).await?;

    Ok(Json(students))
}
