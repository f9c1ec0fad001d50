//! Stored record types and mutation payloads.
//!
//! Records carry the server-assigned identifier and timestamps assigned by
//! the storage backend. The payload types ([`NewCourse`], [`CourseUpdate`],
//! and their student counterparts) describe what a caller may set; everything
//! else is owned by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A course as stored by the backend.
///
/// The `students` field holds the identifiers of all enrolled students,
/// sorted ascending. The relation is many-to-many: a student may appear in
/// any number of courses.
///
/// # Examples
///
/// ```
/// use registrar_persistence::types::Course;
/// use chrono::Utc;
///
/// let course = Course {
///     id: 1,
///     name: "Databases".to_string(),
///     students: vec![3, 5],
///     created_at: Utc::now(),
///     updated_at: Utc::now(),
/// };
/// assert_eq!(course.students, vec![3, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Server-assigned identifier (unique, monotonically increasing).
    pub id: i64,

    /// Course name.
    pub name: String,

    /// Identifiers of enrolled students, ascending.
    pub students: Vec<i64>,

    /// When the course was created.
    pub created_at: DateTime<Utc>,

    /// When the course was last modified.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a course.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewCourse {
    /// Course name (required, non-empty).
    pub name: String,

    /// Students to enroll at creation time. Every id must reference an
    /// existing student.
    #[serde(default)]
    pub students: Vec<i64>,
}

/// Partial-update payload for a course.
///
/// Fields left as `None` are untouched; a `Some` value replaces the stored
/// value wholesale (for `students`, the entire enrollment set).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CourseUpdate {
    /// New course name, if changing.
    pub name: Option<String>,

    /// New enrollment set, if changing.
    pub students: Option<Vec<i64>>,
}

impl CourseUpdate {
    /// Returns `true` if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.students.is_none()
    }
}

/// A student as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Server-assigned identifier.
    pub id: i64,

    /// Student name.
    pub name: String,

    /// When the student was created.
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    /// Student name (required, non-empty).
    pub name: String,
}

/// Partial-update payload for a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentUpdate {
    /// New student name, if changing.
    pub name: Option<String>,
}

impl StudentUpdate {
    /// Returns `true` if the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
