//! Core storage traits.
//!
//! This module defines the [`CourseStore`] and [`StudentStore`] traits, which
//! provide the typed CRUD operations the REST layer is built on. Backends
//! implement both; the shared [`StorageBackend`] supertrait carries backend
//! identity.

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{
    Course, CourseFilter, CourseUpdate, NewCourse, NewStudent, Student, StudentFilter,
    StudentUpdate,
};

/// Identity shared by every storage backend.
pub trait StorageBackend: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;
}

/// Storage operations for courses.
///
/// # Identifier assignment
///
/// `create_course` assigns the identifier; callers never choose ids. Deleting
/// a course removes its enrollment links but leaves the students themselves
/// untouched.
///
/// # Ordering
///
/// `list_courses` returns records in creation order (ascending id), so the
/// first element of an unfiltered list is always the oldest course.
///
/// # Example
///
/// ```ignore
/// use registrar_persistence::core::CourseStore;
/// use registrar_persistence::types::{CourseFilter, CourseUpdate, NewCourse};
///
/// async fn example<S: CourseStore>(storage: &S) -> Result<(), StorageError> {
///     let course = storage
///         .create_course(NewCourse { name: "Graph Theory".into(), students: vec![] })
///         .await?;
///
///     let found = storage
///         .list_courses(&CourseFilter::default().with_name("Graph Theory"))
///         .await?;
///     assert_eq!(found[0].id, course.id);
///
///     storage
///         .update_course(course.id, CourseUpdate { name: Some("Graphs".into()), students: None })
///         .await?;
///
///     storage.delete_course(course.id).await?;
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait CourseStore: StorageBackend {
    /// Creates a new course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(MissingRequiredField)` - empty name
    /// * `StorageError::Validation(UnknownStudent)` - enrollment references a
    ///   student that does not exist
    async fn create_course(&self, new: NewCourse) -> StorageResult<Course>;

    /// Reads a course by id.
    ///
    /// Returns `None` if no course with that id exists.
    async fn get_course(&self, id: i64) -> StorageResult<Option<Course>>;

    /// Lists courses matching the filter, in creation order.
    ///
    /// An empty filter returns every course.
    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>>;

    /// Applies a partial update to a course.
    ///
    /// Fields left as `None` in the patch are untouched. A `Some` students
    /// value replaces the whole enrollment set.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - no course with that id
    /// * `StorageError::Validation` - empty name or unknown student
    async fn update_course(&self, id: i64, patch: CourseUpdate) -> StorageResult<Course>;

    /// Replaces a course wholesale (PUT semantics).
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - no course with that id
    /// * `StorageError::Validation` - empty name or unknown student
    async fn replace_course(&self, id: i64, new: NewCourse) -> StorageResult<Course>;

    /// Deletes a course and its enrollment links.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - no course with that id
    async fn delete_course(&self, id: i64) -> StorageResult<()>;

    /// Counts stored courses.
    async fn count_courses(&self) -> StorageResult<u64>;
}

/// Storage operations for students.
///
/// Deleting a student removes them from every course roster that references
/// them.
#[async_trait]
pub trait StudentStore: StorageBackend {
    /// Creates a new student.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(MissingRequiredField)` - empty name
    async fn create_student(&self, new: NewStudent) -> StorageResult<Student>;

    /// Reads a student by id.
    async fn get_student(&self, id: i64) -> StorageResult<Option<Student>>;

    /// Lists students matching the filter, in creation order.
    async fn list_students(&self, filter: &StudentFilter) -> StorageResult<Vec<Student>>;

    /// Applies a partial update to a student.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - no student with that id
    async fn update_student(&self, id: i64, patch: StudentUpdate) -> StorageResult<Student>;

    /// Replaces a student wholesale (PUT semantics).
    async fn replace_student(&self, id: i64, new: NewStudent) -> StorageResult<Student>;

    /// Deletes a student, unenrolling them from every course.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - no student with that id
    async fn delete_student(&self, id: i64) -> StorageResult<()>;

    /// Counts stored students.
    async fn count_students(&self) -> StorageResult<u64>;
}
