//! CourseStore and StudentStore implementations for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};
use tracing::debug;

use crate::core::{CourseStore, StudentStore};
use crate::error::{
    BackendError, ResourceError, StorageError, StorageResult, ValidationError,
};
use crate::types::{
    Course, CourseFilter, CourseUpdate, NewCourse, NewStudent, Student, StudentFilter,
    StudentUpdate,
};

use super::SqliteBackend;

fn not_found(kind: &'static str, id: i64) -> StorageError {
    StorageError::Resource(ResourceError::NotFound { kind, id })
}

fn parse_timestamp(raw: &str) -> StorageResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            StorageError::Backend(BackendError::SerializationError {
                message: format!("invalid timestamp {:?}: {}", raw, e),
            })
        })
}

fn validate_name(name: &str) -> StorageResult<()> {
    if name.trim().is_empty() {
        return Err(StorageError::Validation(
            ValidationError::MissingRequiredField { field: "name" },
        ));
    }
    Ok(())
}

/// Sorted, deduplicated enrollment set. Stored rosters are always ascending.
fn normalized_student_ids(ids: &[i64]) -> Vec<i64> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids.dedup();
    ids
}

fn ensure_students_exist(conn: &Connection, ids: &[i64]) -> StorageResult<()> {
    let mut stmt = conn.prepare("SELECT 1 FROM students WHERE id = ?1")?;
    for id in ids {
        if !stmt.exists([*id])? {
            return Err(StorageError::Validation(ValidationError::UnknownStudent {
                id: *id,
            }));
        }
    }
    Ok(())
}

fn insert_enrollments(conn: &Connection, course_id: i64, student_ids: &[i64]) -> StorageResult<()> {
    let mut stmt =
        conn.prepare("INSERT INTO course_students (course_id, student_id) VALUES (?1, ?2)")?;
    for student_id in student_ids {
        stmt.execute(params![course_id, student_id])?;
    }
    Ok(())
}

fn replace_enrollments(conn: &Connection, course_id: i64, student_ids: &[i64]) -> StorageResult<()> {
    conn.execute(
        "DELETE FROM course_students WHERE course_id = ?1",
        [course_id],
    )?;
    insert_enrollments(conn, course_id, student_ids)
}

fn load_course_students(conn: &Connection, course_id: i64) -> StorageResult<Vec<i64>> {
    let mut stmt = conn.prepare(
        "SELECT student_id FROM course_students WHERE course_id = ?1 ORDER BY student_id",
    )?;
    let ids = stmt
        .query_map([course_id], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    Ok(ids)
}

/// Raw course row: (id, name, created_at, updated_at).
type CourseRow = (i64, String, String, String);

fn build_course(conn: &Connection, row: CourseRow) -> StorageResult<Course> {
    let (id, name, created_at, updated_at) = row;
    Ok(Course {
        id,
        name,
        students: load_course_students(conn, id)?,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}

#[async_trait]
impl CourseStore for SqliteBackend {
    async fn create_course(&self, new: NewCourse) -> StorageResult<Course> {
        validate_name(&new.name)?;
        let students = normalized_student_ids(&new.students);

        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        ensure_students_exist(&tx, &students)?;

        let now = Utc::now();
        let stamp = now.to_rfc3339();
        tx.execute(
            "INSERT INTO courses (name, created_at, updated_at) VALUES (?1, ?2, ?3)",
            params![new.name, stamp, stamp],
        )?;
        let id = tx.last_insert_rowid();

        insert_enrollments(&tx, id, &students)?;
        tx.commit()?;

        debug!(id, name = %new.name, "Course created");

        Ok(Course {
            id,
            name: new.name,
            students,
            created_at: now,
            updated_at: now,
        })
    }

    async fn get_course(&self, id: i64) -> StorageResult<Option<Course>> {
        let conn = self.get_connection()?;

        let row: Option<CourseRow> = conn
            .query_row(
                "SELECT id, name, created_at, updated_at FROM courses WHERE id = ?1",
                [id],
                |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
                },
            )
            .optional()?;

        match row {
            Some(row) => Ok(Some(build_course(&conn, row)?)),
            None => Ok(None),
        }
    }

    async fn list_courses(&self, filter: &CourseFilter) -> StorageResult<Vec<Course>> {
        let conn = self.get_connection()?;

        let mut sql = String::from("SELECT id, name, created_at, updated_at FROM courses");
        let mut clauses: Vec<&str> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();

        if let Some(id) = filter.id {
            clauses.push("id = ?");
            bindings.push(Value::Integer(id));
        }
        if let Some(name) = &filter.name {
            clauses.push("name = ?");
            bindings.push(Value::Text(name.clone()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows: Vec<CourseRow> = stmt
            .query_map(params_from_iter(bindings), |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);

        let mut courses = Vec::with_capacity(rows.len());
        for row in rows {
            courses.push(build_course(&conn, row)?);
        }

        debug!(count = courses.len(), "Courses listed");

        Ok(courses)
    }

    async fn update_course(&self, id: i64, patch: CourseUpdate) -> StorageResult<Course> {
        let mut conn = self.get_connection()?;
        let tx = conn.transaction()?;

        let current: Option<(String, String)> = tx
            .query_row(
                "SELECT name, created_at FROM courses WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let (current_name, created_at) = current.ok_or_else(|| not_found("course", id))?;

        let name = patch.name.unwrap_or(current_name);
        validate_name(&name)?;

        let students = match patch.students {
            Some(ids) => {
                let ids = normalized_student_ids(&ids);
                ensure_students_exist(&tx, &ids)?;
                replace_enrollments(&tx, id, &ids)?;
                ids
            }
            None => load_course_students(&tx, id)?,
        };

        let now = Utc::now();
        tx.execute(
            "UPDATE courses SET name = ?1, updated_at = ?2 WHERE id = ?3",
            params![name, now.to_rfc3339(), id],
        )?;
        tx.commit()?;

        debug!(id, name = %name, "Course updated");

        Ok(Course {
            id,
            name,
            students,
            created_at: parse_timestamp(&created_at)?,
            updated_at: now,
        })
    }

    async fn replace_course(&self, id: i64, new: NewCourse) -> StorageResult<Course> {
        self.update_course(
            id,
            CourseUpdate {
                name: Some(new.name),
                students: Some(new.students),
            },
        )
        .await
    }

    async fn delete_course(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        // Enrollment links go with the course via ON DELETE CASCADE.
        let affected = conn.execute("DELETE FROM courses WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(not_found("course", id));
        }

        debug!(id, "Course deleted");

        Ok(())
    }

    async fn count_courses(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[async_trait]
impl StudentStore for SqliteBackend {
    async fn create_student(&self, new: NewStudent) -> StorageResult<Student> {
        validate_name(&new.name)?;

        let conn = self.get_connection()?;
        let now = Utc::now();
        conn.execute(
            "INSERT INTO students (name, created_at) VALUES (?1, ?2)",
            params![new.name, now.to_rfc3339()],
        )?;
        let id = conn.last_insert_rowid();

        debug!(id, name = %new.name, "Student created");

        Ok(Student {
            id,
            name: new.name,
            created_at: now,
        })
    }

    async fn get_student(&self, id: i64) -> StorageResult<Option<Student>> {
        let conn = self.get_connection()?;

        let row: Option<(i64, String, String)> = conn
            .query_row(
                "SELECT id, name, created_at FROM students WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?;

        match row {
            Some((id, name, created_at)) => Ok(Some(Student {
                id,
                name,
                created_at: parse_timestamp(&created_at)?,
            })),
            None => Ok(None),
        }
    }

    async fn list_students(&self, filter: &StudentFilter) -> StorageResult<Vec<Student>> {
        let conn = self.get_connection()?;

        let mut sql = String::from("SELECT id, name, created_at FROM students");
        let mut clauses: Vec<&str> = Vec::new();
        let mut bindings: Vec<Value> = Vec::new();

        if let Some(id) = filter.id {
            clauses.push("id = ?");
            bindings.push(Value::Integer(id));
        }
        if let Some(name) = &filter.name {
            clauses.push("name = ?");
            bindings.push(Value::Text(name.clone()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY id ASC");

        let mut stmt = conn.prepare(&sql)?;
        let rows: Vec<(i64, String, String)> = stmt
            .query_map(params_from_iter(bindings), |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut students = Vec::with_capacity(rows.len());
        for (id, name, created_at) in rows {
            students.push(Student {
                id,
                name,
                created_at: parse_timestamp(&created_at)?,
            });
        }

        Ok(students)
    }

    async fn update_student(&self, id: i64, patch: StudentUpdate) -> StorageResult<Student> {
        let conn = self.get_connection()?;

        let current: Option<(String, String)> = conn
            .query_row(
                "SELECT name, created_at FROM students WHERE id = ?1",
                [id],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        let (current_name, created_at) = current.ok_or_else(|| not_found("student", id))?;

        let name = patch.name.unwrap_or(current_name);
        validate_name(&name)?;

        conn.execute(
            "UPDATE students SET name = ?1 WHERE id = ?2",
            params![name, id],
        )?;

        debug!(id, name = %name, "Student updated");

        Ok(Student {
            id,
            name,
            created_at: parse_timestamp(&created_at)?,
        })
    }

    async fn replace_student(&self, id: i64, new: NewStudent) -> StorageResult<Student> {
        self.update_student(
            id,
            StudentUpdate {
                name: Some(new.name),
            },
        )
        .await
    }

    async fn delete_student(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        // Cascade removes the student from every course roster.
        let affected = conn.execute("DELETE FROM students WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(not_found("student", id));
        }

        debug!(id, "Student deleted");

        Ok(())
    }

    async fn count_students(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM students", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_student_ids() {
        assert_eq!(normalized_student_ids(&[3, 1, 3, 2]), vec![1, 2, 3]);
        assert!(normalized_student_ids(&[]).is_empty());
    }

    #[test]
    fn test_parse_timestamp_roundtrip() {
        let now = Utc::now();
        let parsed = parse_timestamp(&now.to_rfc3339()).expect("parse rfc3339");
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday").unwrap_err();
        assert!(matches!(
            err,
            StorageError::Backend(BackendError::SerializationError { .. })
        ));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Analysis").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }
}
