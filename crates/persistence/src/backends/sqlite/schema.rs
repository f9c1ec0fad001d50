//! SQLite schema definitions and migrations.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 2;

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema.
///
/// Fresh databases get the base schema followed by every migration; existing
/// databases are migrated forward from their recorded version.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, 1)?;
        migrate_schema(conn, 1)?;
    } else if current_version < SCHEMA_VERSION {
        migrate_schema(conn, current_version)?;
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| migration_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )
    .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create students table: {}", e)))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create courses table: {}", e)))?;

    // Enrollment links. Cascades keep the relation consistent when either
    // side is deleted.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS course_students (
            course_id INTEGER NOT NULL REFERENCES courses(id) ON DELETE CASCADE,
            student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
            PRIMARY KEY (course_id, student_id)
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create course_students table: {}", e)))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_course_students_student
         ON course_students(student_id)",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create enrollment index: {}", e)))?;

    Ok(())
}

/// Run migrations from the given version up to [`SCHEMA_VERSION`].
fn migrate_schema(conn: &Connection, from_version: i32) -> StorageResult<()> {
    let mut version = from_version;

    while version < SCHEMA_VERSION {
        match version {
            1 => migrate_v1_to_v2(conn)?,
            _ => {
                return Err(migration_error(format!(
                    "No migration path from schema version {}",
                    version
                )));
            }
        }
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

/// v2: index course and student names for exact-match filtering.
fn migrate_v1_to_v2(conn: &Connection) -> StorageResult<()> {
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_courses_name ON courses(name)",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create course name index: {}", e)))?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_students_name ON students(name)",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create student name index: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_conn() -> Connection {
        Connection::open_in_memory().expect("open in-memory connection")
    }

    #[test]
    fn test_initialize_fresh_schema() {
        let conn = open_conn();
        initialize_schema(&conn).expect("initialize schema");

        let version = get_schema_version(&conn).expect("read version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let conn = open_conn();
        initialize_schema(&conn).expect("first init");
        initialize_schema(&conn).expect("second init");

        let version = get_schema_version(&conn).expect("read version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_migration_from_v1() {
        let conn = open_conn();
        create_schema_v1(&conn).expect("v1 schema");
        set_schema_version(&conn, 1).expect("set v1");

        initialize_schema(&conn).expect("migrate to latest");
        assert_eq!(get_schema_version(&conn).expect("read version"), SCHEMA_VERSION);

        // The v2 index must exist after migrating.
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master
                 WHERE type = 'index' AND name = 'idx_courses_name'",
                [],
                |row| row.get(0),
            )
            .expect("query index");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_tables_exist() {
        let conn = open_conn();
        initialize_schema(&conn).expect("initialize schema");

        for table in ["students", "courses", "course_students"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .expect("query table");
            assert_eq!(count, 1, "table {} should exist", table);
        }
    }
}
