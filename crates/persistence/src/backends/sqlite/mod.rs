//! SQLite backend implementation.
//!
//! This module provides a complete SQLite implementation of the storage
//! traits. It supports both in-memory databases (great for testing) and
//! file-based databases (for development and small deployments).
//!
//! # Features
//!
//! - In-memory and file-based modes
//! - Full CRUD for courses and students with enrollment links
//! - Exact-match filtering on id and name
//! - Versioned schema with a migration loop
//! - Foreign keys enforced on every pooled connection
//!
//! # Example
//!
//! ```no_run
//! use registrar_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
pub use schema::SCHEMA_VERSION;
