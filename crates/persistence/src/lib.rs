//! Registrar Persistence Layer
//!
//! This crate provides the relational persistence layer for the Registrar
//! course service. It stores courses, students, and the enrollment relation
//! between them, and exposes typed CRUD operations over storage traits so the
//! REST layer never touches SQL directly.
//!
//! # Features
//!
//! - **Typed records**: [`types::Course`] and [`types::Student`] with
//!   server-assigned integer identifiers and UTC timestamps
//! - **Exact-match filtering**: list operations accept [`types::CourseFilter`]
//!   / [`types::StudentFilter`] for `id` and `name` lookups
//! - **Referential integrity**: enrollment links are validated before they
//!   are written and enforced by foreign keys in the schema
//! - **Pooled connections**: r2d2-managed SQLite connections with in-memory
//!   and file modes
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! registrar-persistence = { version = "0.1", features = ["sqlite"] }
//! ```
//!
//! - `sqlite` (default) - SQLite with in-memory and file modes
//!
//! # Architecture
//!
//! - [`types`] - Domain records, payloads, and list filters
//! - [`error`] - Error types for all operations
//! - [`core`] - Storage traits ([`core::CourseStore`], [`core::StudentStore`])
//! - [`backends`] - Backend implementations (SQLite)
//!
//! # Quick Start
//!
//! ```no_run
//! use registrar_persistence::backends::sqlite::SqliteBackend;
//! use registrar_persistence::core::CourseStore;
//! use registrar_persistence::types::NewCourse;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::in_memory()?;
//! backend.init_schema()?;
//!
//! let course = backend
//!     .create_course(NewCourse {
//!         name: "Linear Algebra".to_string(),
//!         students: vec![],
//!     })
//!     .await?;
//!
//! assert!(course.id > 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod types;
