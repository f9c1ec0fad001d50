//! Core types for the persistence layer.
//!
//! This module provides the fundamental types used throughout the persistence
//! layer:
//!
//! - [`Course`], [`Student`] - Stored records with server-assigned identifiers
//! - [`NewCourse`], [`NewStudent`] - Creation payloads
//! - [`CourseUpdate`], [`StudentUpdate`] - Partial-update payloads
//! - [`CourseFilter`], [`StudentFilter`] - Exact-match list filters
//!
//! # Examples
//!
//! ```
//! use registrar_persistence::types::{CourseFilter, NewCourse};
//!
//! let new = NewCourse {
//!     name: "Compilers".to_string(),
//!     students: vec![1, 2, 3],
//! };
//! assert_eq!(new.students.len(), 3);
//!
//! let filter = CourseFilter::default().with_name("Compilers");
//! assert!(!filter.is_empty());
//! ```

mod filter;
mod records;

pub use filter::{CourseFilter, StudentFilter};
pub use records::{Course, CourseUpdate, NewCourse, NewStudent, Student, StudentUpdate};
