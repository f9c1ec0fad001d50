//! Core storage traits and abstractions.
//!
//! This module provides the foundational traits for the persistence layer:
//!
//! - [`StorageBackend`] - Backend identity shared by every store trait
//! - [`CourseStore`] - CRUD operations over courses and their enrollments
//! - [`StudentStore`] - CRUD operations over students
//!
//! The REST layer is generic over `S: CourseStore + StudentStore`, so any
//! backend that implements both traits can serve the full API.

mod storage;

pub use storage::{CourseStore, StorageBackend, StudentStore};
