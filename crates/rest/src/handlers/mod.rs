//! HTTP request handlers for the Registrar API.
//!
//! This module contains handlers for all REST operations:
//!
//! - [`list`] - List courses or students with optional filters
//! - [`read`] - Retrieve a single record by id
//! - [`create`] - Create a new record
//! - [`update`] - Update a record (PATCH partial, PUT replace)
//! - [`delete`] - Delete a record
//! - [`health`] - Health check endpoints

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::{course_create_handler, student_create_handler};
pub use delete::{course_delete_handler, student_delete_handler};
pub use health::health_handler;
pub use list::{course_list_handler, student_list_handler};
pub use read::{course_read_handler, student_read_handler};
pub use update::{
    course_replace_handler, course_update_handler, student_replace_handler,
    student_update_handler,
};
