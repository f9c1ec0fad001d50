//! Storage backend implementations.
//!
//! Backends are gated behind cargo features so unused drivers stay out of the
//! dependency graph:
//!
//! - [`sqlite`] (feature `sqlite`, default) - SQLite with in-memory and file
//!   modes

#[cfg(feature = "sqlite")]
pub mod sqlite;
