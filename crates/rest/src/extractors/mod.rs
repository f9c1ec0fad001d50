//! Axum extractors for Registrar-specific request handling.
//!
//! - [`Payload`] - Extract a typed payload from a JSON or urlencoded form
//!   body

mod payload;

pub use payload::Payload;
