//! Route configuration.
//!
//! See [`api_routes`] for the full route table.

pub mod api_routes;
