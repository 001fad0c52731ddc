//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Storage (DuckDB collection, in-memory for dry runs)
//! - Console input for interactive submission
//! - The CLI api: container, router and controllers

pub mod adapter;
pub mod api;

pub use adapter::*;
