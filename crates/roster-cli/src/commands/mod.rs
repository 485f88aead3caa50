//! CLI command implementations.

pub mod demo;
pub mod query;
pub mod summary;
