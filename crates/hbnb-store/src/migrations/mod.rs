//! Migration framework
//!
//! Provides:
//! - Migration runner with checksums
//! - Idempotent application
//! - Embedded SQL migrations
//! - Full schema reset for test databases

mod embedded;
mod runner;

pub use runner::{apply_migrations, reset_schema};
