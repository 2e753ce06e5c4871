//! HBNB Store - persistence backends behind one storage façade
//!
//! Provides:
//! - `FileStorage`: the whole object table in memory, persisted as one
//!   JSON document
//! - `DbStorage`: SQLite tables under embedded migrations, with a staged
//!   unit of work per session
//! - `Storage`: the façade that picks a backend from `StorageConfig`

pub mod config;
pub mod db;
pub mod errors;
pub mod facade;
pub mod file;
pub mod migrations;
pub mod relational;
pub mod repo;

// Re-export key types
pub use config::{DbConfig, StorageConfig};
pub use errors::Result;
pub use facade::{RequestError, Storage};
pub use file::FileStorage;
pub use relational::DbStorage;
