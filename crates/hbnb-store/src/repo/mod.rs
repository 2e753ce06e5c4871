//! Repository layer for persisting entities to SQLite
//!
//! Maps each entity kind onto its table and back

pub mod hydration;
pub mod sqlite_repo;

pub use sqlite_repo::{table_for, SqliteRepo, TableLayout};
