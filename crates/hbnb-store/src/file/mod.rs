//! File storage backend
//!
//! Provides:
//! - An in-memory object table persisted as one JSON document
//! - Atomic whole-document writes (temp file + rename)

mod atomic;
mod file_storage;

pub use atomic::atomic_write;
pub use file_storage::FileStorage;
