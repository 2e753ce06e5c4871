//! Error handling for hbnb-store
//!
//! Wraps hbnb-core ExError with store-specific helpers

use hbnb_core::errors::{ExError, ExErrorKind};

pub use hbnb_core::errors::StorageResult as Result;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Operation attempted while no relational session is open
pub fn closed_session(op: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidState)
        .with_op(op.to_string())
        .with_message("session is closed; call reload() to open a new one")
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create a configuration error
pub fn config_error(variable: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(format!("{}: {}", variable, reason))
}
