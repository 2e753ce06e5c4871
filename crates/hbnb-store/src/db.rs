//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::Path;

/// Target that denotes a private in-memory database
pub const IN_MEMORY: &str = ":memory:";

/// Open a SQLite database at the given path
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    Connection::open(path).map_err(from_rusqlite)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    Connection::open_in_memory().map_err(from_rusqlite)
}

/// Open the configured target, `:memory:` included, and configure it
pub fn connect(target: &str) -> Result<Connection> {
    let conn = if target == IN_MEMORY {
        open_in_memory()?
    } else {
        if let Some(parent) = Path::new(target).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| crate::errors::io_error("create_db_dir", e))?;
            }
        }
        open(target)?
    };
    configure(&conn)?;
    Ok(conn)
}

/// Configure a connection for the relational backend
pub fn configure(conn: &Connection) -> Result<()> {
    // Cascading deletes and reference checks depend on this
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    Ok(())
}
