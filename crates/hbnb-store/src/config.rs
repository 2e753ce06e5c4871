//! Storage configuration
//!
//! Read once from the process environment when the façade is built.

use std::path::PathBuf;

use hbnb_core::BackendKind;
use hbnb_core_types::Sensitive;

use crate::db::IN_MEMORY;
use crate::errors::{config_error, Result};

pub const ENV_TYPE_STORAGE: &str = "HBNB_TYPE_STORAGE";
pub const ENV_FILE_PATH: &str = "HBNB_FILE_PATH";
pub const ENV_MYSQL_HOST: &str = "HBNB_MYSQL_HOST";
pub const ENV_MYSQL_USER: &str = "HBNB_MYSQL_USER";
pub const ENV_MYSQL_PWD: &str = "HBNB_MYSQL_PWD";
pub const ENV_MYSQL_DB: &str = "HBNB_MYSQL_DB";
pub const ENV_ENV: &str = "HBNB_ENV";

pub const DEFAULT_FILE_PATH: &str = "file.json";
pub const DEFAULT_DATABASE: &str = "hbnb_dev_db.sqlite";

/// Relational backend parameters
///
/// Host, user and password are kept so that a connection string can be
/// described in full; SQLite only uses `database`, resolved as a file path.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub database: String,
    /// Drop every table before the schema is first created
    pub reset_schema: bool,
}

impl DbConfig {
    /// A file-backed database at `database`
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            host: None,
            user: None,
            password: None,
            database: database.into(),
            reset_schema: false,
        }
    }

    /// A private in-memory database
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }
}

/// Which backend to build and where it keeps its data
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub backend: BackendKind,
    pub file_path: PathBuf,
    pub db: DbConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            file_path: PathBuf::from(DEFAULT_FILE_PATH),
            db: DbConfig::new(DEFAULT_DATABASE),
        }
    }
}

impl StorageConfig {
    /// File backend over `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: BackendKind::File,
            file_path: path.into(),
            ..Self::default()
        }
    }

    /// Relational backend over `db`
    pub fn relational(db: DbConfig) -> Self {
        Self {
            backend: BackendKind::Relational,
            db,
            ..Self::default()
        }
    }

    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when a path variable is set but empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup(ENV_TYPE_STORAGE).as_deref() {
            Some("db") => BackendKind::Relational,
            _ => BackendKind::File,
        };

        let file_path = non_empty(ENV_FILE_PATH, lookup(ENV_FILE_PATH))?
            .unwrap_or_else(|| DEFAULT_FILE_PATH.to_string());
        let database = non_empty(ENV_MYSQL_DB, lookup(ENV_MYSQL_DB))?
            .unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        let db = DbConfig {
            host: lookup(ENV_MYSQL_HOST),
            user: lookup(ENV_MYSQL_USER),
            password: lookup(ENV_MYSQL_PWD).map(Sensitive::new),
            database,
            reset_schema: lookup(ENV_ENV).as_deref() == Some("test"),
        };

        Ok(Self {
            backend,
            file_path: PathBuf::from(file_path),
            db,
        })
    }
}

fn non_empty(variable: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        Some(v) if v.trim().is_empty() => Err(config_error(variable, "must not be empty")),
        other => Ok(other),
    }
}
