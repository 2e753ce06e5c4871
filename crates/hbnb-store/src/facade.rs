//! The storage façade
//!
//! One process-wide handle that callers use without knowing which backend
//! serves it. The backend is chosen from [`StorageConfig`] once, at
//! construction.

use std::fmt;
use std::time::Instant;

use hbnb_core::{
    log_op_end, log_op_error, log_op_start, BackendKind, Entity, EntityKind, ExError, ObjectMap,
    StorageEngine,
};
use hbnb_core_types::schema::EVENT_END_ERROR;
use hbnb_core_types::RequestId;

use crate::config::StorageConfig;
use crate::errors::Result;
use crate::file::FileStorage;
use crate::relational::DbStorage;

/// Error type a request handler can fail with
///
/// Storage failures during session setup or teardown convert into it.
pub trait RequestError: From<ExError> + fmt::Display {
    /// Stable code recorded in the request's `end_error` event
    fn err_code(&self) -> &'static str;

    /// Tag the error with the request it failed in
    fn with_request_id(self, request_id: RequestId) -> Self;
}

impl RequestError for ExError {
    fn err_code(&self) -> &'static str {
        self.code()
    }

    fn with_request_id(self, request_id: RequestId) -> Self {
        ExError::with_request_id(self, request_id)
    }
}

/// Backend-agnostic storage handle
pub struct Storage {
    engine: Box<dyn StorageEngine>,
}

impl Storage {
    /// Build the configured backend and load it
    pub fn open(config: &StorageConfig) -> Result<Self> {
        let engine: Box<dyn StorageEngine> = match config.backend {
            BackendKind::File => Box::new(FileStorage::new(config.file_path.clone())),
            BackendKind::Relational => Box::new(DbStorage::new(config.db.clone())),
        };
        let mut storage = Self::from_engine(engine);
        storage.reload()?;
        Ok(storage)
    }

    /// Build the backend selected by the process environment
    pub fn from_env() -> Result<Self> {
        Self::open(&StorageConfig::from_env()?)
    }

    /// Wrap an already-constructed engine without loading it
    pub fn from_engine(engine: Box<dyn StorageEngine>) -> Self {
        Self { engine }
    }

    /// Run one request against the façade
    ///
    /// Opens a session if none is open, runs `f`, then always runs the
    /// `close()` teardown. An error from `f` takes precedence over a
    /// teardown error.
    pub fn request<T, E, F>(&mut self, f: F) -> std::result::Result<T, E>
    where
        E: RequestError,
        F: FnOnce(&mut Storage) -> std::result::Result<T, E>,
    {
        let request_id = RequestId::new();
        let start = Instant::now();
        log_op_start!(
            "request",
            request_id = request_id.as_str(),
            backend = self.backend().name()
        );

        let outcome = match self.ensure_open() {
            Ok(()) => f(self),
            Err(e) => Err(E::from(e)),
        };
        let teardown = self.close();

        let result = match (outcome, teardown) {
            (Err(e), _) => Err(e.with_request_id(request_id.clone())),
            (Ok(_), Err(e)) => Err(E::from(e.with_request_id(request_id.clone()))),
            (Ok(value), Ok(())) => Ok(value),
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => log_op_end!(
                "request",
                duration_ms = duration_ms,
                request_id = request_id.as_str()
            ),
            Err(e) => tracing::error!(
                component = module_path!(),
                op = "request",
                event = EVENT_END_ERROR,
                duration_ms = duration_ms,
                request_id = request_id.as_str(),
                err_code = e.err_code(),
                error = %e,
            ),
        }
        result
    }

    fn ensure_open(&mut self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            self.reload()
        }
    }

    /// Final teardown at process exit
    pub fn shutdown(mut self) -> Result<()> {
        self.close()
    }

    /// Look up an object by class name and id, as the console does
    pub fn find(&self, class_name: &str, id: &str) -> Result<Option<Entity>> {
        let kind: EntityKind = class_name.parse().map_err(ExError::from)?;
        self.get(kind, id)
    }
}

impl StorageEngine for Storage {
    fn backend(&self) -> BackendKind {
        self.engine.backend()
    }

    fn all(&self, kind: Option<EntityKind>) -> Result<ObjectMap> {
        self.engine.all(kind)
    }

    fn new(&mut self, obj: Entity) -> Result<()> {
        self.engine.new(obj)
    }

    fn save(&mut self) -> Result<()> {
        self.engine.save()
    }

    fn delete(&mut self, obj: &Entity) -> Result<()> {
        self.engine.delete(obj)
    }

    fn reload(&mut self) -> Result<()> {
        self.engine.reload()
    }

    fn close(&mut self) -> Result<()> {
        self.engine.close()
    }

    fn is_open(&self) -> bool {
        self.engine.is_open()
    }
}
