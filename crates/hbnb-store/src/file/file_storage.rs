//! JSON document backend
//!
//! The whole object table lives in memory; `save` serializes it to a single
//! JSON document and `reload` reads it back.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use hbnb_core::codec::{decode_document, encode_document};
use hbnb_core::{
    log_op_end, log_op_error, log_op_start, BackendKind, Entity, EntityKind, ExError, ObjectMap,
    ObjectTable, StorageEngine,
};

use crate::errors::{io_error, Result};
use crate::file::atomic::atomic_write;

/// File-backed storage engine
///
/// Objects registered with `new` are visible to `all` at once; they become
/// durable on `save`.
pub struct FileStorage {
    path: PathBuf,
    table: ObjectTable,
}

impl FileStorage {
    /// Create an engine for the document at `path`
    ///
    /// Nothing is read until `reload()`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: ObjectTable::new(),
        }
    }

    /// Location of the durable JSON document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the document; `None` when it does not exist
    fn read_document(&self) -> Result<Option<ObjectMap>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error("read_storage_file", e)),
        };
        let objects = decode_document(&text).map_err(|e| {
            ExError::from(e)
                .with_op("reload")
                .with_entity_id(self.path.display().to_string())
        })?;
        Ok(Some(objects))
    }
}

impl StorageEngine for FileStorage {
    fn backend(&self) -> BackendKind {
        BackendKind::File
    }

    fn all(&self, kind: Option<EntityKind>) -> Result<ObjectMap> {
        let start = Instant::now();
        let objects = self.table.snapshot(kind);
        log_op_end!(
            "all",
            duration_ms = start.elapsed().as_millis() as u64,
            backend = "file",
            class = kind.map(|k| k.name()).unwrap_or("*"),
            object_count = objects.len() as u64
        );
        Ok(objects)
    }

    fn new(&mut self, obj: Entity) -> Result<()> {
        let key = obj.key();
        log_op_start!("new", backend = "file", key = key.as_str());
        self.table.insert(obj);
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let start = Instant::now();
        log_op_start!("save", backend = "file", object_count = self.table.len() as u64);

        let result = encode_document(self.table.as_map())
            .map_err(|e| ExError::from(e).with_op("save"))
            .and_then(|document| atomic_write(&self.path, document.as_bytes()));

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => log_op_end!("save", duration_ms = duration_ms, backend = "file"),
            Err(e) => log_op_error!("save", e, duration_ms = duration_ms, backend = "file"),
        }
        result
    }

    fn delete(&mut self, obj: &Entity) -> Result<()> {
        let key = obj.key();
        let removed = self.table.remove(&key).is_some();
        log_op_end!(
            "delete",
            duration_ms = 0u64,
            backend = "file",
            key = key.as_str(),
            removed = removed
        );
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let start = Instant::now();
        // An absent document is empty storage: no error and no log output.
        let objects = match self.read_document() {
            Ok(Some(objects)) => objects,
            Ok(None) => return Ok(()),
            Err(e) => {
                log_op_error!(
                    "reload",
                    &e,
                    duration_ms = start.elapsed().as_millis() as u64,
                    backend = "file"
                );
                return Err(e);
            }
        };

        let loaded = objects.len() as u64;
        self.table.merge(objects);
        log_op_end!(
            "reload",
            duration_ms = start.elapsed().as_millis() as u64,
            backend = "file",
            object_count = loaded
        );
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.reload()
    }
}
