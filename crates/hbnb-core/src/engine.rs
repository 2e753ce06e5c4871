//! The storage façade contract
//!
//! Both backends implement [`StorageEngine`]; callers hold a
//! `&mut dyn StorageEngine` (or the `Storage` façade that wraps one) and never
//! name a backend type.
//!
//! # Visibility after `new`
//!
//! The backends deliberately differ here and callers must not assume otherwise:
//!
//! - **File**: `new(obj)` makes `obj` visible to `all()` immediately; nothing
//!   is durable until `save()`.
//! - **Relational**: `new(obj)` only stages `obj` in the session; `all()`
//!   reports committed rows, so `obj` appears after `save()` commits.

use std::collections::BTreeMap;
use std::fmt;

use crate::errors::StorageResult;
use crate::model::{composite_key, Entity, EntityKind};

/// Composite key → entity, ordered by key
pub type ObjectMap = BTreeMap<String, Entity>;

/// Which backend is serving the façade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    File,
    Relational,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::File => "file",
            BackendKind::Relational => "db",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform storage contract shared by the file and relational backends
pub trait StorageEngine {
    fn backend(&self) -> BackendKind;

    /// Every stored object, or only those of `kind`, keyed `"<Type>.<id>"`
    ///
    /// Empty storage yields an empty map, never an error.
    fn all(&self, kind: Option<EntityKind>) -> StorageResult<ObjectMap>;

    /// Register `obj`, replacing any object with the same composite key
    fn new(&mut self, obj: Entity) -> StorageResult<()>;

    /// Make every registered change durable
    fn save(&mut self) -> StorageResult<()>;

    /// Remove `obj`; removing something absent is not an error
    fn delete(&mut self, obj: &Entity) -> StorageResult<()>;

    /// Rebuild in-memory state from the durable medium
    fn reload(&mut self) -> StorageResult<()>;

    /// End-of-request teardown
    fn close(&mut self) -> StorageResult<()>;

    /// Whether the backend can serve requests without a `reload()` first
    fn is_open(&self) -> bool {
        true
    }

    /// One object by kind and id
    fn get(&self, kind: EntityKind, id: &str) -> StorageResult<Option<Entity>> {
        Ok(self.all(Some(kind))?.remove(&composite_key(kind, id)))
    }

    /// Number of stored objects, optionally of one kind
    fn count(&self, kind: Option<EntityKind>) -> StorageResult<usize> {
        Ok(self.all(kind)?.len())
    }
}
