//! Session-scoped unit of work
//!
//! Changes registered through the façade are staged here and only reach the
//! database when the session commits.

use std::collections::BTreeMap;

use hbnb_core::{Entity, EntityKind};
use rusqlite::Connection;

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;

/// One staged change
#[derive(Debug, Clone)]
pub enum PendingOp {
    Upsert(Entity),
    Delete { kind: EntityKind, id: String },
}

impl PendingOp {
    pub fn kind(&self) -> EntityKind {
        match self {
            PendingOp::Upsert(entity) => entity.kind(),
            PendingOp::Delete { kind, .. } => *kind,
        }
    }
}

/// Staged operations keyed by composite key
///
/// At most one operation per key: a later `stage_*` for the same key
/// replaces the earlier one.
#[derive(Debug, Default)]
pub struct UnitOfWork {
    pending: BTreeMap<String, PendingOp>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage_upsert(&mut self, entity: Entity) {
        self.pending.insert(entity.key(), PendingOp::Upsert(entity));
    }

    pub fn stage_delete(&mut self, entity: &Entity) {
        self.pending.insert(
            entity.key(),
            PendingOp::Delete {
                kind: entity.kind(),
                id: entity.id().to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Staged operations in commit order
    ///
    /// Upserts first, parents before children; then deletes, children before
    /// parents. Ties keep composite key order.
    pub fn ordered(&self) -> Vec<&PendingOp> {
        let mut upserts: Vec<&PendingOp> = self
            .pending
            .values()
            .filter(|op| matches!(op, PendingOp::Upsert(_)))
            .collect();
        upserts.sort_by_key(|op| op.kind().dependency_rank());

        let mut deletes: Vec<&PendingOp> = self
            .pending
            .values()
            .filter(|op| matches!(op, PendingOp::Delete { .. }))
            .collect();
        deletes.sort_by_key(|op| std::cmp::Reverse(op.kind().dependency_rank()));

        upserts.into_iter().chain(deletes).collect()
    }

    /// Apply every staged operation in one transaction
    ///
    /// The staged operations are consumed either way; on failure the
    /// transaction rolls back and nothing is written.
    pub fn commit(&mut self, conn: &mut Connection) -> Result<usize> {
        let applied = self.pending.len();
        let result = self.apply(conn);
        self.pending.clear();
        result.map(|()| applied)
    }

    fn apply(&self, conn: &mut Connection) -> Result<()> {
        // Dropping the transaction without commit rolls it back
        let tx = conn.transaction().map_err(from_rusqlite)?;
        for op in self.ordered() {
            match op {
                PendingOp::Upsert(entity) => SqliteRepo::upsert_tx(&tx, entity)?,
                PendingOp::Delete { kind, id } => {
                    SqliteRepo::delete_tx(&tx, *kind, id)?;
                }
            }
        }
        tx.commit().map_err(from_rusqlite)
    }
}
