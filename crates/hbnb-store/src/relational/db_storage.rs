//! SQLite-backed storage engine

use std::time::Instant;

use hbnb_core::{
    log_op_end, log_op_error, log_op_start, BackendKind, Entity, EntityKind, ObjectMap,
    StorageEngine,
};
use rusqlite::Connection;

use crate::config::DbConfig;
use crate::db;
use crate::errors::{closed_session, Result};
use crate::migrations::{apply_migrations, reset_schema};
use crate::relational::session::UnitOfWork;
use crate::repo::hydration;

/// Relational storage engine
///
/// `reload()` opens the connection on first use, prepares the schema and
/// starts a session. `all()` answers from committed rows only; `new` and
/// `delete` stage into the session until `save()` commits. `close()` ends
/// the session, after which every operation except `close` and `reload`
/// fails with `InvalidState`.
pub struct DbStorage {
    config: DbConfig,
    conn: Option<Connection>,
    session: Option<UnitOfWork>,
    schema_ready: bool,
}

impl DbStorage {
    /// Create an engine for `config`; nothing is opened until `reload()`
    pub fn new(config: DbConfig) -> Self {
        Self {
            config,
            conn: None,
            session: None,
            schema_ready: false,
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Number of operations staged in the open session
    pub fn pending(&self) -> usize {
        self.session.as_ref().map(UnitOfWork::len).unwrap_or(0)
    }

    fn session_mut(&mut self, op: &str) -> Result<&mut UnitOfWork> {
        self.session.as_mut().ok_or_else(|| closed_session(op))
    }

    fn open_connection(&mut self) -> Result<&mut Connection> {
        if self.conn.is_none() {
            self.conn = Some(db::connect(&self.config.database)?);
        }
        let conn = self.conn.as_mut().ok_or_else(|| closed_session("reload"))?;

        if !self.schema_ready {
            // A test environment starts from an empty schema once per process
            if self.config.reset_schema {
                reset_schema(conn)?;
            }
            apply_migrations(conn)?;
            self.schema_ready = true;
        }
        Ok(conn)
    }
}

impl StorageEngine for DbStorage {
    fn backend(&self) -> BackendKind {
        BackendKind::Relational
    }

    fn all(&self, kind: Option<EntityKind>) -> Result<ObjectMap> {
        let start = Instant::now();
        let conn = match (&self.conn, &self.session) {
            (Some(conn), Some(_)) => conn,
            _ => return Err(closed_session("all")),
        };

        let result = hydration::load_all(conn, kind);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(objects) => log_op_end!(
                "all",
                duration_ms = duration_ms,
                backend = "db",
                class = kind.map(|k| k.name()).unwrap_or("*"),
                object_count = objects.len() as u64
            ),
            Err(e) => log_op_error!("all", e, duration_ms = duration_ms, backend = "db"),
        }
        result
    }

    fn new(&mut self, obj: Entity) -> Result<()> {
        let key = obj.key();
        self.session_mut("new")?.stage_upsert(obj);
        log_op_start!("new", backend = "db", key = key.as_str());
        Ok(())
    }

    fn save(&mut self) -> Result<()> {
        let start = Instant::now();
        let (Some(conn), Some(session)) = (self.conn.as_mut(), self.session.as_mut()) else {
            return Err(closed_session("save"));
        };
        log_op_start!("save", backend = "db", pending_count = session.len() as u64);

        let result = session.commit(conn);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(applied) => log_op_end!(
                "save",
                duration_ms = duration_ms,
                backend = "db",
                object_count = *applied as u64
            ),
            Err(e) => log_op_error!("save", e, duration_ms = duration_ms, backend = "db"),
        }
        result.map(|_| ())
    }

    fn delete(&mut self, obj: &Entity) -> Result<()> {
        self.session_mut("delete")?.stage_delete(obj);
        log_op_start!("delete", backend = "db", key = obj.key().as_str());
        Ok(())
    }

    fn reload(&mut self) -> Result<()> {
        let start = Instant::now();
        log_op_start!("reload", backend = "db");

        if let Err(e) = self.open_connection() {
            log_op_error!(
                "reload",
                &e,
                duration_ms = start.elapsed().as_millis() as u64,
                backend = "db"
            );
            return Err(e);
        }
        // Anything staged in a previous session is discarded
        self.session = Some(UnitOfWork::new());

        log_op_end!(
            "reload",
            duration_ms = start.elapsed().as_millis() as u64,
            backend = "db"
        );
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        let discarded = self.session.take().map(|s| s.len()).unwrap_or(0);
        log_op_end!(
            "close",
            duration_ms = 0u64,
            backend = "db",
            pending_count = discarded as u64
        );
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.session.is_some()
    }
}
