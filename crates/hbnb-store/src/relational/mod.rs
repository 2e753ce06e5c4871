//! Relational backend: SQLite session with a staged unit of work

mod db_storage;
mod session;

pub use db_storage::DbStorage;
pub use session::{PendingOp, UnitOfWork};
