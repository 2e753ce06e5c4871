pub mod relations;
pub mod store;

pub use store::ObjectTable;
