//! HBNB Core - entity model and storage contract
//!
//! This crate provides the pieces every storage backend and every caller
//! share:
//! - The entity model (BaseModel, User, State, City, Amenity, Place, Review)
//!   with id assignment, timestamps and typed attribute assignment
//! - The attribute-mapping codec and the JSON document layout
//! - The [`StorageEngine`] trait that both backends implement
//! - Explicit relationship accessors over any engine
//! - Error and logging facilities

pub mod codec;
pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use hbnb_core_types;

// Re-export commonly used types
pub use codec::{AttrMap, CLASS_KEY};
pub use engine::{BackendKind, ObjectMap, StorageEngine};
pub use errors::{ExError, ExErrorKind, HbnbError, Result, StorageResult};
pub use model::{
    composite_key, Amenity, BaseModel, City, Entity, EntityKind, Model, Place, Review, State, User,
};
pub use ops::{relations, ObjectTable};
