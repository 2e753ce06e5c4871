//! Core types shared across the HBNB crates
//!
//! This crate provides foundational types used by both the error and
//! logging facilities and by the storage layer:
//!
//! - **Correlation types**: RequestId for request-scoped storage work
//! - **Sensitive data**: Sensitive<T> marker for automatic redaction
//! - **Schema constants**: Canonical event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
