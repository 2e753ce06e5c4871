//! Canonical event names for structured logging
//!
//! The logging macros stamp one of these on every operation event so the
//! façade, the backends and the console read the same way in the logs.

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
