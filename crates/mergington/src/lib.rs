//! The shared library for Mergington, the extracurricular activity sign-up service.
//!
//! This library holds the data structures exchanged over the HTTP API, the
//! domain error types of the activity directory, and the logging setup used by
//! the backend.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
