/// Core Module
///
/// Shared infrastructure for the demo: the crate-wide error type and the
/// database layer (connection lifecycle and query execution).

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{InjeqlError, Result};
