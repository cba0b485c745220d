/// Error Module
///
/// This module defines the error type shared across the demo. Every
/// failure the flow can hit is funneled into `InjeqlError` so the top
/// level can catch, report, and continue to cleanup without telling the
/// categories apart.
use thiserror::Error;

/// Error type covering the three failure families of the demo:
/// input acquisition, connection handling, and query execution.
#[derive(Error, Debug)]
pub enum InjeqlError {
    /// Driver-level errors from SQLite operations
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// SQL execution errors (syntax, missing tables, refused statements)
    #[error("Query error: {0}")]
    Query(String),

    /// Interactive input could not be acquired (e.g. end of input)
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Configuration loading and validation errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system and I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lifecycle misuse and other unexpected conditions
    #[error("Application error: {0}")]
    App(String),
}

/// Type alias for Result to use InjeqlError as the error type.
pub type Result<T> = std::result::Result<T, InjeqlError>;
