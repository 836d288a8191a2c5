//! Error types and error handling for docdex.
//!
//! Per-file and per-document failures are recovered where they occur
//! and surfaced as skip diagnostics (see [`crate::core::types`]); the
//! variants here cover the failures that flow through `Result`s.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docdex operations
pub type Result<T> = std::result::Result<T, DocdexError>;

/// Main error type for docdex
#[derive(Error, Debug)]
pub enum DocdexError {
    #[error("Failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to open index store: {0}")]
    StoreOpen(String),

    #[error("Index store write failed: {0}")]
    StoreWrite(String),

    #[error("Index session is closed")]
    SessionClosed,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl DocdexError {
    /// Errors the read loop cannot recover from: a store that never
    /// opened, or use of a session after close (a lifecycle bug).
    pub fn is_fatal(&self) -> bool {
        matches!(self, DocdexError::StoreOpen(_) | DocdexError::SessionClosed)
    }
}
