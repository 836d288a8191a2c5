//! Core data types for docdex.
//!
//! This module defines the data structures flowing through the
//! indexing pipeline: file entries, document records, skip
//! diagnostics and per-run reports.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A filesystem path confirmed to exist with an accepted extension.
///
/// Created during traversal, consumed once when the document is
/// built; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path of the accepted file
    pub path: PathBuf,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// One document ready for the index store.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    /// Full text content of the file
    pub content: String,

    /// The exact path string the user submitted for this batch.
    /// For a directory batch every record carries the same value.
    pub submitted_path: String,

    /// The file's own path
    pub file_path: PathBuf,
}

/// Why a path never became a committed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// Path does not exist on the filesystem
    Missing,

    /// Regular file outside the accepted-extension whitelist
    UnsupportedType,

    /// File could not be read (I/O failure or non-UTF-8 content)
    ReadFailed(String),

    /// The store rejected the document
    WriteFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Missing => write!(f, "does not exist"),
            SkipReason::UnsupportedType => write!(f, "unsupported file type"),
            SkipReason::ReadFailed(msg) => write!(f, "read failed: {msg}"),
            SkipReason::WriteFailed(msg) => write!(f, "write failed: {msg}"),
        }
    }
}

/// A path skipped during one pipeline run, with its reason
#[derive(Debug, Clone, Serialize)]
pub struct Skipped {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Report from one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    /// Documents the store gained from this batch
    /// (count after commit minus count before)
    pub documents_added: usize,

    /// Accepted files queued by the traversal
    pub files_queued: usize,

    /// Paths that never became committed documents
    pub skipped: Vec<Skipped>,

    /// Run duration in milliseconds
    pub duration_ms: u64,
}
