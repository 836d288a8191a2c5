//! Document construction.
//!
//! Converts one accepted file into a [`DocumentRecord`]. A failed
//! read yields an error carrying the offending path so the caller
//! can skip the file and keep the batch going.

use std::fs;
use std::io;

use crate::core::error::{DocdexError, Result};
use crate::core::types::{DocumentRecord, FileEntry};

/// Build a document record from one accepted file.
///
/// `submitted_path` is the exact string the user typed for this
/// batch — for a directory batch it names the root, not the entry.
/// The record stores it alongside the entry's own path, so the
/// batch-level value downstream consumers expect is preserved
/// without losing the per-file path.
///
/// The read handle is scoped to this call and released on every
/// exit path.
pub fn build_document(entry: &FileEntry, submitted_path: &str) -> Result<DocumentRecord> {
    let content = fs::read_to_string(&entry.path).map_err(|e| {
        let message = if e.kind() == io::ErrorKind::InvalidData {
            "content is not valid UTF-8".to_string()
        } else {
            e.to_string()
        };
        DocdexError::FileRead {
            path: entry.path.clone(),
            message,
        }
    })?;

    Ok(DocumentRecord {
        content,
        submitted_path: submitted_path.to_string(),
        file_path: entry.path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_build_reads_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        let entry = FileEntry::new(&path);
        let record = build_document(&entry, path.to_str().unwrap()).unwrap();

        assert_eq!(record.content, "hello");
        assert_eq!(record.file_path, path);
    }

    #[test]
    fn test_build_preserves_submitted_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "hello").unwrap();

        // The user submitted the directory, not the file
        let entry = FileEntry::new(&path);
        let record = build_document(&entry, "/docs").unwrap();

        assert_eq!(record.submitted_path, "/docs");
        assert_eq!(record.file_path, path);
    }

    #[test]
    fn test_build_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();

        let entry = FileEntry::new(&path);
        let record = build_document(&entry, "/docs").unwrap();

        assert!(record.content.is_empty());
    }

    #[test]
    fn test_build_non_utf8_content_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0xfa]).unwrap();

        let entry = FileEntry::new(&path);
        let err = build_document(&entry, "/docs").unwrap_err();

        match err {
            DocdexError::FileRead { path: p, message } => {
                assert_eq!(p, path);
                assert!(message.contains("UTF-8"));
            }
            other => panic!("expected FileRead, got {other:?}"),
        }
    }

    #[test]
    fn test_build_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let entry = FileEntry::new(temp_dir.path().join("vanished.txt"));

        let err = build_document(&entry, "/docs").unwrap_err();
        assert!(matches!(err, DocdexError::FileRead { .. }));
    }
}
