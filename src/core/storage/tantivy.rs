//! Tantivy integration.
//!
//! This module wraps Tantivy operations for creating an index and
//! committing documents into it. Search is out of scope; the index
//! written here is queryable by any Tantivy reader.

use crate::core::error::{DocdexError, Result};
use crate::core::types::DocumentRecord;
use chrono::Utc;
use std::fs;
use std::path::Path;
use tantivy::schema::*;
use tantivy::{doc, Index, IndexWriter};

/// Writer heap in bytes
const WRITER_HEAP_BYTES: usize = 50_000_000;

/// Create the Tantivy schema for file documents
///
/// Fields:
/// - content: Full-text searchable file content (TEXT | STORED)
/// - path: The path string submitted for the batch (STRING | STORED,
///   indexed untokenized)
/// - file_path: The file's own path (STRING | STORED)
/// - indexed_at: Timestamp (Date | STORED)
pub fn document_schema() -> Schema {
    let mut builder = Schema::builder();

    builder.add_text_field("content", TEXT | STORED);
    builder.add_text_field("path", STRING | STORED);
    builder.add_text_field("file_path", STRING | STORED);
    builder.add_date_field("indexed_at", STORED);

    builder.build()
}

/// Resolved schema fields for document construction
struct DocFields {
    content: Field,
    path: Field,
    file_path: Field,
    indexed_at: Field,
}

impl DocFields {
    fn resolve(schema: &Schema) -> Result<Self> {
        let field = |name: &str| {
            schema
                .get_field(name)
                .map_err(|e| DocdexError::StoreOpen(format!("Missing {name} field: {e}")))
        };

        Ok(Self {
            content: field("content")?,
            path: field("path")?,
            file_path: field("file_path")?,
            indexed_at: field("indexed_at")?,
        })
    }
}

/// Tantivy index wrapper
pub struct TantivyStore {
    /// Tantivy index instance
    index: Index,

    /// Resolved schema fields
    fields: DocFields,

    /// Index writer (for adding documents)
    writer: IndexWriter,
}

impl std::fmt::Debug for TantivyStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TantivyStore")
            .field("schema", &"<schema>")
            .finish()
    }
}

impl TantivyStore {
    /// Create a fresh Tantivy index at the given path.
    ///
    /// Destructive-create policy: an existing index at the location
    /// (recognized by its `meta.json`) is discarded and replaced.
    /// Directories holding anything else are left alone and the
    /// create fails instead.
    pub fn create(index_dir: &Path) -> Result<Self> {
        let schema = document_schema();

        fs::create_dir_all(index_dir)
            .map_err(|e| DocdexError::StoreOpen(format!("Failed to create {index_dir:?}: {e}")))?;

        if index_dir.join("meta.json").exists() {
            fs::remove_dir_all(index_dir).map_err(|e| {
                DocdexError::StoreOpen(format!("Failed to clear previous index: {e}"))
            })?;
            fs::create_dir_all(index_dir).map_err(|e| {
                DocdexError::StoreOpen(format!("Failed to create {index_dir:?}: {e}"))
            })?;
        }

        let index = Index::create_in_dir(index_dir, schema.clone())
            .map_err(|e| DocdexError::StoreOpen(format!("Failed to create index: {e}")))?;

        let writer = index
            .writer(WRITER_HEAP_BYTES)
            .map_err(|e| DocdexError::StoreOpen(format!("Failed to create writer: {e}")))?;

        Ok(Self {
            index,
            fields: DocFields::resolve(&schema)?,
            writer,
        })
    }

    /// Add one record as a document (uncommitted until [`commit`])
    ///
    /// [`commit`]: TantivyStore::commit
    pub fn add_record(&mut self, record: &DocumentRecord) -> Result<()> {
        let now = Utc::now();

        let doc = doc!(
            self.fields.content => record.content.as_str(),
            self.fields.path => record.submitted_path.as_str(),
            self.fields.file_path => record.file_path.to_str().unwrap_or(""),
            self.fields.indexed_at => tantivy::DateTime::from_timestamp_secs(
                now.timestamp()
            ),
        );

        self.writer
            .add_document(doc)
            .map_err(|e| DocdexError::StoreWrite(format!("Failed to add document: {e}")))?;

        Ok(())
    }

    /// Commit pending documents to disk
    pub fn commit(&mut self) -> Result<()> {
        self.writer
            .commit()
            .map_err(|e| DocdexError::StoreWrite(format!("Failed to commit: {e}")))?;
        Ok(())
    }

    /// Number of committed documents in the index
    pub fn num_docs(&self) -> Result<usize> {
        let reader = self
            .index
            .reader()
            .map_err(|e| DocdexError::StoreOpen(format!("Failed to open index reader: {e}")))?;

        Ok(reader.searcher().num_docs() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(content: &str, submitted: &str, file: &str) -> DocumentRecord {
        DocumentRecord {
            content: content.to_string(),
            submitted_path: submitted.to_string(),
            file_path: PathBuf::from(file),
        }
    }

    #[test]
    fn test_schema_has_all_fields() {
        let schema = document_schema();

        assert!(schema.get_field("content").is_ok());
        assert!(schema.get_field("path").is_ok());
        assert!(schema.get_field("file_path").is_ok());
        assert!(schema.get_field("indexed_at").is_ok());
    }

    #[test]
    fn test_path_field_is_untokenized() {
        let schema = document_schema();
        let path_field = schema.get_field("path").unwrap();
        let entry = schema.get_field_entry(path_field);

        assert!(entry.is_indexed());
        assert!(entry.is_stored());
    }

    #[test]
    fn test_create_new_store() {
        let temp_dir = tempdir().unwrap();
        let index_dir = temp_dir.path().join("store");

        let store = TantivyStore::create(&index_dir);
        assert!(store.is_ok());
        assert!(index_dir.exists());
    }

    #[test]
    fn test_add_and_count() {
        let temp_dir = tempdir().unwrap();
        let mut store = TantivyStore::create(&temp_dir.path().join("store")).unwrap();

        assert_eq!(store.num_docs().unwrap(), 0);

        store
            .add_record(&record("hello", "/docs", "/docs/notes.txt"))
            .unwrap();
        store
            .add_record(&record("world", "/docs", "/docs/more.txt"))
            .unwrap();
        store.commit().unwrap();

        assert_eq!(store.num_docs().unwrap(), 2);
    }

    #[test]
    fn test_uncommitted_documents_not_counted() {
        let temp_dir = tempdir().unwrap();
        let mut store = TantivyStore::create(&temp_dir.path().join("store")).unwrap();

        store
            .add_record(&record("hello", "/docs", "/docs/notes.txt"))
            .unwrap();

        assert_eq!(store.num_docs().unwrap(), 0);
    }

    #[test]
    fn test_create_discards_previous_index() {
        let temp_dir = tempdir().unwrap();
        let index_dir = temp_dir.path().join("store");

        let mut store = TantivyStore::create(&index_dir).unwrap();
        store
            .add_record(&record("hello", "/docs", "/docs/notes.txt"))
            .unwrap();
        store.commit().unwrap();
        drop(store);

        // Second create starts from an empty index
        let store = TantivyStore::create(&index_dir).unwrap();
        assert_eq!(store.num_docs().unwrap(), 0);
    }
}
