//! Index session lifecycle.
//!
//! One session owns the single open store handle for the life of the
//! process: opened at startup, fed one batch per submit, closed
//! exactly once at shutdown. Tantivy imposes a single-writer
//! contract, so no second session may hold the same store open.

use std::path::Path;

use crate::core::error::{DocdexError, Result};
use crate::core::storage::tantivy::TantivyStore;
use crate::core::types::{DocumentRecord, SkipReason, Skipped};

/// Result of one batch submission
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Committed document count before the batch, for delta
    /// reporting
    pub docs_before: usize,

    /// Records the store rejected; the rest of the batch went
    /// through
    pub write_failures: Vec<Skipped>,
}

/// Owns the open index store handle
#[derive(Debug)]
pub struct IndexSession {
    /// `None` once the session is closed
    store: Option<TantivyStore>,
}

impl IndexSession {
    /// Open a fresh store at `index_dir`. Any previous index there
    /// is discarded (`TantivyStore::create`'s destructive-create
    /// policy).
    pub fn open(index_dir: &Path) -> Result<Self> {
        let store = TantivyStore::create(index_dir)?;
        tracing::info!("Index session opened at {:?}", index_dir);

        Ok(Self { store: Some(store) })
    }

    fn store(&self) -> Result<&TantivyStore> {
        self.store.as_ref().ok_or(DocdexError::SessionClosed)
    }

    fn store_mut(&mut self) -> Result<&mut TantivyStore> {
        self.store.as_mut().ok_or(DocdexError::SessionClosed)
    }

    /// Submit one batch of records.
    ///
    /// Each record becomes one document. A record the store rejects
    /// is logged and reported in the outcome; it never stops the
    /// batch. The batch is committed before returning, so
    /// [`count`] reflects it immediately.
    ///
    /// [`count`]: IndexSession::count
    pub fn submit(&mut self, batch: Vec<DocumentRecord>) -> Result<SubmitOutcome> {
        let docs_before = self.count()?;
        let store = self.store_mut()?;

        let mut write_failures = Vec::new();
        for record in batch {
            if let Err(e) = store.add_record(&record) {
                tracing::warn!("Could not add {:?}: {}", record.file_path, e);
                write_failures.push(Skipped {
                    path: record.file_path,
                    reason: SkipReason::WriteFailed(e.to_string()),
                });
            } else {
                tracing::debug!("Added {:?}", record.file_path);
            }
        }

        store.commit()?;

        Ok(SubmitOutcome {
            docs_before,
            write_failures,
        })
    }

    /// Documents committed to the store so far this session
    pub fn count(&self) -> Result<usize> {
        self.store()?.num_docs()
    }

    /// Flush and release the store handle.
    ///
    /// Must be called exactly once, at shutdown. A second close, or
    /// any operation after close, is a lifecycle bug and fails with
    /// [`DocdexError::SessionClosed`].
    pub fn close(&mut self) -> Result<()> {
        let mut store = self.store.take().ok_or(DocdexError::SessionClosed)?;
        let result = store.commit();
        tracing::info!("Index session closed");
        result
    }

    /// Whether `close` has already run
    pub fn is_closed(&self) -> bool {
        self.store.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn record(content: &str, file: &str) -> DocumentRecord {
        DocumentRecord {
            content: content.to_string(),
            submitted_path: "/docs".to_string(),
            file_path: PathBuf::from(file),
        }
    }

    #[test]
    fn test_open_starts_empty() {
        let temp_dir = tempdir().unwrap();
        let session = IndexSession::open(&temp_dir.path().join("store")).unwrap();

        assert_eq!(session.count().unwrap(), 0);
        assert!(!session.is_closed());
    }

    #[test]
    fn test_submit_reports_docs_before() {
        let temp_dir = tempdir().unwrap();
        let mut session = IndexSession::open(&temp_dir.path().join("store")).unwrap();

        let first = session
            .submit(vec![record("one", "/docs/a.txt"), record("two", "/docs/b.txt")])
            .unwrap();
        assert_eq!(first.docs_before, 0);
        assert!(first.write_failures.is_empty());
        assert_eq!(session.count().unwrap(), 2);

        let second = session.submit(vec![record("three", "/docs/c.txt")]).unwrap();
        assert_eq!(second.docs_before, 2);
        assert_eq!(session.count().unwrap(), 3);
    }

    #[test]
    fn test_submit_empty_batch() {
        let temp_dir = tempdir().unwrap();
        let mut session = IndexSession::open(&temp_dir.path().join("store")).unwrap();

        let outcome = session.submit(Vec::new()).unwrap();
        assert_eq!(outcome.docs_before, 0);
        assert_eq!(session.count().unwrap(), 0);
    }

    #[test]
    fn test_close_is_exactly_once() {
        let temp_dir = tempdir().unwrap();
        let mut session = IndexSession::open(&temp_dir.path().join("store")).unwrap();

        assert!(session.close().is_ok());
        assert!(session.is_closed());

        let err = session.close().unwrap_err();
        assert!(matches!(err, DocdexError::SessionClosed));
    }

    #[test]
    fn test_operations_after_close_fail() {
        let temp_dir = tempdir().unwrap();
        let mut session = IndexSession::open(&temp_dir.path().join("store")).unwrap();
        session.close().unwrap();

        assert!(matches!(
            session.count().unwrap_err(),
            DocdexError::SessionClosed
        ));
        assert!(matches!(
            session.submit(vec![record("x", "/docs/x.txt")]).unwrap_err(),
            DocdexError::SessionClosed
        ));
    }

    #[test]
    fn test_open_discards_previous_store() {
        let temp_dir = tempdir().unwrap();
        let index_dir = temp_dir.path().join("store");

        let mut session = IndexSession::open(&index_dir).unwrap();
        session.submit(vec![record("one", "/docs/a.txt")]).unwrap();
        session.close().unwrap();

        let session = IndexSession::open(&index_dir).unwrap();
        assert_eq!(session.count().unwrap(), 0);
    }
}
