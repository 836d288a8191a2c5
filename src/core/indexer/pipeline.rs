//! Indexing pipeline orchestration.
//!
//! Coordinates one run per user-submitted path:
//! 1. Collect accepted files into the queue
//! 2. Build one document record per file
//! 3. Submit the batch to the index session
//! 4. Report the document-count delta
//!
//! The queue never carries state across runs: it is cleared before
//! returning, success or failure.

use std::path::Path;
use std::time::Instant;

use crate::core::error::{DocdexError, Result};
use crate::core::indexer::builder::build_document;
use crate::core::indexer::walker::FileCollector;
use crate::core::storage::IndexSession;
use crate::core::types::{FileEntry, IndexReport, SkipReason, Skipped};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    collector: FileCollector,
    queue: Vec<FileEntry>,
}

impl IndexingPipeline {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self {
            collector: FileCollector::new(max_file_size_mb),
            queue: Vec::new(),
        }
    }

    /// Index one user-submitted path as a single batch.
    ///
    /// A missing path, a rejected file, or an unreadable file
    /// becomes a skip diagnostic in the report; none of them abort
    /// the run. Only store failures propagate as errors, and even
    /// then the queue is drained before returning.
    pub fn run(&mut self, session: &mut IndexSession, submitted_path: &str) -> Result<IndexReport> {
        let outcome = self.run_batch(session, submitted_path);
        self.queue.clear();
        outcome
    }

    fn run_batch(
        &mut self,
        session: &mut IndexSession,
        submitted_path: &str,
    ) -> Result<IndexReport> {
        let start = Instant::now();

        let mut collection = self.collector.collect(Path::new(submitted_path));
        let mut skipped = std::mem::take(&mut collection.skipped);
        self.queue.append(&mut collection.entries);

        let files_queued = self.queue.len();
        tracing::info!("Queued {} files from {}", files_queued, submitted_path);

        let mut records = Vec::with_capacity(files_queued);
        for entry in &self.queue {
            match build_document(entry, submitted_path) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!("Could not build document for {:?}: {}", entry.path, e);
                    let reason = match e {
                        DocdexError::FileRead { message, .. } => SkipReason::ReadFailed(message),
                        other => SkipReason::ReadFailed(other.to_string()),
                    };
                    skipped.push(Skipped {
                        path: entry.path.clone(),
                        reason,
                    });
                }
            }
        }

        let outcome = session.submit(records)?;
        skipped.extend(outcome.write_failures);

        let count_after = session.count()?;
        let documents_added = count_after.saturating_sub(outcome.docs_before);

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            "Run complete: {} documents added, {} skipped in {}ms",
            documents_added,
            skipped.len(),
            duration_ms
        );

        Ok(IndexReport {
            documents_added,
            files_queued,
            skipped,
            duration_ms,
        })
    }
}
