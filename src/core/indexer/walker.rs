//! File collection.
//!
//! Walks a file-or-directory root and queues every accepted file,
//! recording a skip diagnostic for everything else. Traversal errors
//! (permission denied, etc.) are logged and never abort the walk.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::core::indexer::classifier::{classify, PathKind};
use crate::core::types::{FileEntry, SkipReason, Skipped};

/// Result of one traversal
#[derive(Debug, Default)]
pub struct Collection {
    /// Accepted files, in traversal order
    pub entries: Vec<FileEntry>,

    /// Paths skipped with their reasons
    pub skipped: Vec<Skipped>,
}

/// Collects accepted files under a root path
pub struct FileCollector {
    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileCollector {
    pub fn new(max_file_size_mb: usize) -> Self {
        Self {
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        }
    }

    /// Collect all accepted files under `root`.
    ///
    /// `root` may be a single file or a directory. Directories are
    /// traversed depth-first in filesystem-listing order; no sort is
    /// imposed, so the order of `entries` is unspecified and may
    /// differ across platforms. A fresh call with the same root
    /// produces an equivalent traversal; no state survives between
    /// calls. A directory with zero accepted files yields an empty
    /// collection, not an error.
    pub fn collect(&self, root: &Path) -> Collection {
        let mut collection = Collection::default();

        match classify(root) {
            PathKind::Missing => {
                tracing::warn!("Path does not exist: {:?}", root);
                collection.skipped.push(Skipped {
                    path: root.to_path_buf(),
                    reason: SkipReason::Missing,
                });
            }
            PathKind::AcceptedFile => self.push_file(root, &mut collection),
            PathKind::RejectedFile => {
                tracing::debug!("Skipping unsupported file: {:?}", root);
                collection.skipped.push(Skipped {
                    path: root.to_path_buf(),
                    reason: SkipReason::UnsupportedType,
                });
            }
            PathKind::Directory => self.walk(root, &mut collection),
        }

        collection
    }

    /// Depth-first descent over a directory tree
    fn walk(&self, root: &Path, collection: &mut Collection) {
        for entry in WalkDir::new(root).follow_links(false) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    match classify(entry.path()) {
                        PathKind::AcceptedFile => self.push_file(entry.path(), collection),
                        PathKind::RejectedFile => {
                            tracing::debug!("Skipping unsupported file: {:?}", entry.path());
                            collection.skipped.push(Skipped {
                                path: entry.path().to_path_buf(),
                                reason: SkipReason::UnsupportedType,
                            });
                        }
                        // A file cannot classify as Directory; Missing
                        // means it vanished mid-walk, so drop it.
                        _ => {}
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                    // Continue walking despite errors
                }
            }
        }
    }

    fn push_file(&self, path: &Path, collection: &mut Collection) {
        if let Ok(metadata) = fs::metadata(path) {
            if metadata.len() > self.max_file_size_bytes {
                tracing::debug!("Skipping large file: {:?} ({} bytes)", path, metadata.len());
                return;
            }
        }

        collection.entries.push(FileEntry::new(path));
    }
}
