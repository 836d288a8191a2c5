//! Indexing pipeline.
//!
//! Turns one user-submitted path into a batch of committed
//! documents:
//!
//! - path classification against the accepted-extension whitelist
//! - depth-first file collection
//! - per-file document construction
//! - batch submission and delta reporting
//!
//! Per-file failures (missing paths, rejected types, unreadable
//! content) become skip diagnostics; they never abort the batch.

pub mod builder;
pub mod classifier;
pub mod pipeline;
pub mod walker;

pub use builder::build_document;
pub use classifier::{classify, PathKind, ACCEPTED_EXTENSIONS};
pub use pipeline::IndexingPipeline;
pub use walker::FileCollector;
