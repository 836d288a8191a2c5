//! Docdex - Interactive Text-File Indexer
//!
//! Builds a persistent full-text index from `.htm`, `.html`, `.xml`
//! and `.txt` files via Tantivy. Paths are submitted interactively;
//! each submission is walked, turned into documents, and committed as
//! one batch, reporting how many documents the batch added.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types
//!   - indexer (path classification, file walking, document
//!     construction, pipeline orchestration)
//!   - storage (Tantivy facade, index session lifecycle)
//!
//! - **cli**: Terminal adapter (depends on core)
//!   - argument parsing, interactive read loop, output formatting

// Core domain logic (adapter-agnostic)
pub mod core;

// Terminal adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{DocdexError, Result};
pub use crate::core::indexer::IndexingPipeline;
pub use crate::core::storage::IndexSession;
pub use crate::core::types::*;
