//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent of
//! the terminal front-end.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **indexer**: Path classification, file walking, document
//!   construction and pipeline orchestration
//! - **storage**: Tantivy facade and index session lifecycle

pub mod config;
pub mod error;
pub mod indexer;
pub mod storage;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{DocdexError, Result};
