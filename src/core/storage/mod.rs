//! Storage layer for the Tantivy-backed document index.
//!
//! - **TantivyStore**: wraps Tantivy index operations (create,
//!   add, commit, count)
//! - **IndexSession**: owns the store handle's lifecycle —
//!   open once, submit batches, close exactly once

mod session;
mod tantivy;

pub use session::{IndexSession, SubmitOutcome};
