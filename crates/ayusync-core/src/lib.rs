//! Query engine over the NAMASTE / ICD-11 reference table.
//!
//! A [`QueryEngine`] is built from an already loaded
//! [`ReferenceTable`](ayusync_model::ReferenceTable), so the table is always
//! populated before the first query. After construction the engine is
//! read-only and can be shared across threads without locking.
//!
//! Two operations are exposed:
//!
//! - [`QueryEngine::search`]: case-insensitive substring match on either term.
//! - [`QueryEngine::translate`]: case-insensitive exact code lookup, NAMASTE
//!   side first, then ICD-11; the first row in table order wins.

pub mod engine;
pub mod error;
mod index;

pub use engine::QueryEngine;
pub use error::{QueryError, Result};
