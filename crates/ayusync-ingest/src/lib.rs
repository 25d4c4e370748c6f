//! Reference data loading for the NAMASTE / ICD-11 lookup.
//!
//! This crate turns the reference CSV into an immutable
//! [`ReferenceTable`](ayusync_model::ReferenceTable) exactly once, before any
//! query is served.
//!
//! # Features
//!
//! - **CSV Loading**: Read the four named columns in any order, ignoring extras
//! - **Column Validation**: Fail fast when a required column is missing
//! - **Graceful Absence**: A missing file yields an unavailable, empty table
//! - **Path Resolution**: `--data` flag, then `AYUSYNC_DATA`, then `sih_data.csv`
//!
//! # Example
//!
//! ```ignore
//! use ayusync_ingest::{load_reference_table, resolve_data_path};
//!
//! let path = resolve_data_path(None);
//! let table = load_reference_table(&path)?;
//! println!("{} records ({})", table.len(), table.origin());
//! ```

mod error;
mod header;
mod paths;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{load_reference_table, read_reference_table};

// === Configuration ===
pub use paths::{DATA_ENV_VAR, DEFAULT_DATA_FILE, resolve_data_path};
