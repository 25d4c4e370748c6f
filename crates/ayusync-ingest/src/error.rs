//! Error types for reference data loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that make the reference data unusable.
///
/// A missing file is not one of them: the loader degrades to an unavailable
/// table instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file exists but could not be read.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV (e.g. a row with the wrong number of fields).
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The header row lacks one or more required columns.
    #[error("required column(s) {} not found in {path}", .columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = IngestError::MissingColumns {
            path: PathBuf::from("/data/sih_data.csv"),
            columns: vec!["ICD11_Code".to_string(), "ICD11_Term".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "required column(s) ICD11_Code, ICD11_Term not found in /data/sih_data.csv"
        );
    }

    #[test]
    fn test_file_read_keeps_source() {
        let err = IngestError::FileRead {
            path: PathBuf::from("sih_data.csv"),
            source: std::io::Error::other("boom"),
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
