use thiserror::Error;

/// Failures surfaced to callers of the query engine.
///
/// An empty search result is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The reference table was never loaded. Server-side condition.
    #[error("reference data not loaded from {path}")]
    DataUnavailable { path: String },

    /// No row carries the code on either side. Client-visible condition.
    #[error("code '{code}' not found in either system")]
    NotFound { code: String },
}

impl QueryError {
    /// True when the caller's input is at fault rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, QueryError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_the_only_client_error() {
        let not_found = QueryError::NotFound {
            code: "zzz".to_string(),
        };
        let unavailable = QueryError::DataUnavailable {
            path: "sih_data.csv".to_string(),
        };
        assert!(not_found.is_client_error());
        assert!(!unavailable.is_client_error());
        assert_eq!(
            not_found.to_string(),
            "code 'zzz' not found in either system"
        );
        assert_eq!(
            unavailable.to_string(),
            "reference data not loaded from sih_data.csv"
        );
    }
}
