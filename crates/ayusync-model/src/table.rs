use std::fmt;

use crate::Record;

/// Where a [`ReferenceTable`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableOrigin {
    /// Read from an existing resource (possibly with zero rows).
    Loaded { source: String },
    /// Stand-in for a resource that could not be located.
    Unavailable { source: String },
}

impl TableOrigin {
    pub fn source(&self) -> &str {
        match self {
            TableOrigin::Loaded { source } | TableOrigin::Unavailable { source } => source,
        }
    }
}

impl fmt::Display for TableOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableOrigin::Loaded { source } => write!(f, "loaded from {source}"),
            TableOrigin::Unavailable { source } => write!(f, "unavailable ({source})"),
        }
    }
}

/// Immutable snapshot of the reference data.
///
/// Built once by the loader and handed to the query engine. There are no
/// mutating methods: row order is the source order for the table's lifetime.
#[derive(Debug, Clone)]
pub struct ReferenceTable {
    origin: TableOrigin,
    records: Vec<Record>,
}

impl ReferenceTable {
    pub fn loaded(source: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            origin: TableOrigin::Loaded {
                source: source.into(),
            },
            records,
        }
    }

    /// An empty table standing in for a missing resource.
    pub fn unavailable(source: impl Into<String>) -> Self {
        Self {
            origin: TableOrigin::Unavailable {
                source: source.into(),
            },
            records: Vec::new(),
        }
    }

    pub fn origin(&self) -> &TableOrigin {
        &self.origin
    }

    pub fn is_available(&self) -> bool {
        matches!(self.origin, TableOrigin::Loaded { .. })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
