use tracing::{debug, warn};

use ayusync_model::{CodeSystem, Record, ReferenceTable, Translation};

use crate::error::{QueryError, Result};
use crate::index::{CodeIndex, TermKeys, fold_case};

/// Read-only query engine over one reference table snapshot.
///
/// Construction takes ownership of the table and precomputes the case-folded
/// keys both operations need. Nothing mutates the engine afterwards, so a
/// single instance can be shared behind an `Arc` by concurrent callers.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    table: ReferenceTable,
    terms: Vec<TermKeys>,
    codes: CodeIndex,
}

impl QueryEngine {
    pub fn new(table: ReferenceTable) -> Self {
        let terms = table.records().iter().map(TermKeys::new).collect();
        let codes = CodeIndex::build(table.records());
        if codes.duplicates() > 0 {
            warn!(
                origin = %table.origin(),
                duplicates = codes.duplicates(),
                "duplicate codes in reference data, first row wins"
            );
        }
        debug!(
            origin = %table.origin(),
            rows = table.len(),
            "query engine ready"
        );
        Self {
            table,
            terms,
            codes,
        }
    }

    pub fn table(&self) -> &ReferenceTable {
        &self.table
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Every record in table order.
    pub fn records(&self) -> Result<&[Record]> {
        self.ensure_available()?;
        Ok(self.table.records())
    }

    /// Records whose NAMASTE or ICD-11 term contains `query`, ignoring case.
    ///
    /// Results keep table order. An empty result is `Ok`. The caller is
    /// expected to reject an empty `query`; if one gets through it matches
    /// every record with at least one term.
    pub fn search(&self, query: &str) -> Result<Vec<&Record>> {
        self.ensure_available()?;
        let needle = fold_case(query);
        let matches: Vec<&Record> = self
            .table
            .records()
            .iter()
            .zip(&self.terms)
            .filter(|(_, keys)| keys.contains(&needle))
            .map(|(record, _)| record)
            .collect();
        debug!(query, matches = matches.len(), "search");
        Ok(matches)
    }

    /// Translates `code` into the other system.
    ///
    /// The NAMASTE column is tried before the ICD-11 column, so a code listed
    /// on both sides resolves as a NAMASTE code. Within a column the first
    /// row in table order wins. `input_code` is echoed exactly as given.
    pub fn translate(&self, code: &str) -> Result<Translation> {
        self.ensure_available()?;
        let key = fold_case(code);
        for system in CodeSystem::ALL {
            if let Some(position) = self.codes.lookup(system, &key) {
                let record = &self.table.records()[position];
                debug!(code, %system, row = position, "translate");
                return Ok(Translation::from_record(code, system, record));
            }
        }
        debug!(code, "translate: no match");
        Err(QueryError::NotFound {
            code: code.to_string(),
        })
    }

    fn ensure_available(&self) -> Result<()> {
        if self.table.is_available() {
            Ok(())
        } else {
            Err(QueryError::DataUnavailable {
                path: self.table.origin().source().to_string(),
            })
        }
    }
}
