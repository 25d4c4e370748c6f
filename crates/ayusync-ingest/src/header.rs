//! Header validation and column lookup.

use csv::StringRecord;

use ayusync_model::{Record, columns};

/// Normalizes a header value by trimming whitespace and a UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    namaste_code: usize,
    namaste_term: usize,
    icd11_code: usize,
    icd11_term: usize,
}

impl ColumnIndex {
    /// Locates every required column by exact name.
    ///
    /// Returns the names of all missing columns on failure. When a name
    /// appears twice the first occurrence is used.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, Vec<String>> {
        let names: Vec<String> = headers.iter().map(normalize_header).collect();
        let found = columns::REQUIRED.map(|column| names.iter().position(|name| name == column));
        match found {
            [
                Some(namaste_code),
                Some(namaste_term),
                Some(icd11_code),
                Some(icd11_term),
            ] => Ok(Self {
                namaste_code,
                namaste_term,
                icd11_code,
                icd11_term,
            }),
            _ => Err(columns::REQUIRED
                .iter()
                .zip(found)
                .filter(|(_, position)| position.is_none())
                .map(|(column, _)| (*column).to_string())
                .collect()),
        }
    }

    /// Builds a typed record from a row. Empty term cells become `None`.
    pub fn record(&self, row: &StringRecord) -> Record {
        let cell = |idx: usize| row.get(idx).map(str::trim).unwrap_or("");
        let term = |idx: usize| Some(cell(idx)).filter(|value| !value.is_empty());
        Record::new(
            cell(self.namaste_code),
            term(self.namaste_term),
            cell(self.icd11_code),
            term(self.icd11_term),
        )
    }
}
