//! Reference CSV reading.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info, warn};

use ayusync_model::ReferenceTable;

use crate::error::{IngestError, Result};
use crate::header::ColumnIndex;

/// Load the reference table from `path`.
///
/// A file that does not exist is not an error: a warning is logged and an
/// unavailable, empty table is returned so callers can keep serving. Any
/// other read failure, a malformed row or a missing column is fatal.
pub fn load_reference_table(path: &Path) -> Result<ReferenceTable> {
    let source = path.display().to_string();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            warn!(path = %source, "reference data not found, serving an empty table");
            return Ok(ReferenceTable::unavailable(source));
        }
        Err(error) => {
            return Err(IngestError::FileRead {
                path: path.to_path_buf(),
                source: error,
            });
        }
    };

    let table = read_reference_table(file, &source)?;
    info!(path = %source, rows = table.len(), "loaded reference data");
    Ok(table)
}

/// Read a reference table from any reader.
///
/// `source` names the input in errors and in the table's origin. Rows keep
/// their input order; rows whose cells are all blank are skipped.
pub fn read_reference_table<R: Read>(reader: R, source: &str) -> Result<ReferenceTable> {
    let path = Path::new(source);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| csv_error(path, e))?
        .clone();
    let index = ColumnIndex::from_headers(&headers).map_err(|columns| {
        IngestError::MissingColumns {
            path: path.to_path_buf(),
            columns,
        }
    })?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for row in reader.records() {
        let row = row.map_err(|e| csv_error(path, e))?;
        if row.iter().all(|value| value.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        records.push(index.record(&row));
    }
    debug!(source, rows = records.len(), skipped, "parsed reference rows");

    Ok(ReferenceTable::loaded(source, records))
}

fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    let message = error.to_string();
    match error.into_kind() {
        csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_rows_are_skipped() {
        let data = "NAMASTE_Code,NAMASTE_Term,ICD11_Code,ICD11_Term\nA01,Fever,1D01,Pyrexia\n,,,\n";
        let table = read_reference_table(data.as_bytes(), "inline").expect("read table");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_row_is_a_parse_error() {
        let data = "NAMASTE_Code,NAMASTE_Term,ICD11_Code,ICD11_Term\nA01,Fever\n";
        let err = read_reference_table(data.as_bytes(), "inline").expect_err("short row");
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = read_reference_table("".as_bytes(), "inline").expect_err("no header");
        match err {
            IngestError::MissingColumns { columns, .. } => assert_eq!(columns.len(), 4),
            other => panic!("unexpected error: {other}"),
        }
    }
}
