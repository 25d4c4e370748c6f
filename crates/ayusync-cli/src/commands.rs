use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use ayusync_cli::report::{OutputFormat, render_records, render_translation};
use ayusync_core::{QueryEngine, QueryError};
use ayusync_ingest::{load_reference_table, read_reference_table, resolve_data_path};

use crate::cli::{SearchArgs, TranslateArgs};

/// Exit code for a code found in neither system.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code when the reference data was never loaded.
pub const EXIT_DATA_UNAVAILABLE: i32 = 3;
/// Exit code for fatal initialization errors.
pub const EXIT_FATAL: i32 = 4;

/// `--data` value that reads the reference table from stdin.
pub const STDIN_SOURCE: &str = "-";

/// Load the reference table and build the engine before any query runs.
pub fn load_engine(data: Option<&Path>) -> Result<QueryEngine> {
    let path = resolve_data_path(data);
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let table = if path.as_os_str() == STDIN_SOURCE {
        read_reference_table(std::io::stdin().lock(), "<stdin>")
            .context("load reference data from stdin")?
    } else {
        load_reference_table(&path)
            .with_context(|| format!("load reference data: {}", path.display()))?
    };
    let engine = QueryEngine::new(table);
    debug!(
        rows = engine.len(),
        duration_ms = start.elapsed().as_millis(),
        "reference data ready"
    );
    Ok(engine)
}

pub fn run_search(engine: &QueryEngine, args: &SearchArgs, format: OutputFormat) -> Result<()> {
    let results = engine.search(&args.query)?;
    println!("{}", render_records(&results, format)?);
    Ok(())
}

pub fn run_translate(
    engine: &QueryEngine,
    args: &TranslateArgs,
    format: OutputFormat,
) -> Result<()> {
    let translation = engine.translate(&args.code)?;
    println!("{}", render_translation(&translation, format)?);
    Ok(())
}

pub fn run_records(engine: &QueryEngine, format: OutputFormat) -> Result<()> {
    let records: Vec<_> = engine.records()?.iter().collect();
    println!("{}", render_records(&records, format)?);
    Ok(())
}

/// Map an error to the process exit code, keeping client and server
/// conditions apart.
pub fn exit_code_for(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<QueryError>() {
        Some(QueryError::NotFound { .. }) => EXIT_NOT_FOUND,
        Some(QueryError::DataUnavailable { .. }) => EXIT_DATA_UNAVAILABLE,
        None => EXIT_FATAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_errors_keep_distinct_exit_codes() {
        let not_found = anyhow::Error::new(QueryError::NotFound {
            code: "zzz".to_string(),
        });
        let unavailable = anyhow::Error::new(QueryError::DataUnavailable {
            path: "sih_data.csv".to_string(),
        });
        let fatal = anyhow::anyhow!("required column(s) ICD11_Code not found");

        assert_eq!(exit_code_for(&not_found), EXIT_NOT_FOUND);
        assert_eq!(exit_code_for(&unavailable), EXIT_DATA_UNAVAILABLE);
        assert_eq!(exit_code_for(&fatal), EXIT_FATAL);
    }

    #[test]
    fn missing_data_file_still_builds_an_engine() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("absent.csv");
        let engine = load_engine(Some(path.as_path())).expect("engine");
        assert!(!engine.table().is_available());
        let err = run_records(&engine, OutputFormat::Json).expect_err("unavailable");
        assert_eq!(exit_code_for(&err), EXIT_DATA_UNAVAILABLE);
    }

    #[test]
    fn malformed_data_file_is_fatal() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, "Code,Term\nA01,Fever\n").expect("write csv");
        let err = load_engine(Some(path.as_path())).expect_err("missing columns");
        assert_eq!(exit_code_for(&err), EXIT_FATAL);
        assert!(format!("{err:#}").contains("NAMASTE_Code"));
    }
}
