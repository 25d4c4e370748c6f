//! Reference data path resolution.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable for overriding the reference data file.
pub const DATA_ENV_VAR: &str = "AYUSYNC_DATA";

/// File name used when nothing else is configured, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "sih_data.csv";

/// Get the reference data path.
///
/// Resolution order:
/// 1. `explicit` (the `--data` flag)
/// 2. `AYUSYNC_DATA` environment variable
/// 3. `sih_data.csv` in the working directory
pub fn resolve_data_path(explicit: Option<&Path>) -> PathBuf {
    resolve_from(explicit, std::env::var_os(DATA_ENV_VAR))
}

fn resolve_from(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    match env_value {
        Some(value) if !value.is_empty() => PathBuf::from(value),
        _ => PathBuf::from(DEFAULT_DATA_FILE),
    }
}
