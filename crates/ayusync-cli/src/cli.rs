//! CLI argument definitions for AYU-Sync.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ayusync",
    version,
    about = "AYU-Sync - Translate between NAMASTE and ICD-11 codes",
    long_about = "Look up and translate medical codes between the NAMASTE terminology\n\
                  and ICD-11 using a static reference table.\n\n\
                  The reference CSV must carry the columns NAMASTE_Code, NAMASTE_Term,\n\
                  ICD11_Code and ICD11_Term."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reference CSV, or `-` for stdin (default: $AYUSYNC_DATA, then ./sih_data.csv).
    #[arg(long = "data", value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,

    /// Result format.
    #[arg(long = "output", value_enum, default_value = "table", global = true)]
    pub output: OutputFormatArg,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Search NAMASTE and ICD-11 terms (case-insensitive substring).
    Search(SearchArgs),

    /// Translate a code from either system into the other.
    Translate(TranslateArgs),

    /// List every record in the reference table.
    Records,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Text to look for in either term.
    #[arg(value_name = "QUERY", value_parser = non_empty_trimmed)]
    pub query: String,
}

#[derive(Parser)]
pub struct TranslateArgs {
    /// NAMASTE or ICD-11 code (e.g. A01 or 1D01).
    #[arg(value_name = "CODE", value_parser = non_empty_trimmed)]
    pub code: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn non_empty_trimmed(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}
