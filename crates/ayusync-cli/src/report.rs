//! Rendering of query results for the terminal.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use ayusync_model::{CodeSystem, Record, Translation};

/// Message shown instead of an empty table.
pub const NO_MATCHES: &str = "No matching terms found.";

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON in the service contract shape.
    Json,
}

/// Render a list of records.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_records(records: &[&Record], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records),
        OutputFormat::Table if records.is_empty() => Ok(NO_MATCHES.to_string()),
        OutputFormat::Table => Ok(records_table(records).to_string()),
    }
}

/// Render a single translation.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_translation(
    translation: &Translation,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(translation),
        OutputFormat::Table => Ok(translation_table(translation).to_string()),
    }
}

fn records_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("NAMASTE Code"),
        header_cell("NAMASTE Term"),
        header_cell("ICD-11 Code"),
        header_cell("ICD-11 Term"),
    ]);
    apply_table_style(&mut table);
    for record in records {
        table.add_row(vec![
            code_cell(&record.namaste_code),
            term_cell(record.namaste_term.as_deref()),
            code_cell(&record.icd11_code),
            term_cell(record.icd11_term.as_deref()),
        ]);
    }
    table
}

fn translation_table(translation: &Translation) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(""),
        header_cell("System"),
        header_cell("Code"),
        header_cell("Term"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        label_cell("Input"),
        system_cell(translation.input_system),
        code_cell(&translation.input_code),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        label_cell("Translation"),
        system_cell(translation.translation.system),
        code_cell(&translation.translation.code),
        term_cell(translation.translation.term.as_deref()),
    ]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn code_cell(code: &str) -> Cell {
    if code.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(code)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn term_cell(term: Option<&str>) -> Cell {
    match term {
        Some(term) => Cell::new(term),
        None => dim_cell("-"),
    }
}

fn system_cell(system: CodeSystem) -> Cell {
    let color = match system {
        CodeSystem::Namaste => Color::Green,
        CodeSystem::Icd11 => Color::Magenta,
    };
    Cell::new(system).fg(color)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
