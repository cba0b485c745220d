use crate::core::db::QueryResult;
use crate::core::{InjeqlError, Result};

/// Result Rendering Module
///
/// Two output formats: a plain text table for reading at the terminal,
/// and a JSON array of row objects for piping into other tools. Both
/// operate on the stringified `QueryResult` rows, so a rendered cell is
/// exactly what the executor produced for it.

use clap::ValueEnum;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// How query results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Column headers, a separator line, then one line per row.
    Table,
    /// A JSON array with one object per row, keyed by column name.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Renders a result set in the requested format.
pub fn render(result: &QueryResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => render_json(result),
    }
}

/// Renders a result set as a plain text table ending in a row count.
/// Statements that return no columns (DDL, inserts) render as just the
/// count line.
pub fn render_table(result: &QueryResult) -> String {
    let mut output = String::new();
    if !result.columns.is_empty() {
        let header = result.columns.join(" | ");
        output.push_str(&header);
        output.push('\n');
        output.push_str(&"-".repeat(header.len()));
        output.push('\n');
    }
    for row in &result.rows {
        output.push_str(&row.join(" | "));
        output.push('\n');
    }
    output.push_str(&format!("\n({} rows)", result.row_count));
    output
}

/// Renders a result set as a JSON array of column-keyed objects.
pub fn render_json(result: &QueryResult) -> Result<String> {
    let mut rows = Vec::new();
    for row in &result.rows {
        let mut row_map = BTreeMap::new();
        for (i, value) in row.iter().enumerate() {
            if let Some(column) = result.columns.get(i) {
                row_map.insert(column.clone(), value.clone());
            }
        }
        rows.push(row_map);
    }
    serde_json::to_string(&rows).map_err(InjeqlError::Json)
}
