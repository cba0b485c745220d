/// Query Execution Module
///
/// This module executes SQL statements and shapes the returned rows for
/// display. Values are stringified per cell; rows keep the order the
/// database returns them in.

use crate::core::{InjeqlError, Result};
use rusqlite::{params_from_iter, types::ValueRef, Connection};

/// Represents the result of a SQL statement execution
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Column names from the query result
    pub columns: Vec<String>,
    /// Rows of data as string values
    pub rows: Vec<Vec<String>>,
    /// Number of rows returned
    pub row_count: usize,
}

impl QueryResult {
    /// Creates a new QueryResult from column names and row data
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let row_count = rows.len();
        QueryResult {
            columns,
            rows,
            row_count,
        }
    }
}

/// Query execution service that operates on a database connection
pub struct QueryExecutor<'a> {
    connection: &'a Connection,
}

impl<'a> QueryExecutor<'a> {
    /// Creates a new QueryExecutor for the given connection
    pub fn new(connection: &'a Connection) -> Self {
        QueryExecutor { connection }
    }

    /// Executes a single SQL statement, binding `params` to its
    /// placeholders, and returns the formatted result set.
    ///
    /// The raw statement text and the parameter values are kept separate
    /// all the way to the driver; only placeholder markers (`?1`, `?2`,
    /// ...) in the text are ever filled from `params`. Statements that
    /// return no rows (DDL, DML) yield an empty result set.
    ///
    /// # Errors
    ///
    /// Returns `InjeqlError::Query` if the statement cannot be prepared
    /// (bad syntax, missing table) or fails mid-execution.
    pub fn execute(&self, sql: &str, params: &[String]) -> Result<QueryResult> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .map_err(|e| InjeqlError::Query(format!("Failed to prepare statement: {}", e)))?;

        // Get column names before iterating; DDL statements have none.
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let mut values = Vec::new();
                for i in 0..column_count {
                    let value_ref = row.get_ref(i)?;
                    values.push(format_value(value_ref));
                }
                Ok(values)
            })
            .map_err(|e| InjeqlError::Query(format!("Query execution failed: {}", e)))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| InjeqlError::Query(format!("Result processing failed: {}", e)))?;

        Ok(QueryResult::new(columns, rows))
    }
}

/// Formats a SQLite value for display
fn format_value(value: ValueRef) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).to_string(),
        ValueRef::Blob(b) => format!("<BLOB: {} bytes>", b.len()),
    }
}
