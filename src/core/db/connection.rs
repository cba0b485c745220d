/// Connection Management Module
///
/// This module provides the `Session` type: a database connection as an
/// explicitly passed, scoped resource. A session is opened once at the
/// start of a demo invocation, used by exactly one flow, and released
/// exactly once at the end, on the success path and the failure path
/// alike. There is deliberately no global connection state.

use crate::core::db::{Database, QueryExecutor, QueryResult};
use crate::core::{InjeqlError, Result};
use crate::sql;
use rusqlite::Connection;
use tracing::debug;

/// A scoped database connection with its fixed, set-once configuration.
#[derive(Debug)]
pub struct Session {
    /// Active database connection (`None` once released)
    connection: Option<Connection>,
    /// Path the connection was opened on (`:memory:` for scratch)
    path: String,
    /// Whether stacked statements may execute in one call
    multiple_statements: bool,
}

impl Session {
    /// Opens a SQLite database at the specified path.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file, or ":memory:" for an
    ///   in-memory database
    /// * `multiple_statements` - Whether one call may carry stacked
    ///   statements; the demo leaves this off
    ///
    /// # Errors
    ///
    /// Returns `InjeqlError::Database` when the file cannot be opened.
    pub fn open(path: &str, multiple_statements: bool) -> Result<Self> {
        let conn = Connection::open(path)?;

        // Initialize connection with common pragmas
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        debug!(
            "Opened database session at {} (multiple_statements: {})",
            path, multiple_statements
        );

        Ok(Session {
            connection: Some(conn),
            path: path.to_string(),
            multiple_statements,
        })
    }

    /// Returns the live connection, or an `App` error when the session
    /// has already been released.
    pub fn connection(&self) -> Result<&Connection> {
        self.connection
            .as_ref()
            .ok_or_else(|| InjeqlError::App("session is closed".to_string()))
    }

    /// The path this session was opened on.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether stacked statements are allowed on this session.
    pub fn multiple_statements(&self) -> bool {
        self.multiple_statements
    }

    /// Whether the session still holds a connection.
    pub fn is_open(&self) -> bool {
        self.connection.is_some()
    }
}

impl Database for Session {
    /// Executes the statement text against this session's connection.
    ///
    /// Text that parses into more than one statement is refused while
    /// `multiple_statements` is off, so a stacked injection never reaches
    /// the driver. With the switch on, the statements run sequentially
    /// and each contributes its own result set. Text the splitter cannot
    /// parse at all runs as a single raw statement and the engine reports
    /// it.
    fn run(&mut self, sql_text: &str, params: &[String]) -> Result<Vec<QueryResult>> {
        let multiple_statements = self.multiple_statements;
        let conn = self.connection()?;
        let executor = QueryExecutor::new(conn);

        match sql::split_statements(sql_text) {
            Some(statements) if statements.len() > 1 => {
                if !multiple_statements {
                    return Err(InjeqlError::Query(format!(
                        "statement text contains {} statements but multiple statements are disabled",
                        statements.len()
                    )));
                }
                debug!("Executing {} stacked statements", statements.len());
                statements
                    .iter()
                    .map(|stmt| executor.execute(stmt, params))
                    .collect()
            }
            _ => Ok(vec![executor.execute(sql_text, params)?]),
        }
    }

    /// Releases the connection. The second call on a session is an
    /// error, which keeps "released exactly once" observable.
    fn close(&mut self) -> Result<()> {
        match self.connection.take() {
            Some(conn) => {
                debug!("Closing database session at {}", self.path);
                conn.close().map_err(|(_, err)| InjeqlError::Database(err))
            }
            None => Err(InjeqlError::App(
                "session is already closed".to_string(),
            )),
        }
    }
}
