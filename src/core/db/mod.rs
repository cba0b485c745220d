/// Database Module
///
/// The database layer is split into two concerns:
/// - **Connection Management** (`connection.rs`): the scoped `Session`
///   resource with its open/close lifecycle
/// - **Query Execution** (`query.rs`): statement execution and result
///   formatting
///
/// The `Database` trait is the seam between the demo flow and the
/// driver. The flow only ever runs a statement or releases the
/// connection, so tests can stand in a counting mock and verify the
/// lifecycle guarantees (one close per invocation, no query after a
/// failed prompt).
pub mod connection;
pub mod query;

pub use connection::*;
pub use query::*;

use crate::core::Result;

/// Minimal driver surface the demo flow depends on.
pub trait Database {
    /// Executes one built query. Statements and bound parameters travel
    /// separately; a driver may refuse text containing more than one
    /// statement. Returns one result set per executed statement.
    fn run(&mut self, sql: &str, params: &[String]) -> Result<Vec<QueryResult>>;

    /// Releases the underlying connection. Exactly one call per
    /// invocation is expected; a second call is an error.
    fn close(&mut self) -> Result<()>;
}
