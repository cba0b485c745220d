//! SQL text utilities: literal quoting and statement-boundary analysis.
//!
//! The driver exposes no escaping helper, so literal quoting lives here.
//! Statement counting backs the `multiple_statements` switch: with the
//! switch off, text that parses into more than one statement is refused
//! before the driver ever sees it.

use sqlparser::dialect::SQLiteDialect;
use sqlparser::parser::Parser;

/// Quotes a string as a SQLite text literal.
///
/// Every embedded single quote is doubled and the result is wrapped in
/// single quotes, so the value cannot terminate the surrounding literal.
#[inline]
#[must_use]
pub fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Splits SQL text into its component statements, re-serialized one per
/// entry. Returns `None` when the text does not parse at all (the engine
/// is then left to report the malformed statement itself).
pub fn split_statements(sql: &str) -> Option<Vec<String>> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, sql).ok()?;
    Some(statements.iter().map(|stmt| stmt.to_string()).collect())
}

/// Number of statements in the text, or `None` when it does not parse.
pub fn statement_count(sql: &str) -> Option<usize> {
    let statements = Parser::parse_sql(&SQLiteDialect {}, sql).ok()?;
    Some(statements.len())
}
