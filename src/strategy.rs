//! Query construction strategies.
//!
//! The demo builds one SELECT from one user-supplied value, and the only
//! thing that varies is how the value is incorporated: raw interpolation
//! (the vulnerability), literal escaping, or a bound placeholder. The
//! strategy is an explicit parameter chosen at call time, so all three
//! paths stay compiled and testable side by side.
//!
//! Lesson write-ups for this demo often describe an `employees` table in
//! a `company` database; the executable query has always read
//! `user.name`, so `user`/`name` is authoritative here and is what the
//! seed fixture provisions.

use crate::sql::quote_literal;
use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// How a user-supplied value is incorporated into the statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Raw interpolation inside single quotes; vulnerable to injection
    Unsafe,
    /// Literal quoting of the value before interpolation
    Escaped,
    /// Placeholder marker in the text, value bound by the driver
    Parameterized,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Unsafe => "unsafe",
            Strategy::Escaped => "escaped",
            Strategy::Parameterized => "parameterized",
        };
        write!(f, "{}", name)
    }
}

/// A constructed statement plus the values to bind to its placeholders.
/// Only the parameterized strategy ever populates `params`.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub strategy: Strategy,
    pub sql: String,
    pub params: Vec<String>,
}

/// Builds the demo SELECT for the given value under the given strategy.
///
/// The statement shapes:
///
/// * unsafe:        `select * from user WHERE name = '<value>';`
/// * escaped:       `select * from user WHERE name = '<quoted value>';`
/// * parameterized: `select * from user WHERE name = ?1;` + bound value
pub fn build_query(strategy: Strategy, user_name: &str) -> BuiltQuery {
    match strategy {
        Strategy::Unsafe => BuiltQuery {
            strategy,
            // The value lands between the quotes verbatim; a quote
            // character in it rewrites the statement itself.
            sql: format!("select * from user WHERE name = '{}';", user_name),
            params: Vec::new(),
        },
        Strategy::Escaped => BuiltQuery {
            strategy,
            sql: format!(
                "select * from user WHERE name = {};",
                quote_literal(user_name)
            ),
            params: Vec::new(),
        },
        Strategy::Parameterized => BuiltQuery {
            strategy,
            sql: "select * from user WHERE name = ?1;".to_string(),
            params: vec![user_name.to_string()],
        },
    }
}
