//! Seeds the demo schema: a `user` table with a handful of sample rows
//! so the lookups have something to return.

use crate::core::Result;
use rusqlite::{params, Connection};
use tracing::debug;

/// Rows inserted into an empty `user` table.
const SAMPLE_USERS: [(&str, &str); 3] = [
    ("alice", "alice@example.com"),
    ("bob", "bob@example.com"),
    ("charlie", "charlie@example.com"),
];

/// Creates the `user` table if needed and fills an empty one with the
/// sample rows. Returns the number of rows inserted.
pub fn seed(conn: &Connection) -> Result<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT
        );",
    )?;

    let existing: i64 = conn.query_row("SELECT COUNT(*) FROM user", [], |row| row.get(0))?;
    if existing > 0 {
        debug!("user table already has {} rows, skipping seed", existing);
        return Ok(0);
    }

    for (name, email) in SAMPLE_USERS {
        conn.execute(
            "INSERT INTO user (name, email) VALUES (?1, ?2)",
            params![name, email],
        )?;
    }
    debug!("Seeded user table with {} rows", SAMPLE_USERS.len());
    Ok(SAMPLE_USERS.len())
}
