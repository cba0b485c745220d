//! Integration tests for the query-building strategies
//!
//! These tests run each strategy against a real SQLite database to
//! verify the demonstration's core claims:
//! - All strategies agree on benign input
//! - Quote-bearing input subverts or breaks only raw interpolation
//! - Stacked statements are refused unless explicitly enabled

#[cfg(test)]
mod tests {
    use injeql::core::db::{Database, QueryResult, Session};
    use injeql::seed;
    use injeql::strategy::{build_query, Strategy};
    use rusqlite::params;

    const ALL_STRATEGIES: [Strategy; 3] =
        [Strategy::Unsafe, Strategy::Escaped, Strategy::Parameterized];

    // Test infrastructure

    /// Opens an in-memory session with the seeded user table.
    fn seeded_session(multiple_statements: bool) -> Session {
        let session = Session::open(":memory:", multiple_statements).unwrap();
        seed::seed(session.connection().unwrap()).unwrap();
        session
    }

    /// Builds the lookup for `input` with `strategy` and runs it.
    fn run_strategy(
        session: &mut Session,
        strategy: Strategy,
        input: &str,
    ) -> injeql::core::Result<Vec<QueryResult>> {
        let query = build_query(strategy, input);
        session.run(&query.sql, &query.params)
    }

    /// Rows currently in the user table.
    fn user_count(session: &Session) -> i64 {
        session
            .connection()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM user", [], |row| row.get(0))
            .unwrap()
    }

    // Benign input

    /// Every strategy finds exactly the row it was asked for.
    #[test]
    fn test_all_strategies_find_a_seeded_row() {
        for strategy in ALL_STRATEGIES {
            let mut session = seeded_session(false);
            let results = run_strategy(&mut session, strategy, "alice").unwrap();

            assert_eq!(results.len(), 1, "{} strategy", strategy);
            assert_eq!(results[0].row_count, 1, "{} strategy", strategy);
            assert_eq!(results[0].rows[0][1], "alice", "{} strategy", strategy);
        }
    }

    /// On quote-free input the three strategies are indistinguishable.
    #[test]
    fn test_strategies_agree_on_benign_input() {
        let mut rows_by_strategy = Vec::new();
        for strategy in ALL_STRATEGIES {
            let mut session = seeded_session(false);
            let results = run_strategy(&mut session, strategy, "bob").unwrap();
            rows_by_strategy.push(results[0].rows.clone());
        }

        assert_eq!(rows_by_strategy[0], rows_by_strategy[1]);
        assert_eq!(rows_by_strategy[1], rows_by_strategy[2]);
    }

    // Tautology payloads

    /// The classic `' OR '1'='1` dumps the whole table through raw
    /// interpolation.
    #[test]
    fn test_tautology_dumps_the_table_with_raw_interpolation() {
        let mut session = seeded_session(false);
        let results = run_strategy(&mut session, Strategy::Unsafe, "' OR '1'='1").unwrap();

        assert_eq!(results[0].row_count, 3);
    }

    /// Escaping turns the payload into an ordinary (unmatched) name.
    #[test]
    fn test_escaped_strategy_treats_tautology_as_a_name() {
        let mut session = seeded_session(false);
        let results = run_strategy(&mut session, Strategy::Escaped, "' OR '1'='1").unwrap();

        assert_eq!(results[0].row_count, 0);
    }

    /// Binding keeps the payload out of the statement entirely.
    #[test]
    fn test_parameterized_strategy_treats_tautology_as_a_name() {
        let mut session = seeded_session(false);
        let results = run_strategy(&mut session, Strategy::Parameterized, "' OR '1'='1").unwrap();

        assert_eq!(results[0].row_count, 0);
    }

    // Legitimate apostrophes

    /// A real name containing a quote breaks raw interpolation while the
    /// other strategies find it.
    #[test]
    fn test_apostrophe_name_breaks_only_raw_interpolation() {
        let mut session = seeded_session(false);
        session
            .connection()
            .unwrap()
            .execute(
                "INSERT INTO user (name, email) VALUES (?1, ?2)",
                params!["o'hara", "ohara@example.com"],
            )
            .unwrap();

        // Raw interpolation leaves an unbalanced quote in the statement.
        assert!(run_strategy(&mut session, Strategy::Unsafe, "o'hara").is_err());

        let escaped = run_strategy(&mut session, Strategy::Escaped, "o'hara").unwrap();
        assert_eq!(escaped[0].row_count, 1);

        let parameterized = run_strategy(&mut session, Strategy::Parameterized, "o'hara").unwrap();
        assert_eq!(parameterized[0].row_count, 1);
    }

    // Stacked statements

    /// Raw interpolation of a stacked payload is refused outright while
    /// multiple statements are disabled, and the table survives.
    #[test]
    fn test_stacked_statements_are_refused_by_default() {
        let mut session = seeded_session(false);

        let err = run_strategy(&mut session, Strategy::Unsafe, "'; DROP TABLE user; --")
            .unwrap_err();
        assert!(err.to_string().contains("multiple statements"));

        assert_eq!(user_count(&session), 3);
    }

    /// With multiple statements enabled the same payload really does
    /// drop the table, one result set per statement.
    #[test]
    fn test_stacked_statements_execute_when_enabled() {
        let mut session = seeded_session(true);

        let results = run_strategy(&mut session, Strategy::Unsafe, "'; DROP TABLE user; --")
            .unwrap();
        assert_eq!(results.len(), 2);

        let table_count: i64 = session
            .connection()
            .unwrap()
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'user'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(table_count, 0);
    }

    /// Escaping folds the stacked payload into the string literal, so it
    /// stays one statement and nothing is dropped.
    #[test]
    fn test_escaped_strategy_keeps_stacked_payload_in_the_literal() {
        let mut session = seeded_session(false);

        let results =
            run_strategy(&mut session, Strategy::Escaped, "'; DROP TABLE user; --").unwrap();
        assert_eq!(results[0].row_count, 0);

        assert_eq!(user_count(&session), 3);
    }

    /// Binding does the same: the payload is just a value.
    #[test]
    fn test_parameterized_strategy_keeps_stacked_payload_as_a_value() {
        let mut session = seeded_session(false);

        let results =
            run_strategy(&mut session, Strategy::Parameterized, "'; DROP TABLE user; --").unwrap();
        assert_eq!(results[0].row_count, 0);

        assert_eq!(user_count(&session), 3);
    }
}
