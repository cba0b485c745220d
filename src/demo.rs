/// Demonstration Driver Module
///
/// One cycle: ask for a `user_name`, build the lookup statement with the
/// selected strategy, echo the SQL text, execute it, and render whatever
/// comes back. A failure anywhere in the cycle is reported and swallowed
/// so the session is still closed; closing happens on every path and its
/// outcome is what the caller sees.

use crate::core::db::Database;
use crate::core::Result;
use crate::prompt::PromptSource;
use crate::render::{self, OutputFormat};
use crate::strategy::{build_query, Strategy};
use tracing::{debug, error};

/// Runs a single prompt-build-execute-render cycle and closes the
/// session afterwards.
///
/// # Errors
///
/// Only closing the session can fail here. Errors from the cycle itself
/// (prompt, execution, rendering) are printed to stderr and logged, then
/// dropped, mirroring how a lookup failure should not leak the
/// connection.
pub fn run_once<P, D>(
    prompt: &mut P,
    db: &mut D,
    strategy: Strategy,
    format: OutputFormat,
) -> Result<()>
where
    P: PromptSource + ?Sized,
    D: Database + ?Sized,
{
    if let Err(err) = query_cycle(prompt, db, strategy, format) {
        error!("Demo cycle failed: {}", err);
        eprintln!("Error: {}", err);
    }
    db.close()
}

fn query_cycle<P, D>(
    prompt: &mut P,
    db: &mut D,
    strategy: Strategy,
    format: OutputFormat,
) -> Result<()>
where
    P: PromptSource + ?Sized,
    D: Database + ?Sized,
{
    let user_name = prompt.field("user_name")?;
    let query = build_query(strategy, &user_name);
    debug!("Built {} query for input {:?}", query.strategy, user_name);

    // Echo the statement text before running it; with the parameterized
    // strategy this shows the placeholder, never the value.
    println!("{}", query.sql);

    let results = db.run(&query.sql, &query.params)?;
    for result in &results {
        println!("{}", render::render(result, format)?);
    }
    Ok(())
}
