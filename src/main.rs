use clap::Parser;
use injeql::config::{self, Config};
use injeql::core::db::Session;
use injeql::core::Result;
use injeql::prompt::LinePrompt;
use injeql::render::OutputFormat;
use injeql::strategy::Strategy;
use injeql::{demo, seed};
use std::path::PathBuf;
use std::process;
use tracing::info;

/// A terminal-native demonstration of SQL injection and its mitigations.
#[derive(Parser, Debug)]
#[command(name = "injeql", version, about)]
struct Cli {
    /// Path to the SQLite database file (defaults to an in-memory database)
    #[arg(long)]
    database: Option<String>,

    /// Query-building strategy to demonstrate
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Output format for result sets
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Create the user table and sample rows before the demo
    #[arg(long)]
    seed: bool,

    /// Allow one submission to carry several SQL statements
    #[arg(long)]
    multiple_statements: bool,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // Initialize the logging system using tracing subscriber
    tracing_subscriber::fmt::init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => match config::discover() {
            Some(path) => config::load_config(path)?,
            None => Config::default(),
        },
    };

    // Command line flags win over the config file.
    let database = cli.database.unwrap_or(config.database.path);
    let multiple_statements = cli.multiple_statements || config.database.multiple_statements;
    let strategy = cli.strategy.unwrap_or(config.demo.strategy);
    let format = cli.format.unwrap_or(config.demo.format);

    info!(
        "Starting injeql with {} strategy against {}",
        strategy, database
    );

    let mut session = match Session::open(&database, multiple_statements) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Error: failed to open database {}: {}", database, err);
            return Ok(());
        }
    };

    // In-memory databases are always empty, so they get seeded whether
    // asked or not.
    if cli.seed || database == ":memory:" {
        match session.connection().and_then(seed::seed) {
            Ok(inserted) if inserted > 0 => info!("Seeded user table with {} rows", inserted),
            Ok(_) => {}
            Err(err) => eprintln!("Error: failed to seed user table: {}", err),
        }
    }

    demo::run_once(&mut LinePrompt::stdin(), &mut session, strategy, format)
}
