use crate::core::{InjeqlError, Result};
use crate::render::OutputFormat;
use crate::strategy::Strategy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration. Command line flags override whatever is set
/// here.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub demo: DemoConfig,
}

/// Database-related configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or `:memory:`.
    pub path: String,
    /// Whether a single submission may carry several SQL statements.
    pub multiple_statements: bool,
}

/// Demo-related configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Which query-building strategy to demonstrate.
    pub strategy: Strategy,
    /// How result sets are printed.
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: DatabaseConfig::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: ":memory:".to_string(),
            multiple_statements: false,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            strategy: Strategy::Unsafe,
            format: OutputFormat::Table,
        }
    }
}

/// Loads configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns `InjeqlError::Config` when the file cannot be read or does
/// not parse as valid configuration TOML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| InjeqlError::Config(e.to_string()))?;
    toml::from_str(&content).map_err(|e| InjeqlError::Config(e.to_string()))
}

/// Returns the conventional config path (`<config dir>/injeql/config.toml`)
/// if a file exists there.
pub fn discover() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("injeql").join("config.toml"))
        .filter(|path| path.exists())
}
