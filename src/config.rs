//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::calc::SumStrategy;
use crate::models::ParseMode;
use crate::store::DEFAULT_TABLE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Table the sums are stored in
    pub table_name: String,
    /// Directory for the file-backed store; None keeps the table in memory
    pub store_path: Option<PathBuf>,
    /// How sums are computed on a miss
    pub sum_strategy: SumStrategy,
    /// How strictly `len` is parsed
    pub parse_mode: ParseMode,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `TABLE_NAME` - Store table name (default: sumtable)
    /// - `STORE_PATH` - Directory for the file store (default: unset, in-memory)
    /// - `SUM_STRATEGY` - `closed-form` or `accumulate` (default: closed-form)
    /// - `PARSE_MODE` - `strict` or `lenient` (default: strict)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            table_name: non_empty_var("TABLE_NAME").unwrap_or(defaults.table_name),
            store_path: non_empty_var("STORE_PATH").map(PathBuf::from),
            sum_strategy: parse_var("SUM_STRATEGY").unwrap_or(defaults.sum_strategy),
            parse_mode: parse_var("PARSE_MODE").unwrap_or(defaults.parse_mode),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            table_name: DEFAULT_TABLE.to_string(),
            store_path: None,
            sum_strategy: SumStrategy::ClosedForm,
            parse_mode: ParseMode::Strict,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
