//! Runtime configuration from environment variables.
//!
//! `main` loads a `.env` file first (via `dotenv`), so the same keys can be
//! set there. [`ENV_FORMAT`] and [`ENV_LOG_LEVEL`] are read by the clap
//! parser in [`crate::cli`]; this module covers what is not a flag.

use std::path::PathBuf;

/// Path of the log4rs YAML configuration.
pub const ENV_LOG_CONFIG: &str = "SUBNET_PLANNER_LOG_CONFIG";
/// Output format when `--format` is not given: `table`, `csv` or `json`.
pub const ENV_FORMAT: &str = "SUBNET_PLANNER_FORMAT";
/// Log level when `--log-level` is not given.
pub const ENV_LOG_LEVEL: &str = "SUBNET_PLANNER_LOG_LEVEL";

/// Settings that come from the environment only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// log4rs YAML file; logging falls back to stderr when it does not exist.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from("log4rs.yml"),
        }
    }
}

impl Config {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset or empty keys.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|value| !value.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        config
    }
}
