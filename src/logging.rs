//! log4rs setup.
//!
//! Logs always go to stderr; stdout is reserved for the rendered plan.

use crate::config::Config;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;

const LOG_PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}";

/// Build the console-only log4rs configuration used when no YAML file exists.
pub fn stderr_config(level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let config = LogConfig::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Resolve the log4rs configuration.
///
/// With `config.log_config` present its appenders and per-module loggers are
/// used, but the root level is always `level`. Without the file this is
/// [`stderr_config`].
pub fn load_log_config(config: &Config, level: LevelFilter) -> Result<LogConfig, Box<dyn Error>> {
    if !config.log_config.exists() {
        return stderr_config(level);
    }

    let mut file_config =
        log4rs::config::load_config_file(&config.log_config, Default::default())?;
    file_config.root_mut().set_level(level);
    Ok(file_config)
}

/// Install the logger from [`load_log_config`].
pub fn init_logging(config: &Config, level: LevelFilter) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(load_log_config(config, level)?)?;
    log::debug!(
        "Logging at {level}, log4rs file {} {}",
        config.log_config.display(),
        if config.log_config.exists() { "loaded" } else { "not found" }
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_log_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "subnet-planner-{}-{name}.yml",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_stderr_config() {
        let config = stderr_config(LevelFilter::Warn).unwrap();
        assert_eq!(config.appenders().len(), 1);
        assert_eq!(config.root().level(), LevelFilter::Warn);
    }

    #[test]
    fn test_load_log_config_without_file() {
        let config = Config {
            log_config: PathBuf::from("does/not/exist/log4rs.yml"),
        };
        let log_config = load_log_config(&config, LevelFilter::Trace).unwrap();
        assert_eq!(log_config.root().level(), LevelFilter::Trace);
        assert_eq!(log_config.appenders().len(), 1);
    }

    #[test]
    fn test_load_log_config_level_overrides_file() {
        let path = write_log_file(
            "override",
            r#"
appenders:
  stderr:
    kind: console
    target: stderr
root:
  level: warn
  appenders:
    - stderr
loggers:
  subnet_planner::processing:
    level: info
"#,
        );
        let config = Config { log_config: path.clone() };
        let log_config = load_log_config(&config, LevelFilter::Debug).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(log_config.root().level(), LevelFilter::Debug);
        assert_eq!(log_config.root().appenders().to_vec(), vec!["stderr".to_string()]);
        assert_eq!(log_config.appenders().len(), 1);
        assert_eq!(log_config.loggers().len(), 1);
    }

    #[test]
    fn test_load_log_config_invalid_file() {
        let path = write_log_file("invalid", "appenders: [not, a, map]\n");
        let config = Config { log_config: path.clone() };
        let result = load_log_config(&config, LevelFilter::Info);
        std::fs::remove_file(&path).ok();
        assert!(result.is_err());
    }
}
