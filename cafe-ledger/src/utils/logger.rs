//! Logging Infrastructure
//!
//! Structured logging on stderr (stdout carries console responses), with an
//! optional daily rolling file instead.

use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger from the loaded configuration
pub fn init_logger(config: &Config) {
    init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );
}

/// Initialize the logger with optional file output
///
/// `log_level` accepts anything `EnvFilter` does (`debug`,
/// `cafe_ledger=trace`, ...); unparseable values mean `info`. A second call
/// is a no-op.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir.filter(|dir| !dir.trim().is_empty()).and_then(|dir| {
        let log_path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(log_path) {
            eprintln!("Cannot create log directory {}: {}", dir, e);
            return None;
        }
        Some(tracing_appender::rolling::daily(log_path, "cafe-ledger"))
    });

    let result = match (json, file_appender) {
        (true, Some(appender)) => builder.json().with_writer(appender).try_init(),
        (true, None) => builder.json().with_writer(std::io::stderr).try_init(),
        (false, Some(appender)) => builder.with_ansi(false).with_writer(appender).try_init(),
        (false, None) => builder.with_writer(std::io::stderr).try_init(),
    };
    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
