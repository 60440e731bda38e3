use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::config::LoggingConfig;
use crate::domain::DomainError;

const LOG_TARGET: &str = "device_info_lib";

/// Initialize logging with console output and, if enabled, daily-rotated JSON files.
///
/// Returns a guard that must be kept alive for the duration of the application.
/// When the guard is dropped, any remaining logs are flushed.
pub fn init_logging(
    logs_dir: &Path,
    config: &LoggingConfig,
) -> Result<Option<WorkerGuard>, DomainError> {
    let level = config.level.as_str();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={},warn", LOG_TARGET, level)));

    // Console logs go to stderr; stdout carries the report.
    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(env_filter);

    if config.file_logging {
        fs::create_dir_all(logs_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("device-info")
            .filename_suffix("log")
            .max_log_files(config.max_files.max(1) as usize)
            .build(logs_dir)
            .map_err(|e| DomainError::Io(format!("Failed to create log file appender: {}", e)))?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new(format!("{}={}", LOG_TARGET, level)));

        // try_init: a second initialization keeps the first subscriber.
        if tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .is_ok()
        {
            tracing::info!(
                logs_dir = ?logs_dir,
                level = level,
                max_files = config.max_files,
                "Logging initialized with file output"
            );
        }

        Ok(Some(guard))
    } else {
        let _ = tracing_subscriber::registry()
            .with(console_layer)
            .try_init();

        tracing::info!(level = level, "Logging initialized (console only)");

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("logs");
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_logging: true,
            max_files: 2,
        };

        let guard = init_logging(&logs_dir, &config).unwrap();

        assert!(guard.is_some());
        assert!(logs_dir.is_dir());
    }

    #[test]
    fn test_console_only_logging() {
        let temp_dir = TempDir::new().unwrap();
        let logs_dir = temp_dir.path().join("logs");
        let config = LoggingConfig {
            file_logging: false,
            ..LoggingConfig::default()
        };

        let guard = init_logging(&logs_dir, &config).unwrap();

        assert!(guard.is_none());
        assert!(!logs_dir.exists());
    }
}
