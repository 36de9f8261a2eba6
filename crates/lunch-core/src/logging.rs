//! File logging for the lunch binary.
//!
//! The terminal belongs to the wheel UI, so logs only ever go to a daily
//! rolling file under `$LUNCH_HOME/logs`.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "LUNCH_LOG";

const LOG_FILE_PREFIX: &str = "lunch.log";

/// Keeps the background log writer alive. Drop it last.
pub struct LoggingGuard {
    file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    pub fn is_active(&self) -> bool {
        self.file_guard.is_some()
    }
}

/// Builds the filter: `LUNCH_LOG` wins, then `default_level`, then `info`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber writing to `log_dir`.
///
/// Logging is silently disabled when the directory cannot be created;
/// a second call in the same process is a no-op.
pub fn init_logging(log_dir: &Path, default_level: &str) -> LoggingGuard {
    if std::fs::create_dir_all(log_dir).is_err() {
        return LoggingGuard { file_guard: None };
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .with_ansi(false)
        .compact()
        .with_writer(file_writer);

    let installed = tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(dir = %log_dir.display(), "logging initialized");
    }

    LoggingGuard {
        file_guard: Some(guard),
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        // An unparsable level must not panic.
        let filter = build_filter("this is [not a filter");
        let _ = filter.to_string();
    }

    #[test]
    fn test_init_logging_creates_dir() {
        let dir = tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_logging(&log_dir, "debug");
        assert!(guard.is_active());
        assert!(log_dir.is_dir());
    }
}
