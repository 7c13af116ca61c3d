//! File logging.
//!
//! The TUI owns stdout, so logs go to `<log_dir>/stroke-risk.log` instead.
//! `RUST_LOG` overrides the default filter.

mod sanitize;

pub use sanitize::{sanitize, SanitizingMakeWriter, SanitizingWriter, REDACTED};

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name inside the log directory
pub const LOG_FILE_NAME: &str = "stroke-risk.log";

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "stroke_risk=info";

/// Keeps the background log writer running. Buffered lines are flushed
/// when this is dropped.
#[derive(Debug)]
pub struct LogGuard {
    pub path: PathBuf,
    _worker: WorkerGuard,
}

/// Full path of the log file for a directory.
pub fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Create the log directory and open the log file for appending.
pub fn open_log_file(log_dir: &Path) -> io::Result<fs::File> {
    fs::create_dir_all(log_dir)?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path(log_dir))
}

/// Install the global subscriber writing to the log file.
///
/// Lines are written on a background thread and pass through
/// [`SanitizingMakeWriter`] first. Returns `None` when `log_dir` is `None`;
/// otherwise the returned guard must be held until exit.
pub fn init_logging(log_dir: Option<&Path>) -> io::Result<Option<LogGuard>> {
    let Some(dir) = log_dir else {
        return Ok(None);
    };
    let file = open_log_file(dir)?;
    let (writer, worker) = tracing_appender::non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .try_init();

    Ok(Some(LogGuard {
        path: log_file_path(dir),
        _worker: worker,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_no_dir_disables_logging() {
        assert!(init_logging(None).unwrap().is_none());
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("logs");
        open_log_file(&dir).unwrap();
        assert!(log_file_path(&dir).exists());
    }

    #[test]
    fn test_init_logging_returns_path() {
        let temp = TempDir::new().unwrap();
        let guard = init_logging(Some(temp.path())).unwrap().unwrap();
        assert_eq!(guard.path, temp.path().join(LOG_FILE_NAME));
        assert!(temp.path().join(LOG_FILE_NAME).exists());
    }
}
