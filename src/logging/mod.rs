//! File-backed tracing setup for the `stretchy` binary.
//!
//! The `stretchy` binary prints layouts to stdout, so logs go to a file
//! instead. Monitor them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Why the tracing subscriber could not be installed.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("Cannot create log directory {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that was requested
        path: PathBuf,
        /// Cause reported by the filesystem
        #[source]
        source: std::io::Error,
    },

    /// The log path names no file.
    #[error("Log path has no file name: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("A global tracing subscriber is already installed")]
    SubscriberAlreadySet,
}

/// Split a log path into the directory to create and the file name to write.
///
/// A bare file name resolves to the current directory.
fn split_log_path(log_path: &Path) -> Result<(PathBuf, &str), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name))
}

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_LEVEL`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Install a global fmt subscriber that appends to `log_path`.
///
/// Respects `RUST_LOG`, defaults to "info". Creates the log directory if it
/// doesn't exist.
///
/// # Errors
/// * `LoggingError::InvalidPath` if `log_path` has no file name
/// * `LoggingError::DirectoryCreation` if the directory cannot be created
/// * `LoggingError::SubscriberAlreadySet` if a global subscriber exists
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
