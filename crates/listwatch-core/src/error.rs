//! Error types and handling for listwatch-core operations.
//!
//! Errors are grouped by the failure surface they come from: configuration,
//! network, response parsing, and the seen-set store. Every public function in
//! this crate returns [`Result<T, Error>`].
//!
//! Nothing in listwatch retries automatically; [`Error::is_recoverable`] only
//! reports whether a retry by an outer supervisor (cron, systemd timer) is
//! likely to succeed.

use thiserror::Error;

/// The main error type for listwatch-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed.
    ///
    /// Covers filesystem operations around the store file. The underlying
    /// `std::io::Error` is preserved for detailed inspection.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed.
    ///
    /// Covers the single page fetch. The underlying `reqwest::Error` is
    /// preserved; a non-2xx status surfaces here via `error_for_status`.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body could not be interpreted.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The seen-set store cannot be opened, read, or written.
    ///
    /// This includes the file being locked by another process and exhausted
    /// disk. Fatal for the current run; the caller should terminate.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL is malformed or invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable by retrying the whole run.
    ///
    /// Returns `true` for errors that are typically temporary (network
    /// timeouts, connection failures, interrupted I/O) and `false` for
    /// permanent ones (bad configuration, malformed URLs).
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// Useful for grouping errors in logs or exit-path diagnostics.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Storage(_) => "storage",
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
