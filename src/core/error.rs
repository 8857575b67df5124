//! Error types for the logger

use std::time::Duration;

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Failures surfaced by the logger's control operations.
///
/// The hot path (`write`/`enqueue`) is fire-and-forget by contract and
/// never returns these; they come from flush, shutdown, and backend
/// construction.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error from a sink
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The stream's consumer has already been shut down
    #[error("message stream already stopped")]
    StreamStopped,

    /// Flush token was not acknowledged in time
    #[error("flush did not complete within {timeout:?}")]
    FlushTimeout { timeout: Duration },

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
