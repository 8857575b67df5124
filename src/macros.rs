//! Logging macros for `format!`-style message construction.
//!
//! # Examples
//!
//! ```no_run
//! use streamlog::prelude::*;
//! use streamlog::{info, error};
//!
//! let logger = Logger::new("api");
//!
//! info!(logger, "server started");
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! error!(logger, "request {} failed: {}", 17, "timeout");
//! ```

/// Log a message at an explicit level name with automatic formatting.
///
/// ```no_run
/// # use streamlog::prelude::*;
/// # let logger = Logger::new("api");
/// use streamlog::log;
/// log!(logger, "AUDIT", "user {} logged in", 42);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log an INIT-level message.
#[macro_export]
macro_rules! init {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::INIT, $($arg)+)
    };
}

/// Log an INFO-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::INFO, $($arg)+)
    };
}

/// Log a DEBUG-level message. Suppressed unless the logger's debug flag is
/// set.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::DEBUG, $($arg)+)
    };
}

/// Log a WARNING-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::WARNING, $($arg)+)
    };
}

/// Log an ERROR-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::ERROR, $($arg)+)
    };
}

/// Log a FATAL-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::FATAL, $($arg)+)
    };
}

/// Log a SUCCESS-level message.
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::core::level::SUCCESS, $($arg)+)
    };
}
