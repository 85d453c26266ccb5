//! Logging macros for ergonomic log message formatting.
//!
//! These macros take a logger expression, optional `source:` and `code:`
//! tags, and `format!` style arguments.
//!
//! # Examples
//!
//! ```
//! use boom_log::prelude::*;
//! use boom_log::{error, info};
//!
//! let logger = Logger::new(BuildMode::Release);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Tagged with a source and a code
//! error!(logger, source: "db", code: "E17", "query failed after {} retries", 3);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use boom_log::prelude::*;
/// # let logger = Logger::new(BuildMode::Release);
/// use boom_log::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, code: "HTTP500", "Error code: {}", 500);
/// log!(logger, LogLevel::Warning, source: "cache", "miss for {}", "key");
/// log!(logger, LogLevel::Error, code: "E1", source: "db", "tags in either order");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, source: $source:expr, code: $code:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $source, $code)
    };
    ($logger:expr, $level:expr, code: $code:expr, source: $source:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $source, $code)
    };
    ($logger:expr, $level:expr, source: $source:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), $source, "")
    };
    ($logger:expr, $level:expr, code: $code:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), "", $code)
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), "", "")
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use boom_log::prelude::*;
/// # let logger = Logger::new(BuildMode::Debug);
/// use boom_log::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use boom_log::prelude::*;
/// # let logger = Logger::new(BuildMode::Release);
/// use boom_log::warning;
/// warning!(logger, source: "retry", "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use boom_log::prelude::*;
/// # let logger = Logger::new(BuildMode::Release);
/// use boom_log::critical;
/// critical!(logger, code: "OOM", "Unable to recover from error: {}", "out of memory");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}
