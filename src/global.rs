//! Process-wide logger handle
//!
//! The handle is created on first use with the default file and console
//! streams and the build mode of this crate. Call [`init`] before anything
//! logs to install a differently configured [`Logger`] instead. The handle
//! lives for the rest of the process; there is no teardown.
//!
//! ```no_run
//! boom_log::global::logger().info("service started", "main", "");
//! ```

use crate::core::{Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Get the process-wide logger, creating it on first call
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::default)
}

/// Install `logger` as the process-wide logger.
///
/// Fails with [`LoggerError::AlreadyInitialized`] once the handle exists,
/// including when something already logged through [`logger`].
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// Whether the process-wide logger has been created yet
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}
