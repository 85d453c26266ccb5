//! # Boom Log
//!
//! A small, synchronous logging library. Callers emit leveled events and a
//! [`Logger`] fans each one out to named streams, each filtering by its own
//! set of levels.
//!
//! ## Features
//!
//! - **Named Streams**: Register, look up and remove destinations by name
//! - **Level Masks**: Every stream picks the exact levels it reacts to
//! - **Built-in Streams**: Console, append-per-event file, and in-memory archive
//! - **Thread Safe**: Registry and streams may be shared across threads
//!
//! ```
//! use boom_log::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new(BuildMode::Release);
//! let errors = Arc::new(ArchiveStream::new());
//! errors.set_levels(LogLevel::Error | LogLevel::Critical);
//! logger.add_stream("errors", errors.clone());
//!
//! logger.info("ignored by the errors stream", "", "");
//! logger.error("disk full", "storage", "E028");
//!
//! assert_eq!(errors.len(), 1);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod streams;

pub mod prelude {
    pub use crate::core::{
        BuildMode, Event, LevelFilter, LevelMask, LogLevel, Logger, LoggerBuilder, LoggerError,
        LoggerMetrics, Result, Stream, StreamExt, DEFAULT_CONSOLE_STREAM, DEFAULT_FILE_STREAM,
    };
    pub use crate::streams::{ArchiveStream, ConsoleStream, FileStream};
}

pub use crate::core::{
    BuildMode, Event, LevelFilter, LevelMask, LogLevel, Logger, LoggerBuilder, LoggerError,
    LoggerMetrics, Result, Stream, StreamExt, DEFAULT_CONSOLE_STREAM, DEFAULT_FILE_STREAM,
    EVENT_TIMESTAMP_FORMAT,
};
pub use global::logger;
pub use streams::{ArchiveStream, ConsoleStream, FileStream, DEFAULT_LOG_FILE};
