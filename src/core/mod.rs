//! Core logger types and traits

pub mod build_mode;
pub mod error;
pub mod event;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod stream;

pub use build_mode::BuildMode;
pub use error::{LoggerError, Result};
pub use event::{Event, EVENT_TIMESTAMP_FORMAT};
pub use log_level::{LevelMask, LogLevel};
pub use logger::{Logger, LoggerBuilder, DEFAULT_CONSOLE_STREAM, DEFAULT_FILE_STREAM};
pub use metrics::LoggerMetrics;
pub use stream::{LevelFilter, Stream, StreamExt};
