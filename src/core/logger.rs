//! Logger: the registry of named streams and the dispatch loop

use super::{
    build_mode::BuildMode,
    error::{LoggerError, Result},
    event::Event,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    stream::{Stream, StreamExt},
};
use crate::streams::{ConsoleStream, FileStream, DEFAULT_LOG_FILE};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Name of the file stream registered by [`Logger::with_default_streams`]
pub const DEFAULT_FILE_STREAM: &str = "defaultTextFile";

/// Name of the console stream registered by [`Logger::with_default_streams`]
pub const DEFAULT_CONSOLE_STREAM: &str = "defaultConsole";

/// Registry of named streams and the entry point for logging.
///
/// Every call to [`Logger::log`] builds one [`Event`] and offers it to each
/// registered stream in name order. Each stream decides through its own
/// level mask whether to handle it. Dispatch is synchronous: `log` returns
/// once every stream has been offered the event.
///
/// Streams are held as `Arc`s, so a stream removed from the registry stays
/// valid for anyone still holding it.
pub struct Logger {
    streams: RwLock<BTreeMap<String, Arc<dyn Stream>>>,
    build_mode: BuildMode,
    /// Show debug events even in release mode
    force_debug: AtomicBool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a logger with no streams registered
    #[must_use]
    pub fn new(build_mode: BuildMode) -> Self {
        Self {
            streams: RwLock::new(BTreeMap::new()),
            build_mode,
            force_debug: AtomicBool::new(false),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a logger with a file stream writing to `log.txt` and a console
    /// stream already registered, both accepting every level
    #[must_use]
    pub fn with_default_streams(build_mode: BuildMode) -> Self {
        let logger = Self::new(build_mode);
        logger.add_stream(DEFAULT_FILE_STREAM, Arc::new(FileStream::default()));
        logger.add_stream(DEFAULT_CONSOLE_STREAM, Arc::new(ConsoleStream::new()));
        logger
    }

    /// Register `stream` under `name`, replacing any stream already there
    pub fn add_stream(&self, name: impl Into<String>, stream: Arc<dyn Stream>) {
        let mut streams = self.streams.write();
        streams.insert(name.into(), stream);
    }

    pub fn get_stream(&self, name: &str) -> Option<Arc<dyn Stream>> {
        self.streams.read().get(name).cloned()
    }

    /// Unregister the stream under `name` and hand it back to the caller
    pub fn remove_stream(&self, name: &str) -> Option<Arc<dyn Stream>> {
        self.streams.write().remove(name)
    }

    /// Registered names in dispatch order
    pub fn stream_names(&self) -> Vec<String> {
        self.streams.read().keys().cloned().collect()
    }

    pub fn stream_count(&self) -> usize {
        self.streams.read().len()
    }

    /// Show debug events even when the logger was built in release mode.
    ///
    /// Has no effect in debug mode, where debug events are always shown.
    pub fn force_debug(&self, show: bool) {
        self.force_debug.store(show, Ordering::Release);
    }

    pub fn is_debug_visible(&self) -> bool {
        self.build_mode.is_debug() || self.force_debug.load(Ordering::Acquire)
    }

    pub fn build_mode(&self) -> BuildMode {
        self.build_mode
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Build an event and offer it to every registered stream.
    ///
    /// Empty `source` or `code` leave the field unset. Debug events are
    /// discarded before an event is built when debug output is hidden.
    /// Failures inside a stream are reported on stderr and counted in
    /// [`Logger::metrics`]; they never reach the caller or stop delivery to
    /// the remaining streams.
    pub fn log(&self, level: LogLevel, message: impl Into<String>, source: &str, code: &str) {
        if level == LogLevel::Debug && !self.is_debug_visible() {
            self.metrics.record_debug_suppressed();
            return;
        }

        let event = Event::new(level, message)
            .with_source(source)
            .with_code(code);
        self.dispatch(&event);
    }

    /// Offer an already built event to every registered stream.
    ///
    /// Unlike [`Logger::log`] this does not consult debug visibility.
    pub fn dispatch(&self, event: &Event) {
        // Snapshot so streams may log or edit the registry from `handle`
        let streams: Vec<(String, Arc<dyn Stream>)> = self
            .streams
            .read()
            .iter()
            .map(|(name, stream)| (name.clone(), Arc::clone(stream)))
            .collect();

        self.metrics.record_dispatched();
        for (name, stream) in &streams {
            self.notify_isolated(name, stream.as_ref(), event);
        }
    }

    /// Notify a single stream, containing both errors and panics
    fn notify_isolated(&self, name: &str, stream: &dyn Stream, event: &Event) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            stream.notify(event)
        }));

        match result {
            Ok(Ok(true)) => {
                self.metrics.record_delivery();
            }
            Ok(Ok(false)) => {
                // Filtered out by the stream's mask
            }
            Ok(Err(e)) => {
                eprintln!("[LOGGER ERROR] Stream '{}' failed: {}", name, e);
                self.metrics.record_failure();
            }
            Err(panic_info) => {
                eprintln!(
                    "[LOGGER CRITICAL] {}. Other streams continue to function.",
                    LoggerError::stream_panicked(name, panic_message(panic_info.as_ref()))
                );
                self.metrics.record_failure();
            }
        }
    }

    /// Flush every registered stream, returning the first error.
    ///
    /// A stream that fails or panics while flushing does not stop the
    /// remaining streams from being flushed.
    pub fn flush(&self) -> Result<()> {
        let streams: Vec<(String, Arc<dyn Stream>)> = self
            .streams
            .read()
            .iter()
            .map(|(name, stream)| (name.clone(), Arc::clone(stream)))
            .collect();

        let mut first_error = None;
        for (name, stream) in &streams {
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| stream.flush()));

            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Stream '{}' failed to flush: {}", name, e);
                    first_error.get_or_insert(e);
                }
                Err(panic_info) => {
                    let err = LoggerError::stream_panicked(
                        name.as_str(),
                        panic_message(panic_info.as_ref()),
                    );
                    eprintln!("[LOGGER CRITICAL] {} during flush", err);
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Values being tracked while debugging
    #[inline]
    pub fn debug(&self, message: impl Into<String>, source: &str, code: &str) {
        self.log(LogLevel::Debug, message, source, code);
    }

    /// Something expected has happened
    #[inline]
    pub fn info(&self, message: impl Into<String>, source: &str, code: &str) {
        self.log(LogLevel::Info, message, source, code);
    }

    /// Something unexpected has happened
    #[inline]
    pub fn warning(&self, message: impl Into<String>, source: &str, code: &str) {
        self.log(LogLevel::Warning, message, source, code);
    }

    /// An error that can be handled or recovered from
    #[inline]
    pub fn error(&self, message: impl Into<String>, source: &str, code: &str) {
        self.log(LogLevel::Error, message, source, code);
    }

    /// An error that may bring the program down
    #[inline]
    pub fn critical(&self, message: impl Into<String>, source: &str, code: &str) {
        self.log(LogLevel::Critical, message, source, code);
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use boom_log::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .build_mode(BuildMode::Release)
    ///     .default_streams(false)
    ///     .build();
    /// assert_eq!(logger.stream_count(), 0);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    /// Same as the process-wide logger: default streams, current build mode
    fn default() -> Self {
        Self::with_default_streams(BuildMode::current())
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use boom_log::prelude::*;
/// use std::sync::Arc;
///
/// let archive = Arc::new(ArchiveStream::new());
/// let logger = Logger::builder()
///     .build_mode(BuildMode::Release)
///     .force_debug(true)
///     .default_streams(false)
///     .stream("archive", archive.clone())
///     .build();
///
/// logger.debug("visible", "", "");
/// assert_eq!(archive.len(), 1);
/// ```
pub struct LoggerBuilder {
    build_mode: BuildMode,
    force_debug: bool,
    default_streams: bool,
    default_log_file: PathBuf,
    streams: Vec<(String, Arc<dyn Stream>)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            build_mode: BuildMode::current(),
            force_debug: false,
            default_streams: true,
            default_log_file: PathBuf::from(DEFAULT_LOG_FILE),
            streams: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn build_mode(mut self, mode: BuildMode) -> Self {
        self.build_mode = mode;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn force_debug(mut self, show: bool) -> Self {
        self.force_debug = show;
        self
    }

    /// Whether to register the default file and console streams
    #[must_use = "builder methods return a new value"]
    pub fn default_streams(mut self, enabled: bool) -> Self {
        self.default_streams = enabled;
        self
    }

    /// Path written by the default file stream
    #[must_use = "builder methods return a new value"]
    pub fn default_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_log_file = path.into();
        self
    }

    /// Register an extra stream; later registrations under the same name win
    #[must_use = "builder methods return a new value"]
    pub fn stream(mut self, name: impl Into<String>, stream: Arc<dyn Stream>) -> Self {
        self.streams.push((name.into(), stream));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.build_mode);
        logger.force_debug(self.force_debug);

        if self.default_streams {
            logger.add_stream(
                DEFAULT_FILE_STREAM,
                Arc::new(FileStream::new(self.default_log_file)),
            );
            logger.add_stream(DEFAULT_CONSOLE_STREAM, Arc::new(ConsoleStream::new()));
        }
        for (name, stream) in self.streams {
            logger.add_stream(name, stream);
        }

        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
