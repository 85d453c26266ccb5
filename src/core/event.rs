//! Event structure and its text rendering

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// strftime pattern used for the timestamp segment of a rendered event
pub const EVENT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d/%H:%M:%S - ";

/// One log occurrence.
///
/// Rendered as
/// `<symbol><YYYY/MM/DD/HH:MM:SS - >[<code>] <message> (from <source>)`
/// where the code and source segments only appear when set.
///
/// ```
/// use boom_log::{Event, LogLevel};
/// use chrono::{Local, TimeZone};
///
/// let at = Local.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
/// let event = Event::new(LogLevel::Warning, "Test Message").with_timestamp(at);
/// assert_eq!(event.render(), " ! 2000/01/01/12:00:00 - Test Message");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub code: Option<String>,
    pub timestamp: DateTime<Local>,
}

/// Empty strings mean "unset"
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

impl Event {
    /// Create an event stamped with the current local time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            source: None,
            code: None,
            timestamp: Local::now(),
        }
    }

    /// Name of whatever produced the event, usually a function or component
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = non_empty(source);
        self
    }

    /// User defined code identifying the event, e.g. an error number
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = non_empty(code);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Render the event as a single line of text, without a line terminator
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.level.symbol(),
            self.timestamp.format(EVENT_TIMESTAMP_FORMAT)
        )?;
        if let Some(code) = self.code() {
            write!(f, "[{}] ", code)?;
        }
        f.write_str(&self.message)?;
        if let Some(source) = self.source() {
            write!(f, " (from {})", source)?;
        }
        Ok(())
    }
}
