//! Log level and level mask definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

/// Severity of a single event.
///
/// Each level occupies its own bit so that levels can be combined into a
/// [`LevelMask`]. An event always carries exactly one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum LogLevel {
    /// Values tracked while debugging. Hidden in release builds unless forced.
    Debug = 1,
    /// Something expected has happened.
    Info = 2,
    /// Something unexpected has happened.
    Warning = 4,
    /// A non-fatal error has occurred.
    Error = 8,
    /// A fatal error has occurred, the program may crash.
    Critical = 16,
}

impl LogLevel {
    /// Every level, lowest bit first.
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DBG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    /// Fixed three character tag that prefixes every rendered event
    pub fn symbol(&self) -> &'static str {
        match self {
            LogLevel::Debug => " # ",
            LogLevel::Info => "   ",
            LogLevel::Warning => " ! ",
            LogLevel::Error => "!! ",
            LogLevel::Critical => "!!!",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => Blue,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Critical => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DBG" | "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERR" | "ERROR" => Ok(LogLevel::Error),
            "CRITICAL" | "FATAL" => Ok(LogLevel::Critical),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Set of levels a stream reacts to.
///
/// Built by OR-ing levels together:
///
/// ```
/// use boom_log::{LevelMask, LogLevel};
///
/// let mask = LogLevel::Debug | LogLevel::Info | LogLevel::Error;
/// assert!(mask.contains(LogLevel::Error));
/// assert!(!mask.contains(LogLevel::Warning));
/// assert_eq!(LevelMask::ALL.bits(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelMask(u8);

impl LevelMask {
    pub const NONE: LevelMask = LevelMask(0);
    pub const ALL: LevelMask = LevelMask(31);

    /// Build a mask from raw bits, discarding bits that name no level
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Self {
        LevelMask(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `(mask & level) == level`
    #[inline]
    pub const fn contains(self, level: LogLevel) -> bool {
        (self.0 & level.bits()) == level.bits()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, level: LogLevel) {
        self.0 |= level.bits();
    }

    pub fn remove(&mut self, level: LogLevel) {
        self.0 &= !level.bits();
    }

    /// Levels contained in this mask, lowest bit first
    pub fn iter(self) -> impl Iterator<Item = LogLevel> {
        LogLevel::ALL.into_iter().filter(move |level| self.contains(*level))
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<LogLevel> for LevelMask {
    fn from(level: LogLevel) -> Self {
        LevelMask(level.bits())
    }
}

impl BitOr for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 | rhs.0)
    }
}

impl BitOr<LogLevel> for LevelMask {
    type Output = LevelMask;

    fn bitor(self, rhs: LogLevel) -> LevelMask {
        LevelMask(self.0 | rhs.bits())
    }
}

impl BitOr for LogLevel {
    type Output = LevelMask;

    fn bitor(self, rhs: LogLevel) -> LevelMask {
        LevelMask(self.bits() | rhs.bits())
    }
}

impl BitOr<LevelMask> for LogLevel {
    type Output = LevelMask;

    fn bitor(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.bits() | rhs.0)
    }
}

impl BitOrAssign<LogLevel> for LevelMask {
    fn bitor_assign(&mut self, rhs: LogLevel) {
        self.insert(rhs);
    }
}

impl BitAnd for LevelMask {
    type Output = LevelMask;

    fn bitand(self, rhs: LevelMask) -> LevelMask {
        LevelMask(self.0 & rhs.0)
    }
}

impl fmt::Display for LevelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "NONE");
        }
        let names: Vec<&str> = self.iter().map(|level| level.to_str()).collect();
        write!(f, "{}", names.join("|"))
    }
}
