//! Core types for maillog-core.
//!
//! This module defines the severity [`LogLevel`] shared by the writer and the
//! CLI, and the [`FormatSpec`] template that controls how entries are rendered
//! to text.

use crate::error::Error;
use chrono::{DateTime, Utc};

/// Log severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Fatal => write!(f, "FATAL"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "fatal" => Ok(LogLevel::Fatal),
            other => Err(Error::Configuration(format!("unknown log level {other:?}"))),
        }
    }
}

/// Timestamp sub-format of the default line template, e.g. `Jan 15 | 10:00:00.000`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%b %d | %H:%M:%S%.3f";

/// How a log entry is rendered into a single text line.
///
/// The default layout is
/// `<date> <level padded to 5> [<category>, column padded to 25] <message>`:
///
/// ```text
/// Jan 15 | 10:00:00.000 INFO  [com.example.App]         server started
/// ```
///
/// The bracketed category column is what the export-time grouping transform
/// keys on, so custom specs should keep the brackets if grouped exports are
/// wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatSpec {
    /// chrono strftime template for the leading timestamp.
    pub timestamp_format: String,
    /// Minimum width of the level column.
    pub level_width: usize,
    /// Minimum width of the bracketed category column.
    pub category_width: usize,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            level_width: 5,
            category_width: 25,
        }
    }
}

impl FormatSpec {
    /// Check that the timestamp template is a well-formed strftime string.
    ///
    /// chrono only reports bad specifiers at render time, so the writer calls
    /// this once at construction instead of per line.
    pub fn validate(&self) -> Result<(), Error> {
        use chrono::format::{Item, StrftimeItems};

        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(Error::Configuration(format!(
                "invalid timestamp format {:?}",
                self.timestamp_format
            )));
        }
        Ok(())
    }

    /// Render one entry as a single line, without the trailing newline.
    pub fn render(
        &self,
        ts: DateTime<Utc>,
        level: LogLevel,
        category: &str,
        message: &str,
    ) -> String {
        format!(
            "{ts} {level:<lw$} {cat:<cw$} {message}",
            ts = ts.format(&self.timestamp_format),
            level = level.to_string(),
            cat = format!("[{category}]"),
            lw = self.level_width,
            cw = self.category_width,
        )
    }
}
