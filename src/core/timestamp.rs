//! Timestamp formatting for rendered lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a message timestamp is rendered into the template.
///
/// The default is wall-clock time of day with millisecond precision
/// (`10:30:45.123`), the right granularity for a console log; ISO 8601 and
/// Unix variants are available for lines that leave the terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `10:30:45.123` — time of day with milliseconds.
    #[default]
    TimeMillis,

    /// `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// `1736332245123` — Unix timestamp in milliseconds.
    UnixMillis,

    /// Any strftime-compatible format string.
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::TimeMillis => datetime.format("%H:%M:%S%.3f").to_string(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
