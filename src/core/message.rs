//! Log message value type

use super::level::Level;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// An immutable log record, captured at the call site.
///
/// The sequence number is unique and gap-free per logger instance; it is
/// assigned under the logger's own lock so the order of sequence numbers is
/// the order of submission.
#[derive(Debug, Clone)]
pub struct Message {
    pub timestamp: DateTime<Utc>,
    pub prefix: String,
    pub level: Arc<Level>,
    pub text: String,
    pub sequence: u64,
}

impl Message {
    pub fn new(
        sequence: u64,
        prefix: impl Into<String>,
        level: Arc<Level>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            prefix: prefix.into(),
            level,
            text: text.into(),
            sequence,
        }
    }

    /// Replace the captured timestamp. Intended for deterministic rendering
    /// in tests and replay tooling.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
