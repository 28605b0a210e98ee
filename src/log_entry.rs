use chrono::{DateTime, Local, SubsecRound};
use serde::Serialize;

use crate::config::UNKNOWN_LABEL;

/// Provenance labels captured into every new entry.
///
/// The accumulator owns one of these. Changing a label only affects entries
/// added afterwards; stored entries keep the labels they were created with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub file: String,
    pub function: String,
}

impl Default for LogContext {
    fn default() -> Self {
        Self {
            file: UNKNOWN_LABEL.to_string(),
            function: UNKNOWN_LABEL.to_string(),
        }
    }
}

/// A single accumulated log message.
///
/// Entries are immutable once stored. The `Raw` rendering hands out the
/// stored sequence directly, and it can be serialized as-is:
///
/// ```
/// # use log_accumulator::LogAccumulator;
/// let mut log = LogAccumulator::new();
/// log.add("service started");
/// let entries = log.entries();
/// assert_eq!(entries[0].message(), "service started");
/// assert_eq!(entries[0].filename(), "unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    timestamp: DateTime<Local>,
    message: String,
    filename: String,
    function: String,
}

impl LogEntry {
    /// Builds an entry stamped with the current wall-clock second.
    pub fn new(message: impl Into<String>, context: &LogContext) -> Self {
        Self::with_timestamp(message, Local::now(), context)
    }

    /// Builds an entry with an explicit timestamp, truncated to whole seconds.
    pub fn with_timestamp(
        message: impl Into<String>,
        timestamp: DateTime<Local>,
        context: &LogContext,
    ) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(0),
            message: message.into(),
            filename: context.file.clone(),
            function: context.function.clone(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn test_captures_context_labels() {
        let context = LogContext {
            file: "main.rs".to_string(),
            function: "run".to_string(),
        };
        let entry = LogEntry::new("hello", &context);
        assert_eq!(entry.message(), "hello");
        assert_eq!(entry.filename(), "main.rs");
        assert_eq!(entry.function(), "run");
    }

    #[test]
    fn test_timestamp_has_second_resolution() {
        let entry = LogEntry::new("tick", &LogContext::default());
        assert_eq!(entry.timestamp().nanosecond(), 0);

        let precise = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 15).unwrap()
            + chrono::Duration::milliseconds(750);
        let entry = LogEntry::with_timestamp("tock", precise, &LogContext::default());
        assert_eq!(entry.timestamp().second(), 15);
        assert_eq!(entry.timestamp().nanosecond(), 0);
    }

    #[test]
    fn test_serializes_as_structured_record() {
        let ts = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let entry = LogEntry::with_timestamp("x", ts, &LogContext::default());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["message"], "x");
        assert_eq!(value["filename"], "unknown");
        assert_eq!(value["function"], "unknown");
        assert!(value["timestamp"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
    }
}
