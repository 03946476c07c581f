//! Log entry structure

use super::error::Result;
use super::log_level::LogLevel;
use super::part::render_value;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// One event that passed the logger's threshold, as handed to each appender.
///
/// The entry borrows the logger's name and the materialized parts, so the
/// fan-out to several appenders never copies the message.
#[derive(Debug, Clone)]
pub struct LogEntry<'a> {
    /// Name of the emitting logger; empty for the root logger
    pub logger: &'a str,
    /// Threshold of the emitting logger
    pub threshold: LogLevel,
    pub level: LogLevel,
    pub parts: &'a [Value],
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogEntry<'a> {
    pub fn new(logger: &'a str, threshold: LogLevel, level: LogLevel, parts: &'a [Value]) -> Self {
        Self {
            logger,
            threshold,
            level,
            parts,
            timestamp: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn is_root(&self) -> bool {
        self.logger.is_empty()
    }

    /// The parts joined with single spaces, strings verbatim and other values as JSON.
    pub fn message(&self) -> Result<String> {
        let mut message = String::new();
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                message.push(' ');
            }
            message.push_str(&render_value(part)?);
        }
        Ok(message)
    }
}
