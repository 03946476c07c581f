//! Appender trait for log output destinations

use super::{
    error::Result,
    formatter::{default_formatter, Formatter},
    log_entry::LogEntry,
    log_level::LogLevel,
};
use std::fmt;
use std::sync::Arc;

/// Threshold and formatter every appender carries.
///
/// Both fields default independently: `All` and the shared default formatter.
#[derive(Clone)]
pub struct AppenderOptions {
    pub threshold: LogLevel,
    pub formatter: Arc<dyn Formatter>,
}

impl AppenderOptions {
    pub fn new() -> Self {
        Self {
            threshold: LogLevel::All,
            formatter: default_formatter(),
        }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: LogLevel) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }
}

impl Default for AppenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AppenderOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppenderOptions")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// A sink that re-filters approved events by its own threshold, formats them
/// and writes the result.
///
/// Implementors supply the sink write; the filtering and formatting contract
/// lives in the provided [`Appender::write`].
pub trait Appender: Send + Sync {
    fn options(&self) -> &AppenderOptions;

    /// Deliver one formatted line. `entry` carries the unformatted event for
    /// sinks that route on level or inspect the raw parts.
    fn write_message(&self, message: &str, entry: &LogEntry<'_>) -> Result<()>;

    fn name(&self) -> &str;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn threshold(&self) -> LogLevel {
        self.options().threshold
    }

    /// Threshold check first; nothing is formatted for rejected events.
    fn write(&self, entry: &LogEntry<'_>) -> Result<()> {
        let options = self.options();
        if !options.threshold.admits(entry.level) {
            return Ok(());
        }
        let message = options.formatter.format(entry)?;
        self.write_message(&message, entry)
    }
}

impl fmt::Debug for dyn Appender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Appender")
            .field("name", &self.name())
            .field("threshold", &self.threshold())
            .finish()
    }
}
