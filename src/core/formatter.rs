//! Message formatters
//!
//! A formatter turns an approved [`LogEntry`] into the single line an
//! appender writes. Formatters are stateless from the logger's point of view
//! and may be shared by any number of appenders.

use super::error::Result;
use super::log_entry::LogEntry;
use super::timestamp::TimestampFormat;
use std::sync::{Arc, OnceLock};

pub trait Formatter: Send + Sync {
    fn format(&self, entry: &LogEntry<'_>) -> Result<String>;
}

impl<F> Formatter for F
where
    F: Fn(&LogEntry<'_>) -> Result<String> + Send + Sync,
{
    fn format(&self, entry: &LogEntry<'_>) -> Result<String> {
        self(entry)
    }
}

/// Writes a timestamp, the level, the logger name and the message parts.
///
/// Output shape: `[2025-01-08T10:30:45.123Z] [Warn] [db] pool exhausted {"size":8}`.
/// The `[name]` segment is omitted for the root logger.
#[derive(Debug, Clone, Default)]
pub struct DefaultFormatter {
    timestamp_format: TimestampFormat,
}

impl DefaultFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// # Examples
    ///
    /// ```
    /// use analog::{DefaultFormatter, TimestampFormat};
    ///
    /// let formatter = DefaultFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }
}

impl Formatter for DefaultFormatter {
    fn format(&self, entry: &LogEntry<'_>) -> Result<String> {
        let mut output = format!(
            "[{}] [{}]",
            self.timestamp_format.format(&entry.timestamp),
            entry.level.to_str()
        );
        if !entry.logger.is_empty() {
            output.push_str(" [");
            output.push_str(entry.logger);
            output.push(']');
        }
        let message = entry.message()?;
        if !entry.parts.is_empty() {
            output.push(' ');
            output.push_str(&message);
        }
        Ok(output)
    }
}

/// Wrap a closure as a shareable formatter.
///
/// # Examples
///
/// ```
/// use analog::formatter_fn;
///
/// let formatter = formatter_fn(|entry| Ok(format!("{}: {}", entry.level, entry.message()?)));
/// ```
pub fn formatter_fn<F>(f: F) -> Arc<dyn Formatter>
where
    F: Fn(&LogEntry<'_>) -> Result<String> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// The shared formatter used by every appender that is not given its own.
pub fn default_formatter() -> Arc<dyn Formatter> {
    static DEFAULT: OnceLock<Arc<dyn Formatter>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(DefaultFormatter::new())))
}
