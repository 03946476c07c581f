//! Console appender implementation

use crate::core::{Appender, AppenderOptions, Formatter, LogEntry, LogLevel, LoggerError, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;
use std::sync::Arc;

/// Writes each line straight to the process's standard streams.
///
/// By default Error and Fatal lines go to stderr and everything else to
/// stdout; [`ConsoleAppender::single_stream`] sends everything to stdout.
#[derive(Debug)]
pub struct ConsoleAppender {
    options: AppenderOptions,
    use_colors: bool,
    split_streams: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self::with_options(AppenderOptions::new())
    }

    pub fn with_options(options: AppenderOptions) -> Self {
        Self {
            options,
            use_colors: cfg!(feature = "console"),
            split_streams: true,
        }
    }

    pub fn with_threshold(threshold: LogLevel) -> Self {
        Self::with_options(AppenderOptions::new().with_threshold(threshold))
    }

    pub fn with_formatter(formatter: Arc<dyn Formatter>) -> Self {
        Self::with_options(AppenderOptions::new().with_formatter(formatter))
    }

    /// Enable or disable level coloring
    ///
    /// # Example
    ///
    /// ```
    /// use analog::ConsoleAppender;
    ///
    /// let appender = ConsoleAppender::new().with_colors(false);
    /// ```
    ///
    /// Coloring needs the `console` feature; without it this is a no-op.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors && cfg!(feature = "console");
        self
    }

    /// Send every line to stdout regardless of level
    #[must_use]
    pub fn single_stream(mut self) -> Self {
        self.split_streams = false;
        self
    }

    pub fn uses_colors(&self) -> bool {
        self.use_colors
    }

    pub fn routes_to_stderr(&self, level: LogLevel) -> bool {
        self.split_streams && level >= LogLevel::Error
    }

    #[cfg(feature = "console")]
    fn paint(&self, message: &str, level: LogLevel) -> String {
        if self.use_colors {
            message.color(level.color_code()).to_string()
        } else {
            message.to_string()
        }
    }

    #[cfg(not(feature = "console"))]
    fn paint(&self, message: &str, _level: LogLevel) -> String {
        message.to_string()
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn options(&self) -> &AppenderOptions {
        &self.options
    }

    fn write_message(&self, message: &str, entry: &LogEntry<'_>) -> Result<()> {
        let output = self.paint(message, entry.level);

        let written = if self.routes_to_stderr(entry.level) {
            writeln!(std::io::stderr().lock(), "{}", output)
        } else {
            writeln!(std::io::stdout().lock(), "{}", output)
        };
        written.map_err(|e| LoggerError::io_operation("writing to console", "write failed", e))
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
