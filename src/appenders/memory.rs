//! In-memory appender, mostly useful for tests and diagnostics

use crate::core::{Appender, AppenderOptions, Formatter, LogEntry, LogLevel, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Keeps every formatted line in write order.
///
/// # Examples
///
/// ```
/// use analog::{Appender, LogLevel, Logger, MemoryAppender};
/// use std::sync::Arc;
///
/// let errors = Arc::new(MemoryAppender::with_threshold(LogLevel::Error));
/// let logger = Logger::new("svc", LogLevel::All, vec![errors.clone() as Arc<dyn Appender>]);
///
/// logger.info(["started"]).unwrap();
/// logger.error(["failed"]).unwrap();
///
/// assert_eq!(errors.len(), 1);
/// assert!(errors.buffer()[0].ends_with("[Error] [svc] failed"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryAppender {
    options: AppenderOptions,
    buffer: Mutex<Vec<String>>,
}

impl MemoryAppender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: AppenderOptions) -> Self {
        Self {
            options,
            buffer: Mutex::new(Vec::new()),
        }
    }

    pub fn with_threshold(threshold: LogLevel) -> Self {
        Self::with_options(AppenderOptions::new().with_threshold(threshold))
    }

    pub fn with_formatter(formatter: Arc<dyn Formatter>) -> Self {
        Self::with_options(AppenderOptions::new().with_formatter(formatter))
    }

    /// A copy of the buffered lines, oldest first.
    pub fn buffer(&self) -> Vec<String> {
        self.buffer.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Clears the buffer
    pub fn reset(&self) {
        self.buffer.lock().clear();
    }
}

impl Appender for MemoryAppender {
    fn options(&self) -> &AppenderOptions {
        &self.options
    }

    fn write_message(&self, message: &str, _entry: &LogEntry<'_>) -> Result<()> {
        self.buffer.lock().push(message.to_string());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
