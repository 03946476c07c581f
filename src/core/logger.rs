//! Main logger implementation
//!
//! A call goes through two gates. The logger threshold decides whether the
//! event exists at all; if it does not, the call returns before any deferred
//! part is evaluated. Past that gate the parts are materialized once and the
//! resulting entry is offered to every attached appender in order, each of
//! which applies its own threshold.

use super::{
    appender::Appender,
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    part::Part,
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

pub struct Logger {
    name: String,
    level: LogLevel,
    appenders: RwLock<Vec<Arc<dyn Appender>>>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger with an explicit threshold and appender list.
    ///
    /// Use [`Registry::get_logger`](crate::Registry::get_logger) to obtain a
    /// registered logger that inherits its defaults from the root logger.
    #[must_use]
    pub fn new(name: impl Into<String>, level: LogLevel, appenders: Vec<Arc<dyn Appender>>) -> Self {
        Self {
            name: name.into(),
            level,
            appenders: RwLock::new(appenders),
            metrics: LoggerMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn is_root(&self) -> bool {
        self.name.is_empty()
    }

    /// A snapshot of the attached appenders, in dispatch order.
    pub fn appenders(&self) -> Vec<Arc<dyn Appender>> {
        self.appenders.read().clone()
    }

    pub fn appender_count(&self) -> usize {
        self.appenders.read().len()
    }

    pub fn add_appender(&self, appender: Arc<dyn Appender>) {
        self.appenders.write().push(appender);
    }

    pub fn add_appenders<I>(&self, appenders: I)
    where
        I: IntoIterator<Item = Arc<dyn Appender>>,
    {
        self.appenders.write().extend(appenders);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        self.level.admits(level)
    }

    pub fn is_all_enabled(&self) -> bool {
        self.is_enabled(LogLevel::All)
    }

    pub fn is_trace_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Trace)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Debug)
    }

    pub fn is_info_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Info)
    }

    pub fn is_warn_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Warn)
    }

    pub fn is_error_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Error)
    }

    pub fn is_fatal_enabled(&self) -> bool {
        self.is_enabled(LogLevel::Fatal)
    }

    /// True when the threshold is `None` and every call is suppressed.
    pub fn is_off(&self) -> bool {
        self.level >= LogLevel::None
    }

    /// Log `parts` at `level`.
    ///
    /// Calls at a sentinel level (`All`, `None`) are treated like calls below
    /// the threshold. The first appender error stops the fan-out and is
    /// returned; appenders earlier in the list have already written.
    ///
    /// # Examples
    ///
    /// ```
    /// use analog::{Appender, LogLevel, Logger, MemoryAppender, Part};
    /// use std::sync::Arc;
    ///
    /// let memory = Arc::new(MemoryAppender::new());
    /// let logger = Logger::new("app", LogLevel::Info, vec![memory.clone() as Arc<dyn Appender>]);
    ///
    /// logger.log(LogLevel::Warn, ["disk at", "91%"]).unwrap();
    /// logger.log(LogLevel::Debug, [Part::lazy(|| "never built")]).unwrap();
    /// assert_eq!(memory.len(), 1);
    /// ```
    pub fn log<'a, I, P>(&self, level: LogLevel, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        if level.is_sentinel() || !self.is_enabled(level) {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let values = match parts
            .into_iter()
            .map(|part| Into::<Part<'a>>::into(part).materialize())
            .collect::<Result<Vec<_>>>()
        {
            Ok(values) => values,
            Err(e) => {
                self.metrics.record_failed_part();
                return Err(e);
            }
        };
        let entry = LogEntry::new(&self.name, self.level, level, &values);

        // Snapshot so appenders run without the list lock held.
        let appenders = self.appenders();
        for appender in &appenders {
            if let Err(e) = appender.write(&entry) {
                self.metrics.record_failed_write();
                return Err(e);
            }
        }
        self.metrics.record_dispatched();
        Ok(())
    }

    pub fn trace<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Trace, parts)
    }

    pub fn debug<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Debug, parts)
    }

    pub fn info<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Info, parts)
    }

    pub fn warn<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Warn, parts)
    }

    pub fn error<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Error, parts)
    }

    pub fn fatal<'a, I, P>(&self, parts: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Part<'a>>,
    {
        self.log(LogLevel::Fatal, parts)
    }

    /// Flush every attached appender, stopping at the first failure.
    pub fn flush(&self) -> Result<()> {
        for appender in self.appenders() {
            appender.flush()?;
        }
        Ok(())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("appenders", &self.appender_count())
            .finish()
    }
}
