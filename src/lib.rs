//! # analog
//!
//! A small embeddable logging facility: named loggers with their own
//! severity thresholds, pluggable appenders and formatters, and a registry
//! that hands out named loggers and appenders.
//!
//! ## Features
//!
//! - **Two-gate filtering**: the logger threshold decides whether an event
//!   exists, then every appender re-filters by its own threshold
//! - **Lazy messages**: deferred parts are only built once an event passes
//!   the logger threshold
//! - **Registry defaults**: new loggers inherit level and appenders from the
//!   root logger
//! - **Synchronous**: every call runs to completion on the caller's thread
//!
//! ```
//! use analog::prelude::*;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemoryAppender::new());
//! let registry = Registry::with_default_appender(memory.clone());
//!
//! let db = registry.logger_with_level("db", LogLevel::Info);
//! db.debug(["not shown"]).unwrap();
//! db.warn(["pool exhausted", "size"]).unwrap();
//!
//! assert_eq!(memory.len(), 1);
//! assert!(memory.buffer()[0].ends_with("[Warn] [db] pool exhausted size"));
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, MemoryAppender};
    pub use crate::core::{
        Appender, AppenderOptions, AppenderRef, Config, ConfigFile, DefaultFormatter, Formatter,
        LogEntry, LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, Part, Registry,
        Result, TimestampFormat,
    };
}

pub use appenders::{ConsoleAppender, MemoryAppender};
pub use core::{
    default_formatter, formatter_fn, Appender, AppenderConfig, AppenderKind, AppenderOptions,
    AppenderRef, AppenderSpec, Config, ConfigFile, DefaultFormatter, Formatter, LogEntry,
    LogLevel, Logger, LoggerConfig, LoggerError, LoggerMetrics, LoggerSpec, Part, Registry,
    Result, TimestampFormat,
};
