//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod part;
pub mod registry;
pub mod timestamp;

pub use appender::{Appender, AppenderOptions};
pub use config::{
    AppenderConfig, AppenderKind, AppenderRef, AppenderSpec, Config, ConfigFile, LoggerConfig,
    LoggerSpec,
};
pub use error::{LoggerError, Result};
pub use formatter::{default_formatter, formatter_fn, DefaultFormatter, Formatter};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use part::Part;
pub use registry::Registry;
pub use timestamp::TimestampFormat;
