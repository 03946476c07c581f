//! Registry configuration
//!
//! [`Config`] is what [`Registry::configure`](crate::Registry::configure)
//! consumes: named appenders to register, then loggers to build in order.
//! [`ConfigFile`] is the declarative JSON form of the same thing, limited to
//! the appenders this crate ships.

use super::{
    appender::{Appender, AppenderOptions},
    error::{LoggerError, Result},
    formatter::DefaultFormatter,
    log_level::LogLevel,
    timestamp::TimestampFormat,
};
use crate::appenders::{ConsoleAppender, MemoryAppender};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// An appender given to a logger entry, either by registered name or inline.
#[derive(Clone)]
pub enum AppenderRef {
    Named(String),
    Instance(Arc<dyn Appender>),
}

impl From<&str> for AppenderRef {
    fn from(name: &str) -> Self {
        AppenderRef::Named(name.to_string())
    }
}

impl From<String> for AppenderRef {
    fn from(name: String) -> Self {
        AppenderRef::Named(name)
    }
}

impl From<Arc<dyn Appender>> for AppenderRef {
    fn from(appender: Arc<dyn Appender>) -> Self {
        AppenderRef::Instance(appender)
    }
}

impl fmt::Debug for AppenderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppenderRef::Named(name) => f.debug_tuple("Named").field(name).finish(),
            AppenderRef::Instance(appender) => f.debug_tuple("Instance").field(appender).finish(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppenderConfig {
    pub name: String,
    pub appender: Arc<dyn Appender>,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub name: String,
    pub level: LogLevel,
    /// Empty means: inherit the root logger's appenders
    pub appenders: Vec<AppenderRef>,
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self {
            name: name.into(),
            level,
            appenders: Vec::new(),
        }
    }

    #[must_use]
    pub fn appender(mut self, appender: impl Into<AppenderRef>) -> Self {
        self.appenders.push(appender.into());
        self
    }
}

/// # Examples
///
/// ```
/// use analog::{Appender, Config, LogLevel, LoggerConfig, MemoryAppender, Registry};
/// use std::sync::Arc;
///
/// let errors: Arc<dyn Appender> = Arc::new(MemoryAppender::with_threshold(LogLevel::Error));
/// let config = Config::new()
///     .appender("errors", errors)
///     .logger(LoggerConfig::new("", LogLevel::Info).appender("errors"))
///     .logger(LoggerConfig::new("db", LogLevel::Debug));
///
/// let registry = Registry::new();
/// registry.configure(config).unwrap();
/// assert_eq!(registry.logger("db").level(), LogLevel::Debug);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub appenders: Vec<AppenderConfig>,
    /// Applied in order; later entries see the root logger set by earlier ones
    pub loggers: Vec<LoggerConfig>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn appender(mut self, name: impl Into<String>, appender: Arc<dyn Appender>) -> Self {
        self.appenders.push(AppenderConfig {
            name: name.into(),
            appender,
        });
        self
    }

    #[must_use]
    pub fn logger(mut self, logger: LoggerConfig) -> Self {
        self.loggers.push(logger);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppenderKind {
    Console,
    Memory,
}

/// One `appenders` entry of a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct AppenderSpec {
    pub name: String,
    pub kind: AppenderKind,
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
    /// Console only
    #[serde(default = "default_colors")]
    pub colors: bool,
    /// Console only: send every level to stdout
    #[serde(default)]
    pub single_stream: bool,
}

fn default_colors() -> bool {
    true
}

impl AppenderSpec {
    pub fn build(&self) -> Arc<dyn Appender> {
        let options = AppenderOptions::new().with_threshold(self.level);
        let options = if self.timestamp_format == TimestampFormat::default() {
            options
        } else {
            options.with_formatter(Arc::new(
                DefaultFormatter::new().with_timestamp_format(self.timestamp_format.clone()),
            ))
        };

        match self.kind {
            AppenderKind::Memory => Arc::new(MemoryAppender::with_options(options)),
            AppenderKind::Console => {
                let console = ConsoleAppender::with_options(options).with_colors(self.colors);
                if self.single_stream {
                    Arc::new(console.single_stream())
                } else {
                    Arc::new(console)
                }
            }
        }
    }
}

/// One `loggers` entry of a config file.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggerSpec {
    #[serde(default)]
    pub name: String,
    pub level: LogLevel,
    #[serde(default)]
    pub appenders: Vec<String>,
}

/// Declarative configuration read from JSON.
///
/// ```json
/// {
///   "appenders": [
///     { "name": "stderr", "kind": "console", "level": "Error" },
///     { "name": "recent", "kind": "memory" }
///   ],
///   "loggers": [
///     { "name": "", "level": "Info", "appenders": ["stderr", "recent"] },
///     { "name": "db", "level": "Debug" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub appenders: Vec<AppenderSpec>,
    pub loggers: Vec<LoggerSpec>,
}

impl ConfigFile {
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logging config", path.display().to_string(), e)
        })?;
        Self::from_json_str(&content)
    }

    pub fn into_config(self) -> Config {
        let appenders = self
            .appenders
            .iter()
            .map(|spec| AppenderConfig {
                name: spec.name.clone(),
                appender: spec.build(),
            })
            .collect();
        let loggers = self
            .loggers
            .into_iter()
            .map(|spec| LoggerConfig {
                name: spec.name,
                level: spec.level,
                appenders: spec.appenders.into_iter().map(AppenderRef::Named).collect(),
            })
            .collect();
        Config { appenders, loggers }
    }
}
