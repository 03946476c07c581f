//! Logging macros for ergonomic log message formatting.
//!
//! Each macro wraps its `format!` arguments in a single deferred part, so the
//! string is only built when the logger's threshold admits the level. The
//! macros evaluate to the `Result` of [`Logger::log`](crate::Logger::log).
//!
//! # Examples
//!
//! ```
//! use analog::prelude::*;
//! use analog::info;
//! use std::sync::Arc;
//!
//! let logger = Logger::new("server", LogLevel::Info, vec![Arc::new(MemoryAppender::new()) as Arc<dyn Appender>]);
//!
//! info!(logger, "Server started").unwrap();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use analog::prelude::*;
/// # let logger = Logger::new("", LogLevel::All, Vec::new());
/// use analog::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, [$crate::Part::lazy(|| format!($($arg)+))])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use analog::prelude::*;
/// # let logger = Logger::new("", LogLevel::Info, Vec::new());
/// use analog::debug;
/// // Below the threshold: the arguments are never formatted.
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}
