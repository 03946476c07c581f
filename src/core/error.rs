//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parse error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A configuration entry referenced an appender name nobody registered
    #[error("No appender registered under '{name}'")]
    UnknownAppender { name: String },

    /// Text or rank that does not name a level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// Formatter failure
    #[error("Formatter error: {message}")]
    Formatter { message: String },

    /// Sink write failure
    #[error("Writer error: {0}")]
    Writer(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn unknown_appender(name: impl Into<String>) -> Self {
        LoggerError::UnknownAppender { name: name.into() }
    }

    pub fn formatter(message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            message: message.into(),
        }
    }

    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::Writer(msg.into())
    }
}
