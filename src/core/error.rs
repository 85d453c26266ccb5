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
    IoError(#[from] std::io::Error),

    /// File stream error with path
    #[error("File stream error for '{path}': {message}")]
    FileStreamError { path: String, message: String },

    /// A stream panicked while handling an event
    #[error("Stream '{stream}' panicked: {message}")]
    StreamPanicked { stream: String, message: String },

    /// The process-wide logger was already created
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Generic error
    #[error("{0}")]
    Other(String),
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

    /// Create a file stream error
    pub fn file_stream(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileStreamError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a stream panic error
    pub fn stream_panicked(stream: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::StreamPanicked {
            stream: stream.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}
