//! Error types for the board engine
//!
//! The board operations themselves never fail: unknown ids are no-ops. Errors
//! only come from the edges: configuration, command scripts and the queue.

use thiserror::Error;

/// Result type for taskboard operations
pub type Result<T> = std::result::Result<T, TaskboardError>;

/// Errors that can occur around the board engine
#[derive(Debug, Error)]
pub enum TaskboardError {
    /// Configuration could not be loaded or extracted
    #[error("configuration error: {0}")]
    Config(#[from] Box<figment::Error>),

    /// A command script could not be understood
    #[error("parse error: {message}")]
    Parse { message: String },

    /// The board queue is no longer running
    #[error("board queue closed")]
    ChannelClosed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl TaskboardError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for TaskboardError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}

impl<T> From<tokio::sync::mpsc::error::SendError<T>> for TaskboardError {
    fn from(_: tokio::sync::mpsc::error::SendError<T>) -> Self {
        Self::ChannelClosed
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for TaskboardError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        Self::ChannelClosed
    }
}
