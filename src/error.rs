//! Error types for zwav

use thiserror::Error;

/// Result type alias for zwav operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for zwav
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (file loading collaborators only, never raised by the core)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not a well-formed RIFF/WAVE container
    #[error("Format error: {0}")]
    Format(String),

    /// The container is well-formed but describes an encoding with no decode path
    #[error("Unsupported: {0}")]
    Unsupported(String),

    /// Probe report serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a format error
    pub fn format<S: Into<String>>(msg: S) -> Self {
        Error::Format(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::Unsupported(msg.into())
    }

    /// Whether this is a container format error
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

    /// Whether this is an unsupported-encoding error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported(_))
    }
}
