use std::path::PathBuf;
use thiserror::Error;

/// Result type for minim reconstruction operations
pub type Result<T> = std::result::Result<T, MinimError>;

/// Errors that can occur while reconstructing words from minims
#[derive(Error, Debug)]
pub enum MinimError {
    /// The expression contains a stroke count the engine cannot represent
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid cache configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A persisted record could not be read or written
    #[error("Storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MinimError {
    /// Create a malformed-input error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput(msg.into())
    }

    /// Create an invalid-config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create a storage error carrying the offending path
    pub fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}
