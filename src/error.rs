use std::path::{Path, PathBuf};

use thiserror::Error;

/// Unified error type for shipnote operations
#[derive(Error, Debug)]
pub enum ShipnoteError {
    #[error("Malformed version: '{0}' - expected X.Y.Z")]
    MalformedVersion(String),

    #[error("Version overflow: cannot apply a {bump} bump to '{version}'")]
    VersionOverflow { version: String, bump: String },

    #[error("Invalid bump type: '{0}' - must be 'major', 'minor', or 'patch'")]
    InvalidBumpType(String),

    #[error("Malformed commits input: {0}")]
    MalformedCommitsInput(String),

    #[error("Invalid release date: '{0}' - expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error on {}: {source}", document.display())]
    Io {
        document: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(String),
}

/// Convenience type alias for Results in shipnote
pub type Result<T> = std::result::Result<T, ShipnoteError>;

impl ShipnoteError {
    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        ShipnoteError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ShipnoteError::Config(msg.into())
    }

    /// Create a commits-input error with context
    pub fn commits(msg: impl Into<String>) -> Self {
        ShipnoteError::MalformedCommitsInput(msg.into())
    }

    /// Create a server error with context
    pub fn server(msg: impl Into<String>) -> Self {
        ShipnoteError::Server(msg.into())
    }

    /// Wrap an I/O failure with the document it happened on
    pub fn io(document: impl AsRef<Path>, source: std::io::Error) -> Self {
        ShipnoteError::Io {
            document: document.as_ref().to_path_buf(),
            source,
        }
    }
}
