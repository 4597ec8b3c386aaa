//! Error types for configuration and document-set operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Error loading or validating [`AppConfig`](crate::AppConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Config text is not valid TOML for the expected schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is out of range
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted field name, e.g. `search.top_k`
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Error from a document-set operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// No document with this name
    #[error("document not found: {0}")]
    NotFound(String),
    /// A document with this name already exists
    #[error("document already exists: {0}")]
    DuplicateName(String),
}
