// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration loader.
//!
//! Most of the public surface never returns these: `require_config` and
//! `get_config_from_file` fold every failure into "no config here". The
//! errors are exposed for callers that want to know why a candidate file
//! was skipped.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// # Examples
///
/// ```
/// use grenrc::domain::errors::ConfigError;
/// use std::path::PathBuf;
///
/// let error = ConfigError::UnsupportedFormat {
///     path: PathBuf::from(".grenrc.toml"),
/// };
/// assert!(error.to_string().contains(".grenrc.toml"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Failed to parse a configuration file.
    #[error("Failed to parse configuration: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The file extension does not map to an enabled format.
    #[error("Unsupported configuration format: {}", path.display())]
    UnsupportedFormat {
        /// The offending file
        path: PathBuf,
    },

    /// The file parsed, but the document is not a key-value mapping.
    #[error("Configuration document is not a mapping: {}", path.display())]
    NotAMapping {
        /// The offending file
        path: PathBuf,
    },

    /// The file is larger than the loader accepts.
    #[error("Configuration file too large: {} ({size} bytes, max {max} bytes)", path.display())]
    FileTooLarge {
        /// The offending file
        path: PathBuf,
        /// Actual size in bytes
        size: u64,
        /// Configured limit in bytes
        max: u64,
    },

    /// The resolved mapping could not be deserialized into the requested type.
    #[error("Failed to deserialize configuration: {message}")]
    DeserializeError {
        /// The error message
        message: String,
        /// The underlying serde error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Wraps a format-specific parse error.
    pub fn parse<E>(format: &str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::ParseError {
            message: format!("Failed to parse {}: {}", format, err),
            source: Some(Box::new(err)),
        }
    }

    /// Returns true for errors that mean the file simply is not there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
