// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value types shared by the parsers and the loader:
//! the configuration mapping, file formats, candidates and errors.

pub mod config_format;
pub mod errors;

// Re-export commonly used types
pub use config_format::{ConfigCandidate, ConfigFormat};
pub use errors::{ConfigError, Result};

/// A plain key-value configuration mapping.
///
/// Keys keep their insertion order, so a mapping read from a file iterates in
/// the order the file declared it.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;
