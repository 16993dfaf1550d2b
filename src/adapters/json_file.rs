// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON configuration file parser.
//!
//! Used for `.grenrc.json`. The loader also picks it for the extensionless
//! `.grenrc`, since a missing extension maps to `ConfigFormat::Json`.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

/// JSON parser implementation.
///
/// # Examples
///
/// ```rust
/// use grenrc::adapters::JsonParser;
/// use grenrc::ports::ConfigParser;
///
/// let parser = JsonParser::new();
/// let result = parser.parse(r#"{"a": 1, "b": 2}"#).unwrap();
/// assert_eq!(result["b"], 2);
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for JsonParser {
    fn parse(&self, content: &str) -> Result<Value> {
        serde_json::from_str(content).map_err(|e| ConfigError::parse("JSON", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["json"]
    }
}
