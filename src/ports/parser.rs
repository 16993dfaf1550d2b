// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! parsing configuration files in different formats (YAML, JSON, script modules).

use crate::domain::Result;
use serde_json::Value;

/// A trait for parsing configuration files.
///
/// A parser turns the raw content of a file into a document value. It does not
/// check that the document is a mapping; the loader does that, since only the
/// loader knows which file the content came from.
///
/// # Examples
///
/// ```rust
/// use grenrc::ports::ConfigParser;
/// use grenrc::domain::Result;
/// use serde_json::{json, Value};
///
/// struct KeyValueParser;
///
/// impl ConfigParser for KeyValueParser {
///     fn parse(&self, content: &str) -> Result<Value> {
///         let mut map = serde_json::Map::new();
///         for line in content.lines() {
///             if let Some((k, v)) = line.split_once('=') {
///                 map.insert(k.trim().to_string(), Value::from(v.trim()));
///             }
///         }
///         Ok(Value::Object(map))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["kv"]
///     }
/// }
///
/// let value = KeyValueParser.parse("name = gren").unwrap();
/// assert_eq!(value, json!({ "name": "gren" }));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a document value.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed document
    /// * `Err(ConfigError)` - The content is not valid for this format
    fn parse(&self, content: &str) -> Result<Value>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}
