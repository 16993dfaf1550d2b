// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML configuration file parser.
//!
//! This module provides the parser used for `.grenrc.yml` and `.grenrc.yaml`.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

/// YAML parser implementation.
///
/// The document is deserialized straight into a JSON value, so nested
/// mappings and sequences keep their shape and scalars keep their types.
///
/// # Examples
///
/// ```rust
/// use grenrc::adapters::YamlParser;
/// use grenrc::ports::ConfigParser;
///
/// let parser = YamlParser::new();
/// let yaml_content = "dataSource: prs\nprefix: v";
/// let result = parser.parse(yaml_content).unwrap();
/// assert_eq!(result["dataSource"], "prs");
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for YamlParser {
    fn parse(&self, content: &str) -> Result<Value> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse("YAML", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_yaml_parser_simple() {
        let parser = YamlParser::new();
        let result = parser.parse("key: value").unwrap();

        assert_eq!(result, json!({ "key": "value" }));
    }

    #[test]
    fn test_yaml_parser_nested() {
        let parser = YamlParser::new();
        let yaml = r#"
database:
  host: localhost
  port: 5432
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(result["database"]["host"], "localhost");
        assert_eq!(result["database"]["port"], 5432);
    }

    #[test]
    fn test_yaml_parser_array() {
        let parser = YamlParser::new();
        let yaml = r#"
ignoreLabels:
  - wontfix
  - duplicate
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(result["ignoreLabels"], json!(["wontfix", "duplicate"]));
    }

    #[test]
    fn test_yaml_parser_mixed_types() {
        let parser = YamlParser::new();
        let yaml = r#"
string_value: hello
number_value: 42
bool_value: true
null_value: null
"#;
        let result = parser.parse(yaml).unwrap();

        assert_eq!(result["string_value"], "hello");
        assert_eq!(result["number_value"], 42);
        assert_eq!(result["bool_value"], true);
        assert!(result["null_value"].is_null());
    }

    #[test]
    fn test_yaml_parser_keeps_key_order() {
        let parser = YamlParser::new();
        let result = parser.parse("b: 2\na: 1\nc: 3").unwrap();
        let keys: Vec<&str> = result
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();

        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_yaml_parser_invalid() {
        let parser = YamlParser::new();
        let result = parser.parse("invalid: yaml: content:");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_yaml_parser_supported_extensions() {
        let parser = YamlParser::default();
        let extensions = parser.supported_extensions();

        assert_eq!(extensions.len(), 2);
        assert!(extensions.contains(&"yaml"));
        assert!(extensions.contains(&"yml"));
    }
}
