// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative JavaScript module parser.
//!
//! `.grenrc.js` files are accepted only when they export a plain object
//! literal:
//!
//! ```js
//! // release notes settings
//! module.exports = {
//!     dataSource: 'prs',
//!     ignoreLabels: ['wontfix', 'duplicate'],
//! };
//! ```
//!
//! Nothing is executed. The exported literal is read as JSON5, so unquoted
//! keys, single-quoted strings, trailing commas and comments all work.
//! Anything that needs a JavaScript runtime to evaluate fails to parse.

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use serde_json::Value;

const EXPORT_PREFIXES: [&str; 2] = ["module.exports", "export default"];

/// Parser for `.js` configuration modules that export an object literal.
///
/// # Examples
///
/// ```rust
/// use grenrc::adapters::ScriptParser;
/// use grenrc::ports::ConfigParser;
///
/// let parser = ScriptParser::new();
/// let result = parser.parse("module.exports = { prefix: 'v' };").unwrap();
/// assert_eq!(result["prefix"], "v");
/// ```
#[derive(Debug, Clone)]
pub struct ScriptParser;

impl ScriptParser {
    /// Creates a new script parser.
    pub fn new() -> Self {
        ScriptParser
    }

    /// Returns the exported object literal, without the export statement.
    ///
    /// Commented-out lines are not searched for the export.
    fn exported_literal(content: &str) -> Option<&str> {
        let mut offset = 0;
        let mut export = None;
        for line in content.split_inclusive('\n') {
            if !line.trim_start().starts_with("//") {
                export = EXPORT_PREFIXES
                    .iter()
                    .filter_map(|p| line.find(p).map(|i| (offset + i, *p)))
                    .min_by_key(|(i, _)| *i);
                if export.is_some() {
                    break;
                }
            }
            offset += line.len();
        }

        let (start, prefix) = export?;
        let mut rest = content[start + prefix.len()..].trim_start();
        if prefix == "module.exports" {
            rest = rest.strip_prefix('=')?.trim_start();
        }
        if !rest.starts_with('{') {
            return None;
        }

        let end = rest.rfind('}')?;
        Some(&rest[..=end])
    }
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser for ScriptParser {
    fn parse(&self, content: &str) -> Result<Value> {
        let literal = Self::exported_literal(content).ok_or_else(|| ConfigError::ParseError {
            message: "Script module does not export an object literal".to_string(),
            source: None,
        })?;

        json5::from_str(literal).map_err(|e| ConfigError::parse("script module", e))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["js"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_module_exports() {
        let parser = ScriptParser::new();
        let script = r#"
// gren settings
module.exports = {
    dataSource: 'prs',
    prefix: "v",
    onlyMilestones: false,
    ignoreLabels: ['wontfix', 'duplicate']
};
"#;
        let result = parser.parse(script).unwrap();

        assert_eq!(
            result,
            json!({
                "dataSource": "prs",
                "prefix": "v",
                "onlyMilestones": false,
                "ignoreLabels": ["wontfix", "duplicate"]
            })
        );
    }

    #[test]
    fn test_export_default() {
        let parser = ScriptParser::new();
        let result = parser.parse("export default { a: 1, b: 2 }").unwrap();

        assert_eq!(result, json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn test_json_literal() {
        let parser = ScriptParser::new();
        let result = parser.parse(r#"module.exports = {"a": 1};"#).unwrap();

        assert_eq!(result, json!({ "a": 1 }));
    }

    #[test]
    fn test_missing_export() {
        let parser = ScriptParser::new();
        let result = parser.parse("const config = { a: 1 };");

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_exported_expression_is_rejected() {
        let parser = ScriptParser::new();
        let result = parser.parse("module.exports = require('./base.js');");

        assert!(result.is_err());
    }

    #[test]
    fn test_commented_out_export_is_ignored() {
        let parser = ScriptParser::new();
        let script = "// module.exports = { a: 1 };\nexport default { b: 2 };";
        let result = parser.parse(script).unwrap();

        assert_eq!(result, json!({ "b": 2 }));
    }

    #[test]
    fn test_compact_literal() {
        let parser = ScriptParser::new();
        let result = parser.parse("module.exports = {prefix:'v',a:1};").unwrap();

        assert_eq!(result, json!({ "prefix": "v", "a": 1 }));
    }

    #[test]
    fn test_inline_comments_and_trailing_comma() {
        let parser = ScriptParser::new();
        let script = r#"
module.exports = {
    a: 1, // one
    /* two */ b: 2,
}; // end of settings
"#;
        let result = parser.parse(script).unwrap();

        assert_eq!(result, json!({ "a": 1, "b": 2 }));
    }

    #[test]
    fn test_literal_keeps_key_order() {
        let parser = ScriptParser::new();
        let result = parser.parse("export default { z: 1, a: 2 }").unwrap();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();

        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_supported_extensions() {
        assert_eq!(ScriptParser::default().supported_extensions(), &["js"]);
    }
}
