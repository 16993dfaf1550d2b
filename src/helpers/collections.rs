// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping and list helpers.

use crate::domain::ConfigMap;
use serde_json::Value;

/// Returns a copy of `map` with its keys in ascending lexicographic order.
///
/// Only the top level is reordered; nested mappings keep their own order.
///
/// # Examples
///
/// ```
/// use grenrc::helpers::sort_object;
/// use serde_json::json;
///
/// let map = json!({ "b": 2, "a": 1 }).as_object().unwrap().clone();
/// let sorted = sort_object(&map);
/// assert_eq!(serde_json::to_string(&sorted).unwrap(), r#"{"a":1,"b":2}"#);
/// ```
pub fn sort_object(map: &ConfigMap) -> ConfigMap {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

/// Coerces a loosely typed option value into a list.
///
/// # Arguments
/// - `value` - A list, a mapping, a comma separated string, or nothing
///
/// # Returns
/// - an empty list for `None` and for falsy values (`false`, `null`, `""`, `0`)
/// - a list unchanged
/// - the values of a mapping, in key order
/// - for a string, each comma separated segment trimmed, with `_` replaced by
///   a space; segments stay strings, `"1, 2"` gives `["1", "2"]`
/// - any other scalar wrapped in a one element list
///
/// # Examples
///
/// ```
/// use grenrc::helpers::convert_string_to_array;
/// use serde_json::json;
///
/// let labels = json!("wont_fix, duplicate");
/// assert_eq!(
///     convert_string_to_array(Some(&labels)),
///     vec![json!("wont fix"), json!("duplicate")]
/// );
/// assert!(convert_string_to_array(None).is_empty());
/// ```
pub fn convert_string_to_array(value: Option<&Value>) -> Vec<Value> {
    let Some(value) = value else {
        return Vec::new();
    };

    match value {
        Value::Null | Value::Bool(false) => Vec::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => Vec::new(),
        Value::String(s) if s.is_empty() => Vec::new(),
        Value::Array(items) => items.clone(),
        Value::Object(map) => map.values().cloned().collect(),
        Value::String(s) => split_list(s).into_iter().map(Value::String).collect(),
        other => vec![other.clone()],
    }
}

/// Splits a comma separated list, trimming each entry and turning `_` into spaces.
///
/// ```
/// use grenrc::helpers::split_list;
///
/// assert_eq!(split_list("one_1, two_2,three_3"), vec!["one 1", "two 2", "three 3"]);
/// ```
pub fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|segment| segment.trim().replace('_', " "))
        .collect()
}
