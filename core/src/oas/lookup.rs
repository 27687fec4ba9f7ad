#![deny(missing_docs)]

//! # Tolerant Value Lookups
//!
//! API descriptions found in the wild are partial and inconsistent. Every
//! lookup here degrades to `None` instead of failing, so callers can chain
//! them and fall back to a default at the end.

use serde_json::Value;

/// Returns the member `key` of `value`, or `None` if `value` is not an object
/// or has no such member.
pub fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

/// Follows `keys` from `value`, one object level per key.
///
/// A missing or non-object level anywhere along the way yields `None`.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |current, key| child(current, key))
}

/// Renders a scalar as display text.
///
/// Strings are returned verbatim, numbers and booleans as their JSON text.
/// `null`, arrays and objects have no text.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Evaluates each key path in order and returns the first one that resolves
/// to text.
///
/// ```
/// use apidoc_core::oas::lookup::first_text;
/// use serde_json::json;
///
/// let param = json!({"name": "id", "schema": {"type": "integer"}});
/// let ty = first_text(&param, &[&["type"], &["schema", "type"]]);
/// assert_eq!(ty.as_deref(), Some("integer"));
/// ```
pub fn first_text(value: &Value, chain: &[&[&str]]) -> Option<String> {
    chain
        .iter()
        .find_map(|keys| path(value, keys).and_then(text))
}

/// Python-style truthiness: `null`, `false`, `0`, and empty strings or
/// collections are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
