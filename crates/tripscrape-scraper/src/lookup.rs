//! Safe path lookups over an untyped JSON tree.
//!
//! Every field the extractor reads goes through one of these accessors, so
//! a missing key or a wrong-shaped intermediate node degrades to `None` or
//! a default instead of a panic.
//!
//! JSON `null` is treated the same as an absent key.

use serde_json::Value;

/// Walk `path` through nested objects, returning the node at the end.
///
/// An empty path returns `node` itself.
pub fn lookup<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter()
        .try_fold(node, |current, key| current.as_object()?.get(*key))
        .filter(|v| !v.is_null())
}

/// Like [`lookup`], but clones the found node or returns `default`.
pub fn lookup_or(node: &Value, path: &[&str], default: impl Into<Value>) -> Value {
    lookup(node, path).cloned().unwrap_or_else(|| default.into())
}

/// String at `path`, if present and actually a string.
pub fn lookup_str<'a>(node: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(node, path).and_then(Value::as_str)
}

/// Array at `path`, or an empty slice when absent or not an array.
pub fn lookup_array<'a>(node: &'a Value, path: &[&str]) -> &'a [Value] {
    lookup(node, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Scalar text at `path`. Numbers are rendered in their JSON form, e.g. `"123"`.
pub fn lookup_text(node: &Value, path: &[&str]) -> Option<String> {
    match lookup(node, path)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
