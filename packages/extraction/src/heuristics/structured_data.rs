//! Location lookups inside JSON-LD blocks.

use serde_json::Value;

/// Nodes a block describes: the block itself, array elements, and `@graph`
/// members.
pub(super) fn nodes(block: &Value) -> Vec<&Value> {
    match block {
        Value::Array(items) => items.iter().flat_map(nodes).collect(),
        Value::Object(map) => {
            let mut out = vec![block];
            if let Some(Value::Array(graph)) = map.get("@graph") {
                out.extend(graph.iter().flat_map(nodes));
            }
            out
        }
        _ => Vec::new(),
    }
}

/// Whether `@type` is (or contains) `expected`.
pub(super) fn has_type(node: &Value, expected: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == expected,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(expected)),
        _ => false,
    }
}

/// Non-blank string value.
pub(super) fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A `Place`-like value: its `name`, else its `address`.
pub(super) fn place_name(place: &Value) -> Option<String> {
    text(place.get("name")).or_else(|| place.get("address").and_then(address))
}

/// Render an address given as text or as a `PostalAddress` object.
pub(super) fn address(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => text(Some(value)),
        Value::Object(_) => {
            let parts: Vec<String> = ["addressLocality", "addressRegion", "addressCountry"]
                .iter()
                .filter_map(|key| {
                    let part = value.get(*key)?;
                    // addressCountry may itself be a Country object
                    text(Some(part)).or_else(|| text(part.get("name")))
                })
                .collect();
            if parts.is_empty() {
                text(value.get("streetAddress"))
            } else {
                Some(parts.join(", "))
            }
        }
        _ => None,
    }
}
