//! Masking of sensitive values before they reach a log sink.

use serde_json::Value;

/// Keys whose values are never logged, compared case-insensitively.
pub const SENSITIVE_FIELDS: [&str; 4] = ["card", "cvv", "password", "token"];

/// Replacement for a sensitive value.
pub const MASK: &str = "***HIDDEN***";

/// Returns a copy of `data` with every sensitive value masked.
///
/// Objects and arrays are walked to any depth. A sensitive key is masked
/// whole, even when its value is itself an object. Everything else is
/// copied unchanged. Only the log side channel uses this; request bodies
/// are sent as given.
#[must_use]
pub fn redact(data: &Value) -> Value {
    match data {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| {
                    let value = if is_sensitive(key) {
                        Value::String(MASK.to_string())
                    } else {
                        redact(value)
                    };
                    (key.clone(), value)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact).collect()),
        scalar => scalar.clone(),
    }
}

/// Returns true if `key` names a sensitive field.
#[must_use]
pub fn is_sensitive(key: &str) -> bool {
    SENSITIVE_FIELDS
        .iter()
        .any(|field| key.eq_ignore_ascii_case(field))
}
