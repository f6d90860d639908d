//! Payload values are `serde_json::Value`s, which gives every argument a runtime type
//! we can name in the header and a faithful way to print it.

use serde_json::Value;

/// Runtime type name of a single value.
#[must_use]
pub const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Type annotation for a payload: the bare type name for a single value, or
/// `[t1, t2, ...]` with one entry per element when the payload is a sequence.
#[must_use]
pub fn annotate(value: &Value) -> String {
    match value {
        Value::Array(items) => {
            let names: Vec<&str> = items.iter().map(type_name).collect();
            format!("[{}]", names.join(", "))
        }
        other => type_name(other).to_string(),
    }
}

/// Strings print verbatim like a console would; everything else as pretty JSON.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
