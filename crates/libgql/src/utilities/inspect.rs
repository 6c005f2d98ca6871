use crate::value::FieldValue;
use serde_json::Value as JsonValue;

const MAX_ARRAY_LENGTH: usize = 10;
const MAX_RECURSIVE_DEPTH: usize = 2;

/// Renders a value for inclusion in an error message.
///
/// Strings are quoted, objects print as `{ key: value }` and nesting beyond
/// two levels collapses to `[Array]` / `[Object]`.
pub fn inspect(value: &JsonValue) -> String {
    format_json(value, 0)
}

/// [`inspect`] for resolver output, which may hold host values with no JSON
/// form.
pub fn inspect_field_value(value: &FieldValue) -> String {
    format_field_value(value, 0)
}

fn format_json(value: &JsonValue, depth: usize) -> String {
    match value {
        JsonValue::Null => "null".to_string(),
        JsonValue::Bool(flag) => flag.to_string(),
        JsonValue::Number(num) => format_number(num),
        JsonValue::String(text) => {
            serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
        },
        JsonValue::Array(items) => format_list(
            items.iter().map(|item| format_json(item, depth + 1)),
            items.len(),
            depth,
        ),
        JsonValue::Object(map) => format_object(
            map.iter().map(|(key, value)| (key.as_str(), format_json(value, depth + 1))),
            map.is_empty(),
            depth,
        ),
    }
}

fn format_field_value(value: &FieldValue, depth: usize) -> String {
    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Json(json) => format_json(json, depth),
        FieldValue::List(items) => format_list(
            items.iter().map(|item| format_field_value(item, depth + 1)),
            items.len(),
            depth,
        ),
        FieldValue::Object(map) => format_object(
            map.iter()
                .map(|(key, value)| (key.as_str(), format_field_value(value, depth + 1))),
            map.is_empty(),
            depth,
        ),
        FieldValue::Opaque(_) => "[Object]".to_string(),
        FieldValue::Lazy(_) => "[function]".to_string(),
        FieldValue::Typed { value, .. } => format_field_value(value, depth),
    }
}

/// Whole floats print without a fractional part.
fn format_number(num: &serde_json::Number) -> String {
    match num.as_f64() {
        Some(float) if num.is_f64() && float.fract() == 0.0 && float.abs() < 1e21 => {
            format!("{float:.0}")
        },
        _ => num.to_string(),
    }
}

fn format_list(items: impl Iterator<Item = String>, len: usize, depth: usize) -> String {
    if len == 0 {
        return "[]".to_string();
    }
    if depth >= MAX_RECURSIVE_DEPTH {
        return "[Array]".to_string();
    }
    let mut parts = items.take(MAX_ARRAY_LENGTH).collect::<Vec<_>>();
    match len - parts.len() {
        0 => (),
        1 => parts.push("... 1 more item".to_string()),
        remaining => parts.push(format!("... {remaining} more items")),
    }
    format!("[{}]", parts.join(", "))
}

fn format_object<'k>(
    entries: impl Iterator<Item = (&'k str, String)>,
    is_empty: bool,
    depth: usize,
) -> String {
    if is_empty {
        return "{}".to_string();
    }
    if depth >= MAX_RECURSIVE_DEPTH {
        return "[Object]".to_string();
    }
    let parts = entries
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>();
    format!("{{ {} }}", parts.join(", "))
}
