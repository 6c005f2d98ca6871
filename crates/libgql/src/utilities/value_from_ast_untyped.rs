use crate::value::Variables;
use libgql_parser::ast;
use serde_json::Value as JsonValue;

/// Reads a literal without a type to guide it: ints and floats become JSON
/// numbers, enum values become strings and variables are looked up in
/// `variables` (reading as `null` when absent).
pub fn value_from_ast_untyped(node: &ast::Value, variables: Option<&Variables>) -> JsonValue {
    match node {
        ast::Value::Null { .. } => JsonValue::Null,
        ast::Value::Int { value, .. } => match value.parse::<i64>() {
            Ok(int) => JsonValue::from(int),
            Err(_) => parse_float(value),
        },
        ast::Value::Float { value, .. } => parse_float(value),
        ast::Value::String { value, .. } | ast::Value::Enum { value, .. } => {
            JsonValue::String(value.clone())
        },
        ast::Value::Boolean { value, .. } => JsonValue::Bool(*value),
        ast::Value::List { values, .. } => JsonValue::Array(
            values
                .iter()
                .map(|item| value_from_ast_untyped(item, variables))
                .collect(),
        ),
        ast::Value::Object { fields, .. } => JsonValue::Object(
            fields
                .iter()
                .map(|field| (field.name.clone(), value_from_ast_untyped(&field.value, variables)))
                .collect(),
        ),
        ast::Value::Variable { name, .. } => variables
            .and_then(|variables| variables.get(name))
            .cloned()
            .unwrap_or(JsonValue::Null),
    }
}

fn parse_float(text: &str) -> JsonValue {
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map_or(JsonValue::Null, JsonValue::Number)
}
