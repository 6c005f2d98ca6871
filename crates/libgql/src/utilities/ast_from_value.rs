use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::value::FieldValue;
use libgql_parser::ast;
use serde_json::Value as JsonValue;

/// Produces a literal for an internal input value of `type_ref`, used to
/// print defaults in SDL and introspection.
///
/// Returns `None` when the value cannot be represented: `null` for a
/// non-null type, or a leaf value the type fails to serialize.
///
/// | JSON value | Literal              |
/// |------------|----------------------|
/// | object     | Input Object         |
/// | array      | List                 |
/// | bool       | Boolean              |
/// | string     | String / Enum Value  |
/// | number     | Int / Float          |
/// | null       | NullValue            |
pub fn ast_from_value(schema: &Schema, value: &JsonValue, type_ref: &TypeRef) -> Option<ast::Value> {
    match type_ref {
        TypeRef::NonNull(inner) => {
            ast_from_value(schema, value, inner).filter(|literal| !literal.is_null())
        },
        _ if value.is_null() => Some(ast::Value::Null { loc: None }),
        TypeRef::List(item_type) => match value {
            JsonValue::Array(items) => Some(ast::Value::List {
                values: items
                    .iter()
                    .filter_map(|item| ast_from_value(schema, item, item_type))
                    .collect(),
                loc: None,
            }),
            _ => ast_from_value(schema, value, item_type),
        },
        TypeRef::Named(name) => match schema.get_type(name)? {
            GraphQLType::InputObject(input) => {
                let JsonValue::Object(entries) = value else {
                    return None;
                };
                let fields = input
                    .fields()
                    .iter()
                    .filter_map(|(field_name, field)| {
                        let literal = ast_from_value(schema, entries.get(field_name)?, field.ty())?;
                        Some(ast::ObjectField {
                            name: field_name.clone(),
                            value: literal,
                            loc: None,
                        })
                    })
                    .collect();
                Some(ast::Value::Object { fields, loc: None })
            },
            leaf_type => leaf_literal(leaf_type, value),
        },
    }
}

fn leaf_literal(leaf_type: &GraphQLType, value: &JsonValue) -> Option<ast::Value> {
    let internal = FieldValue::Json(value.clone());
    let serialized = match leaf_type {
        GraphQLType::Scalar(scalar) => scalar.serialize(&internal).ok()?,
        GraphQLType::Enum(enum_type) => enum_type.serialize(&internal).ok()?,
        _ => return None,
    };

    match serialized {
        JsonValue::Null => None,
        JsonValue::Bool(flag) => Some(ast::Value::Boolean {
            value: flag,
            loc: None,
        }),
        JsonValue::Number(num) => {
            if num.is_i64() || num.is_u64() {
                return Some(ast::Value::int(num));
            }
            let float = num.as_f64().filter(|float| float.is_finite())?;
            if float.fract() == 0.0 {
                Some(ast::Value::int(float))
            } else {
                Some(ast::Value::Float {
                    value: float.to_string(),
                    loc: None,
                })
            }
        },
        JsonValue::String(text) => {
            if matches!(leaf_type, GraphQLType::Enum(_)) {
                return Some(ast::Value::enum_value(text));
            }
            // ID values that look like integers print as Int literals.
            if leaf_type.name() == "ID" && is_integer_string(&text) {
                return Some(ast::Value::int(text));
            }
            Some(ast::Value::string(text))
        },
        JsonValue::Array(_) | JsonValue::Object(_) => None,
    }
}

fn is_integer_string(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [first, rest @ ..] => {
            first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit)
        },
    }
}
