use crate::schema::Schema;
use crate::types::DefaultValue;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::value::Variables;
use libgql_parser::ast;
use serde_json::Map;
use serde_json::Value as JsonValue;

/// Coerces a literal to a value of `type_ref`, or `None` when the literal
/// is not valid for that type.
///
/// Variables are looked up in `variables`; a variable that was not
/// provided makes the value invalid, unless it sits in a list item or
/// input object field position where it is treated as absent.
///
/// `null` is a valid result (for a nullable type written as `null`) and is
/// distinct from `None`.
///
/// | Literal           | JSON value    |
/// |-------------------|---------------|
/// | Input Object      | object        |
/// | List              | array         |
/// | Boolean           | bool          |
/// | String            | string        |
/// | Int / Float       | number        |
/// | Enum Value        | internal value|
/// | NullValue         | null          |
pub fn value_from_ast(
    schema: &Schema,
    node: &ast::Value,
    type_ref: &TypeRef,
    variables: Option<&Variables>,
) -> Option<JsonValue> {
    if let ast::Value::Variable { name, .. } = node {
        let value = variables?.get(name)?;
        if value.is_null() && type_ref.is_non_null() {
            return None;
        }
        // Variables were already coerced against their declared type.
        return Some(value.clone());
    }

    match type_ref {
        TypeRef::NonNull(inner) => {
            if node.is_null() {
                return None;
            }
            value_from_ast(schema, node, inner, variables)
        },
        _ if node.is_null() => Some(JsonValue::Null),
        TypeRef::List(item_type) => match node {
            ast::Value::List { values, .. } => {
                let mut coerced = Vec::with_capacity(values.len());
                for item in values {
                    if is_missing_variable(item, variables) {
                        if item_type.is_non_null() {
                            return None;
                        }
                        coerced.push(JsonValue::Null);
                    } else {
                        coerced.push(value_from_ast(schema, item, item_type, variables)?);
                    }
                }
                Some(JsonValue::Array(coerced))
            },
            _ => Some(JsonValue::Array(vec![value_from_ast(
                schema, node, item_type, variables,
            )?])),
        },
        TypeRef::Named(name) => match schema.get_type(name)? {
            GraphQLType::InputObject(input) => {
                let ast::Value::Object { fields, .. } = node else {
                    return None;
                };
                let mut coerced = Map::new();
                for (field_name, field) in input.fields() {
                    let field_node = fields.iter().find(|node| &node.name == field_name);
                    match field_node {
                        Some(field_node) if !is_missing_variable(&field_node.value, variables) => {
                            let value =
                                value_from_ast(schema, &field_node.value, field.ty(), variables)?;
                            coerced.insert(field_name.clone(), value);
                        },
                        _ => match field.get_default_value() {
                            Some(default) => {
                                let value = default_value_to_json(schema, default, field.ty())?;
                                coerced.insert(field_name.clone(), value);
                            },
                            None if field.ty().is_non_null() => return None,
                            None => (),
                        },
                    }
                }
                Some(JsonValue::Object(coerced))
            },
            GraphQLType::Scalar(scalar) => scalar.parse_literal(node, variables).ok(),
            GraphQLType::Enum(enum_type) => enum_type.parse_literal(node).ok(),
            _ => None,
        },
    }
}

/// The coerced form of an argument or input field default.
///
/// Literal defaults written in SDL are coerced against `type_ref`; `None`
/// means the literal is not valid for the type.
pub fn default_value_to_json(
    schema: &Schema,
    default: &DefaultValue,
    type_ref: &TypeRef,
) -> Option<JsonValue> {
    match default {
        DefaultValue::Value(value) => Some(value.clone()),
        DefaultValue::Literal(literal) => value_from_ast(schema, literal, type_ref, None),
    }
}

fn is_missing_variable(node: &ast::Value, variables: Option<&Variables>) -> bool {
    match node {
        ast::Value::Variable { name, .. } => {
            variables.is_none_or(|variables| !variables.contains_key(name))
        },
        _ => false,
    }
}
