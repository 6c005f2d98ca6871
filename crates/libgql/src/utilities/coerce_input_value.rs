use crate::error::PathSegment;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;
use crate::utilities::default_value_to_json;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use serde_json::Map;
use serde_json::Value as JsonValue;

/// Coerces an external JSON value (such as a variable) to `type_ref`.
///
/// Every problem is reported to `on_error` with the path to the offending
/// value within `input`, the offending value and a message. The returned
/// value is only meaningful when no error was reported.
///
/// https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values
pub fn coerce_input_value(
    schema: &Schema,
    input: &JsonValue,
    type_ref: &TypeRef,
    on_error: &mut dyn FnMut(&[PathSegment], &JsonValue, String),
) -> JsonValue {
    let mut path = vec![];
    coerce_at_path(schema, input, type_ref, on_error, &mut path)
}

fn coerce_at_path(
    schema: &Schema,
    input: &JsonValue,
    type_ref: &TypeRef,
    on_error: &mut dyn FnMut(&[PathSegment], &JsonValue, String),
    path: &mut Vec<PathSegment>,
) -> JsonValue {
    match type_ref {
        TypeRef::NonNull(inner) => {
            if input.is_null() {
                on_error(
                    path,
                    input,
                    format!("Expected non-nullable type \"{type_ref}\" not to be null."),
                );
                return JsonValue::Null;
            }
            coerce_at_path(schema, input, inner, on_error, path)
        },
        _ if input.is_null() => JsonValue::Null,
        TypeRef::List(item_type) => match input {
            JsonValue::Array(items) => {
                let mut coerced = Vec::with_capacity(items.len());
                for (idx, item) in items.iter().enumerate() {
                    path.push(PathSegment::Index(idx));
                    coerced.push(coerce_at_path(schema, item, item_type, on_error, path));
                    path.pop();
                }
                JsonValue::Array(coerced)
            },
            // A single value is accepted as a list of one.
            _ => JsonValue::Array(vec![coerce_at_path(schema, input, item_type, on_error, path)]),
        },
        TypeRef::Named(name) => {
            let Some(named_type) = schema.get_type(name) else {
                on_error(path, input, format!("Unknown type \"{name}\"."));
                return JsonValue::Null;
            };
            coerce_named(schema, input, named_type, on_error, path)
        },
    }
}

fn coerce_named(
    schema: &Schema,
    input: &JsonValue,
    named_type: &GraphQLType,
    on_error: &mut dyn FnMut(&[PathSegment], &JsonValue, String),
    path: &mut Vec<PathSegment>,
) -> JsonValue {
    let result = match named_type {
        GraphQLType::Scalar(scalar) => scalar.parse_value(input),
        GraphQLType::Enum(enum_type) => enum_type.parse_value(input),
        GraphQLType::InputObject(input_type) => {
            let JsonValue::Object(entries) = input else {
                on_error(
                    path,
                    input,
                    format!("Expected type \"{}\" to be an object.", input_type.name()),
                );
                return JsonValue::Null;
            };

            let mut coerced = Map::new();
            for (field_name, field) in input_type.fields() {
                let Some(field_input) = entries.get(field_name) else {
                    match field.get_default_value() {
                        Some(default) => {
                            let default = default_value_to_json(schema, default, field.ty())
                                .unwrap_or(JsonValue::Null);
                            coerced.insert(field_name.clone(), default);
                        },
                        None if field.ty().is_non_null() => on_error(
                            path,
                            input,
                            format!(
                                "Field \"{field_name}\" of required type \"{}\" was not provided.",
                                field.ty(),
                            ),
                        ),
                        None => (),
                    }
                    continue;
                };
                path.push(PathSegment::Key(field_name.clone()));
                let value = coerce_at_path(schema, field_input, field.ty(), on_error, path);
                path.pop();
                coerced.insert(field_name.clone(), value);
            }

            let known = input_type.fields().keys().map(String::as_str).collect::<Vec<_>>();
            for key in entries.keys() {
                if !input_type.fields().contains_key(key) {
                    on_error(
                        path,
                        input,
                        format!(
                            "Field \"{key}\" is not defined by type \"{}\".{}",
                            input_type.name(),
                            did_you_mean(None, &suggestion_list(key, &known)),
                        ),
                    );
                }
            }
            return JsonValue::Object(coerced);
        },
        other => Err(format!("Expected type \"{}\" to be an input type.", other.name())),
    };

    result.unwrap_or_else(|message| {
        on_error(path, input, message);
        JsonValue::Null
    })
}

/// Renders a path within an input value the way variable errors quote it:
/// `.key` for object fields and `[0]` for list items.
pub fn print_path_array(path: &[PathSegment]) -> String {
    path.iter()
        .map(|segment| match segment {
            PathSegment::Key(key) => format!(".{key}"),
            PathSegment::Index(idx) => format!("[{idx}]"),
        })
        .collect()
}
