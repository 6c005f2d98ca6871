use crate::error::PathSegment;
use crate::types::TypeRef;
use crate::utilities::coerce_input_value;
use crate::utilities::print_path_array;
use crate::utilities::tests::input_schema;
use serde_json::Value as JsonValue;
use serde_json::json;

/// Coerces `input`, returning the value and each error as
/// `(printed path, message)`.
fn coerce(input: JsonValue, type_ref: &TypeRef) -> (JsonValue, Vec<(String, String)>) {
    let schema = input_schema();
    let mut errors = vec![];
    let value = coerce_input_value(&schema, &input, type_ref, &mut |path, _, message| {
        errors.push((print_path_array(path), message));
    });
    (value, errors)
}

fn filter() -> TypeRef {
    TypeRef::named("Filter")
}

#[test]
fn input_object_gets_defaults_and_field_order() {
    let (value, errors) = coerce(json!({ "color": "GREEN", "tags": "one" }), &filter());

    assert!(errors.is_empty());
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        r#"{"limit":10,"color":"GREEN","tags":["one"]}"#,
    );
}

#[test]
fn errors_carry_the_path_to_the_bad_value() {
    let (_, errors) = coerce(json!({ "tags": ["a", null], "nested": {} }), &filter());

    assert_eq!(
        errors,
        vec![
            (
                ".tags[1]".to_string(),
                "Expected non-nullable type \"String!\" not to be null.".to_string(),
            ),
            (
                ".nested".to_string(),
                "Field \"id\" of required type \"ID!\" was not provided.".to_string(),
            ),
        ],
    );
}

#[test]
fn unknown_fields_are_reported_with_suggestions() {
    let (_, errors) = coerce(json!({ "limt": 1 }), &filter());

    assert_eq!(
        errors,
        vec![(
            String::new(),
            "Field \"limt\" is not defined by type \"Filter\". Did you mean \"limit\"?".to_string(),
        )],
    );
}

#[test]
fn non_object_for_input_object_is_an_error() {
    let (value, errors) = coerce(json!([1]), &filter());

    assert_eq!(value, JsonValue::Null);
    assert_eq!(errors[0].1, "Expected type \"Filter\" to be an object.");
}

#[test]
fn enum_and_scalar_errors_come_from_the_type() {
    let (_, errors) = coerce(json!({ "color": "BLUE", "limit": 1.5 }), &filter());

    assert_eq!(
        errors.into_iter().map(|(_, message)| message).collect::<Vec<_>>(),
        vec![
            "Int cannot represent non-integer value: 1.5".to_string(),
            "Value \"BLUE\" does not exist in \"Color\" enum.".to_string(),
        ],
    );
}

#[test]
fn path_array_prints_keys_and_indices() {
    let path = vec![PathSegment::from("a"), PathSegment::from(0), PathSegment::from("b")];

    assert_eq!(print_path_array(&path), ".a[0].b");
}
