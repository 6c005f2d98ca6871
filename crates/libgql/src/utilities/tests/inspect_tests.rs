use crate::utilities::inspect;
use crate::utilities::inspect_field_value;
use crate::value::FieldValue;
use serde_json::json;

#[test]
fn scalars_render_like_literals() {
    assert_eq!(inspect(&json!(null)), "null");
    assert_eq!(inspect(&json!("a\"b")), "\"a\\\"b\"");
    assert_eq!(inspect(&json!(3.0)), "3");
    assert_eq!(inspect(&json!(1.5)), "1.5");
}

#[test]
fn nesting_collapses_past_two_levels() {
    assert_eq!(inspect(&json!({ "a": [1, { "b": 2 }] })), "{ a: [1, [Object]] }");
    assert_eq!(inspect(&json!([[[]], [[1]]])), "[[[]], [[Array]]]");
    assert_eq!(inspect(&json!({})), "{}");
}

#[test]
fn long_lists_are_truncated() {
    assert_eq!(
        inspect(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12])),
        "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ... 2 more items]",
    );
    assert_eq!(
        inspect(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])),
        "[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, ... 1 more item]",
    );
}

#[test]
fn host_values_have_placeholders() {
    let value = FieldValue::object([
        ("id", FieldValue::from(1)),
        ("handle", FieldValue::opaque(std::time::Duration::from_secs(1))),
    ]);

    assert_eq!(inspect_field_value(&value), "{ id: 1, handle: [Object] }");
}
