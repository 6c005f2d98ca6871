use crate::types::EnumType;
use crate::types::EnumValue;
use crate::value::FieldValue;
use libgql_parser::parse_value;
use serde_json::json;

fn color() -> EnumType {
    EnumType::new("Color")
        .value(EnumValue::new("RED").value(json!(0)))
        .value(EnumValue::new("GREEN").value(json!(1)))
        .value(EnumValue::new("BLUE").deprecated("Use GREEN"))
}

#[test]
fn serializes_internal_values_to_names() {
    let color = color();

    assert_eq!(color.serialize(&FieldValue::from(1)), Ok(json!("GREEN")));
    assert_eq!(color.serialize(&FieldValue::from("BLUE")), Ok(json!("BLUE")));
    assert_eq!(
        color.serialize(&FieldValue::from(5)),
        Err("Enum \"Color\" cannot represent value: 5".to_string()),
    );
}

#[test]
fn parses_variable_names_to_internal_values() {
    let color = color();

    assert_eq!(color.parse_value(&json!("RED")), Ok(json!(0)));
    assert_eq!(
        color.parse_value(&json!("REDD")),
        Err("Value \"REDD\" does not exist in \"Color\" enum. Did you mean \"RED\"?".to_string()),
    );
}

#[test]
fn parses_enum_literals_only() {
    let color = color();

    assert_eq!(color.parse_literal(&parse_value("GREEN").unwrap()), Ok(json!(1)));
    assert_eq!(
        color.parse_literal(&parse_value("\"RED\"").unwrap()),
        Err("Enum \"Color\" cannot represent non-enum value: \"RED\". Did you mean \"RED\" or \
             \"GREEN\"?"
            .to_string()),
    );
    assert_eq!(
        color.parse_literal(&parse_value("PURPLE").unwrap()),
        Err("Value \"PURPLE\" does not exist in \"Color\" enum.".to_string()),
    );
}

#[test]
fn values_keep_declaration_order_and_deprecation() {
    let color = color();

    assert_eq!(color.values().keys().collect::<Vec<_>>(), vec!["RED", "GREEN", "BLUE"]);
    let blue = color.get_value("BLUE").unwrap();
    assert!(blue.is_deprecated());
    assert_eq!(blue.deprecation_reason(), Some("Use GREEN"));
    assert_eq!(blue.internal_value(), &json!("BLUE"));
}
