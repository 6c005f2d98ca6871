use crate::types::ScalarType;
use crate::types::specified_scalar_type;
use crate::value::FieldValue;
use libgql_parser::parse_value;
use serde_json::json;

fn builtin(name: &str) -> ScalarType {
    specified_scalar_type(name).expect("built-in scalar")
}

mod int {
    use super::*;

    #[test]
    fn serializes_whole_numbers_numeric_strings_and_booleans() {
        let int = builtin("Int");

        assert_eq!(int.serialize(&FieldValue::from(7)), Ok(json!(7)));
        assert_eq!(int.serialize(&FieldValue::from(3.0)), Ok(json!(3)));
        assert_eq!(int.serialize(&FieldValue::from("12")), Ok(json!(12)));
        assert_eq!(int.serialize(&FieldValue::from(true)), Ok(json!(1)));
    }

    #[test]
    fn rejects_fractions_and_values_outside_32_bits() {
        let int = builtin("Int");

        assert_eq!(
            int.serialize(&FieldValue::from(1.5)),
            Err("Int cannot represent non-integer value: 1.5".to_string()),
        );
        assert_eq!(
            int.serialize(&FieldValue::from(2_147_483_648_i64)),
            Err("Int cannot represent non 32-bit signed integer value: 2147483648".to_string()),
        );
    }

    #[test]
    fn input_coercion_is_strict() {
        let int = builtin("Int");

        assert_eq!(int.parse_value(&json!(4)), Ok(json!(4)));
        assert_eq!(
            int.parse_value(&json!("4")),
            Err("Int cannot represent non-integer value: \"4\"".to_string()),
        );
        assert_eq!(int.parse_literal(&parse_value("-3").unwrap(), None), Ok(json!(-3)));
        assert_eq!(
            int.parse_literal(&parse_value("4.5").unwrap(), None),
            Err("Int cannot represent non-integer value: 4.5".to_string()),
        );
    }
}

mod other_builtins {
    use super::*;

    #[test]
    fn float_accepts_int_literals() {
        let float = builtin("Float");

        assert_eq!(float.parse_literal(&parse_value("3").unwrap(), None), Ok(json!(3)));
        assert_eq!(float.parse_literal(&parse_value("2.5").unwrap(), None), Ok(json!(2.5)));
        assert!(float.parse_value(&json!(true)).is_err());
    }

    #[test]
    fn string_serializes_scalars_as_text() {
        let string = builtin("String");

        assert_eq!(string.serialize(&FieldValue::from(true)), Ok(json!("true")));
        assert_eq!(string.serialize(&FieldValue::from(42)), Ok(json!("42")));
        assert_eq!(
            string.parse_value(&json!(1)),
            Err("String cannot represent a non string value: 1".to_string()),
        );
    }

    #[test]
    fn boolean_serializes_numbers_by_truthiness() {
        let boolean = builtin("Boolean");

        assert_eq!(boolean.serialize(&FieldValue::from(0)), Ok(json!(false)));
        assert_eq!(boolean.serialize(&FieldValue::from(2)), Ok(json!(true)));
        assert!(boolean.parse_value(&json!(1)).is_err());
    }

    #[test]
    fn id_accepts_strings_and_integers() {
        let id = builtin("ID");

        assert_eq!(id.serialize(&FieldValue::from(42)), Ok(json!("42")));
        assert_eq!(id.parse_value(&json!(7)), Ok(json!("7")));
        assert_eq!(id.parse_literal(&parse_value("\"abc\"").unwrap(), None), Ok(json!("abc")));
        assert_eq!(id.parse_literal(&parse_value("12").unwrap(), None), Ok(json!("12")));
        assert!(id.parse_literal(&parse_value("1.5").unwrap(), None).is_err());
    }

    #[test]
    fn only_the_five_builtins_exist() {
        assert!(specified_scalar_type("Date").is_none());
        for name in ["String", "Int", "Float", "Boolean", "ID"] {
            assert_eq!(builtin(name).name(), name);
        }
    }
}

mod custom {
    use super::*;

    #[test]
    fn default_functions_pass_json_through() {
        let json_scalar = ScalarType::new("JSON");

        assert_eq!(
            json_scalar.serialize(&FieldValue::from(json!({ "a": [1] }))),
            Ok(json!({ "a": [1] })),
        );
        assert_eq!(json_scalar.parse_value(&json!([true])), Ok(json!([true])));
        assert_eq!(
            json_scalar.parse_literal(&parse_value("{ a: [1, \"x\"] }").unwrap(), None),
            Ok(json!({ "a": [1, "x"] })),
        );
    }

    #[test]
    fn host_values_cannot_be_serialized_by_default() {
        let json_scalar = ScalarType::new("JSON");

        let result = json_scalar.serialize(&FieldValue::opaque(5_u8));

        assert!(result.unwrap_err().starts_with("Scalar \"JSON\" cannot represent value:"));
    }

    #[test]
    fn custom_functions_replace_the_defaults() {
        let upper = ScalarType::new("Upper")
            .serialize_with(|value| {
                let text = value.to_json().and_then(|json| json.as_str().map(str::to_uppercase));
                text.map(Into::into).ok_or_else(|| "not text".to_string())
            })
            .specified_by_url("https://example.com/upper");

        assert_eq!(upper.serialize(&FieldValue::from("abc")), Ok(json!("ABC")));
        assert_eq!(upper.serialize(&FieldValue::from(1)), Err("not text".to_string()));
        assert_eq!(upper.get_specified_by_url(), Some("https://example.com/upper"));
    }
}
