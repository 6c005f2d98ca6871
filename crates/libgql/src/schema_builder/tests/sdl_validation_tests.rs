use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema_builder::build_schema;
use crate::schema_builder::sdl_validator::SdlValidator;
use libgql_parser::parse;

fn sdl_errors(sdl: &str) -> Vec<String> {
    let document = parse(sdl).expect("SDL parses");
    SdlValidator::new(&document, None)
        .validate()
        .iter()
        .map(GraphQLError::message)
        .map(str::to_string)
        .collect()
}

fn extension_errors(base: &Schema, sdl: &str) -> Vec<String> {
    let document = parse(sdl).expect("SDL parses");
    SdlValidator::new(&document, Some(base))
        .validate()
        .iter()
        .map(GraphQLError::message)
        .map(str::to_string)
        .collect()
}

#[test]
fn valid_document_has_no_errors() {
    let errors = sdl_errors(concat!(
        "schema { query: Query }\n",
        "directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION\n",
        "type Query @tag(name: \"a\") @tag(name: \"b\") { a(x: Int, y: [String!]): Int @deprecated }\n",
        "extend type Query { b: Int }\n",
    ));

    assert_eq!(errors, Vec::<String>::new());
}

#[test]
fn duplicate_type_names() {
    let errors = sdl_errors("type Query { a: Int } type Query { b: Int }");

    assert_eq!(errors, vec!["There can be only one type named \"Query\".".to_string()]);
}

#[test]
fn duplicate_root_operation_types() {
    let errors = sdl_errors(concat!(
        "schema { query: Query query: Query }\n",
        "type Query { a: Int }\n",
    ));

    assert_eq!(errors, vec!["There can be only one query type in schema.".to_string()]);
}

#[test]
fn duplicate_fields_across_extensions() {
    let errors = sdl_errors(concat!(
        "type Query { a: Int }\n",
        "extend type Query { a: String }\n",
    ));

    assert_eq!(errors, vec!["Field \"Query.a\" can only be defined once.".to_string()]);
}

#[test]
fn duplicate_enum_values() {
    let errors = sdl_errors("type Query { a: Int } enum Color { RED RED }");

    assert_eq!(errors, vec!["Enum value \"Color.RED\" can only be defined once.".to_string()]);
}

#[test]
fn duplicate_argument_definitions() {
    let errors = sdl_errors(concat!(
        "type Query { a(x: Int, x: Int): Int }\n",
        "directive @d(y: Int, y: Int) on FIELD\n",
    ));

    assert_eq!(
        errors,
        vec![
            "Argument \"Query.a(x:)\" can only be defined once.".to_string(),
            "Argument \"@d(y:)\" can only be defined once.".to_string(),
        ],
    );
}

#[test]
fn duplicate_directive_definitions() {
    let errors = sdl_errors(concat!(
        "directive @d on FIELD\n",
        "directive @d on FIELD\n",
        "type Query { a: Int }\n",
    ));

    assert_eq!(errors, vec!["There can be only one directive named \"@d\".".to_string()]);
}

#[test]
fn unknown_types_are_reported_with_suggestions() {
    let errors = sdl_errors("type Query { user: Usr } type User { a: Int }");

    assert_eq!(errors, vec!["Unknown type \"Usr\". Did you mean \"User\"?".to_string()]);
}

#[test]
fn unknown_and_misplaced_directives() {
    let errors = sdl_errors(concat!(
        "type Query @deprecated { a: Int @unknown }\n",
    ));

    assert_eq!(
        errors,
        vec![
            "Directive \"@deprecated\" may not be used on OBJECT.".to_string(),
            "Unknown directive \"@unknown\".".to_string(),
        ],
    );
}

#[test]
fn non_repeatable_directive_used_twice() {
    let errors = sdl_errors("type Query { a: Int @deprecated @deprecated }");

    assert_eq!(
        errors,
        vec!["The directive \"@deprecated\" can only be used once at this location.".to_string()],
    );
}

#[test]
fn directive_arguments_are_checked() {
    let errors = sdl_errors(concat!(
        "scalar Date @specifiedBy(uri: \"x\")\n",
        "type Query { a: Date }\n",
    ));

    assert_eq!(
        errors,
        vec![
            "Unknown argument \"uri\" on directive \"@specifiedBy\". Did you mean \"url\"?"
                .to_string(),
            "Argument \"@specifiedBy(url:)\" of type \"String!\" is required, but it was not \
             provided."
                .to_string(),
        ],
    );
}

#[test]
fn extension_of_wrong_kind() {
    let errors = sdl_errors("type Query { a: Int } extend enum Query { A }");

    assert_eq!(errors, vec!["Cannot extend non-enum type \"Query\".".to_string()]);
}

#[test]
fn extension_against_base_schema() {
    let base = build_schema("schema { query: Query } type Query { a: Int } enum Color { RED }")
        .expect("base builds");

    let errors = extension_errors(
        &base,
        concat!(
            "schema { query: Query }\n",
            "extend schema { query: Query }\n",
            "extend type Query { a: String }\n",
            "extend enum Color { RED }\n",
            "directive @skip on FIELD\n",
        ),
    );

    assert_eq!(
        errors,
        vec![
            "Cannot define a new schema within a schema extension.".to_string(),
            "Type for query already defined in the schema. It cannot be redefined.".to_string(),
            "Type for query already defined in the schema. It cannot be redefined.".to_string(),
            "Directive \"@skip\" already exists in the schema. It cannot be redefined.".to_string(),
            "Field \"Query.a\" already exists in the schema. It cannot also be defined in this \
             type extension."
                .to_string(),
            "Enum value \"Color.RED\" already exists in the schema. It cannot also be defined in \
             this type extension."
                .to_string(),
        ],
    );
}
