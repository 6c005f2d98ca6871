use crate::schema_builder::build_schema;
use crate::validation::ValidationOptions;
use crate::validation::rules::FieldsOnCorrectTypeRule;
use crate::validation::specified_rules;
use crate::validation::tests::messages;
use crate::validation::tests::test_schema;
use crate::validation::validate;
use crate::validation::validate_with_rules;
use libgql_parser::parse;

#[test]
fn valid_document_has_no_errors() {
    let schema = test_schema();
    let document = parse(
        r#"
        query DogQuery($cmd: DogCommand = SIT, $skipBarks: Boolean!) {
          dog {
            name
            ...DogFields
            doesKnowCommand(dogCommand: $cmd)
          }
          catOrDog { ... on Cat { meows } ... on Pet { name } }
        }
        fragment DogFields on Dog { barks @skip(if: $skipBarks) }
        "#,
    )
    .expect("query should parse");
    assert!(validate(&schema, &document).is_empty());
}

#[test]
fn errors_from_all_rules_are_collected_in_document_order() {
    let schema = test_schema();
    let document = parse("{ dog { unknownField } cat }").expect("query should parse");
    let errors = validate(&schema, &document);
    let messages = messages(&errors);
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("Cannot query field \"unknownField\" on type \"Dog\"."));
    assert_eq!(
        messages[1],
        "Field \"cat\" of type \"Cat\" must have a selection of subfields. Did you mean \"cat { \
         ... }\"?",
    );
}

#[test]
fn type_system_definitions_are_rejected() {
    let schema = test_schema();
    let document = parse("{ dog { name } }\ntype Extra { field: String }").expect("should parse");
    let errors = validate(&schema, &document);
    assert_eq!(
        messages(&errors),
        vec!["The \"Extra\" definition is not executable."],
    );
}

#[test]
fn invalid_schema_is_reported_instead() {
    let schema = build_schema("type Foo { field: String }").expect("schema should build");
    let document = parse("{ field }").expect("query should parse");
    let errors = validate(&schema, &document);
    assert_eq!(messages(&errors), vec!["Query root type must be provided."]);
}

#[test]
fn stops_at_the_error_limit() {
    let schema = test_schema();
    let document = parse("{ a b c d }").expect("query should parse");
    let errors = validate_with_rules(
        &schema,
        &document,
        vec![Box::new(FieldsOnCorrectTypeRule)],
        ValidationOptions { max_errors: 2 },
    );
    assert_eq!(
        messages(&errors),
        vec![
            "Cannot query field \"a\" on type \"QueryRoot\".",
            "Cannot query field \"b\" on type \"QueryRoot\".",
            "Too many validation errors, error limit reached. Validation aborted.",
        ],
    );
}

#[test]
fn specified_rules_list_every_validation_rule() {
    assert_eq!(specified_rules().len(), 26);
}

const REPEATED_RUN_QUERY: &str = r#"
{
  dog { ...DogName ...DogBarks unknownField }
  pet { ... on Dog { ...DogName ...DogBarks } }
  cat { ...CatCycle }
}
fragment DogName on Dog { x: name }
fragment DogBarks on Dog { x: barks }
fragment CatCycle on Cat { ...CatCycle }
"#;

#[test]
fn repeated_validation_reports_the_same_errors() {
    let schema = test_schema();
    let document = parse(REPEATED_RUN_QUERY).expect("query should parse");

    let first = validate(&schema, &document);
    let second = validate(&schema, &document);

    assert_eq!(first, second);
    let messages = messages(&first);
    let unknown_field = "Cannot query field \"unknownField\" on type \"Dog\".";
    assert!(messages.iter().any(|message| message.starts_with(unknown_field)));
    assert!(messages.contains(&"Cannot spread fragment \"CatCycle\" within itself."));
    let conflicts = messages
        .iter()
        .filter(|message| {
            message.starts_with(
                "Fields \"x\" conflict because \"name\" and \"barks\" are different fields.",
            )
        })
        .count();
    // The second pair of spreads under `pet` is already compared.
    assert_eq!(conflicts, 1);
}

#[test]
fn fresh_rule_sets_report_the_same_errors() {
    let schema = test_schema();
    let document = parse(REPEATED_RUN_QUERY).expect("query should parse");

    let first = validate_with_rules(
        &schema,
        &document,
        specified_rules(),
        ValidationOptions::default(),
    );
    let second = validate_with_rules(
        &schema,
        &document,
        specified_rules(),
        ValidationOptions::default(),
    );

    assert!(!first.is_empty());
    assert_eq!(first, second);
    assert_eq!(first, validate(&schema, &document));
}
