use crate::GraphQLParser;
use crate::GraphQLSyntaxError;
use crate::ParseOptions;
use crate::Source;
use crate::SourceLocation;
use crate::ast;
use crate::ast::DirectiveLocation;
use crate::ast::OperationType;
use crate::ast::TypeAnnotation;
use crate::parse;
use crate::parse_const_value;
use crate::parse_type;
use crate::parse_value;
use crate::parse_with_options;

type Result<T> = std::result::Result<T, GraphQLSyntaxError>;

fn parse_error(text: &str) -> GraphQLSyntaxError {
    parse(text).expect_err("expected a syntax error")
}

fn only_operation(doc: &ast::Document) -> &ast::OperationDefinition {
    let ops: Vec<_> = doc.operations().collect();
    assert_eq!(ops.len(), 1);
    ops[0]
}

fn field(selection: &ast::Selection) -> &ast::Field {
    match selection {
        ast::Selection::Field(field) => field,
        other => panic!("expected a field, got {other:?}"),
    }
}

fn only_type(doc: &ast::Document) -> &ast::TypeDefinition {
    match doc.definitions.as_slice() {
        [ast::Definition::Type(def)] => def,
        other => panic!("expected a single type definition, got {other:?}"),
    }
}

// =============================================================================
// Executable documents
// =============================================================================

#[test]
fn parses_shorthand_query() -> Result<()> {
    let doc = parse("{ hero { name } }")?;
    let op = only_operation(&doc);
    assert!(op.is_shorthand());
    assert_eq!(op.operation, OperationType::Query);

    let hero = field(&op.selection_set.selections[0]);
    assert_eq!(hero.name, "hero");
    let hero_selections = &hero.selection_set.as_ref().expect("hero has a selection set").selections;
    assert_eq!(field(&hero_selections[0]).name, "name");
    Ok(())
}

#[test]
fn parses_named_operation_with_variables() -> Result<()> {
    let doc = parse(
        "query Hero($episode: Episode = JEDI, $withFriends: Boolean! @deprecated) {\n\
         \x20 h: hero(episode: $episode) @include(if: $withFriends) { name }\n\
         }",
    )?;
    let op = only_operation(&doc);
    assert_eq!(op.name.as_deref(), Some("Hero"));
    assert!(!op.is_shorthand());

    let vars = &op.variable_definitions;
    assert_eq!(vars.len(), 2);
    assert_eq!(vars[0].name, "episode");
    assert_eq!(vars[0].var_type.innermost_name(), "Episode");
    assert!(!vars[0].var_type.is_non_null());
    assert!(matches!(
        &vars[0].default_value,
        Some(ast::Value::Enum { value, .. }) if value == "JEDI"
    ));
    assert!(vars[1].var_type.is_non_null());
    assert_eq!(vars[1].directives[0].name, "deprecated");

    let hero = field(&op.selection_set.selections[0]);
    assert_eq!(hero.alias.as_deref(), Some("h"));
    assert_eq!(hero.response_key(), "h");
    assert_eq!(hero.arguments[0].value.as_variable_name(), Some("episode"));
    let include = &hero.directives[0];
    assert_eq!(include.name, "include");
    assert_eq!(
        include.argument("if").and_then(|arg| arg.value.as_variable_name()),
        Some("withFriends"),
    );
    Ok(())
}

#[test]
fn parses_mutation_and_subscription() -> Result<()> {
    let doc = parse("mutation { like } subscription OnLike { liked }")?;
    let kinds: Vec<_> = doc.operations().map(|op| op.operation).collect();
    assert_eq!(kinds, vec![OperationType::Mutation, OperationType::Subscription]);
    Ok(())
}

#[test]
fn parses_fragments() -> Result<()> {
    let doc = parse(
        "{ ...Named ... on User { id } ... @skip(if: true) { name } }\n\
         fragment Named on Query { me { id } }",
    )?;
    let selections = &only_operation(&doc).selection_set.selections;
    match &selections[0] {
        ast::Selection::FragmentSpread(spread) => assert_eq!(spread.name, "Named"),
        other => panic!("expected a fragment spread, got {other:?}"),
    }
    match &selections[1] {
        ast::Selection::InlineFragment(inline) => {
            assert_eq!(
                inline.type_condition.as_ref().map(|cond| cond.name.as_str()),
                Some("User"),
            );
        },
        other => panic!("expected an inline fragment, got {other:?}"),
    }
    match &selections[2] {
        ast::Selection::InlineFragment(inline) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.directives[0].name, "skip");
        },
        other => panic!("expected an inline fragment, got {other:?}"),
    }

    let fragments: Vec<_> = doc.fragments().collect();
    assert_eq!(fragments.len(), 1);
    assert_eq!(fragments[0].name, "Named");
    assert_eq!(fragments[0].type_condition.name, "Query");
    Ok(())
}

#[test]
fn fragment_cannot_be_named_on() {
    let err = parse_error("fragment on on Query { id }");
    assert_eq!(err.description(), "Unexpected Name \"on\".");
}

// =============================================================================
// Values and types
// =============================================================================

#[test]
fn parses_value_literals() -> Result<()> {
    let value = parse_value(r#"{a: [1, 2.5, "s", """b""", true, null, ENUM, $var], b: {}}"#)?;
    let ast::Value::Object { fields, .. } = value else {
        panic!("expected an object value");
    };
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].name, "a");

    let ast::Value::List { values, .. } = &fields[0].value else {
        panic!("expected a list value");
    };
    let kinds: Vec<_> = values.iter().map(|value| value.kind_name()).collect();
    assert_eq!(kinds, vec![
        "IntValue",
        "FloatValue",
        "StringValue",
        "StringValue",
        "BooleanValue",
        "NullValue",
        "EnumValue",
        "Variable",
    ]);
    assert!(matches!(&values[3], ast::Value::String { value, block: true, .. } if value == "b"));
    assert!(matches!(&values[4], ast::Value::Boolean { value: true, .. }));
    assert!(values[5].is_null());
    Ok(())
}

#[test]
fn const_values_reject_variables() {
    let err = parse_const_value("[1, $x]").expect_err("variables are not constant");
    assert_eq!(err.description(), "Unexpected variable \"$x\" in constant value.");

    let err = parse_error("query ($a: Int = $b) { f }");
    assert_eq!(err.description(), "Unexpected variable \"$b\" in constant value.");
}

#[test]
fn parses_wrapped_types() -> Result<()> {
    let type_ann = parse_type("[[Int!]]!")?;
    assert_eq!(type_ann.innermost_name(), "Int");

    let TypeAnnotation::NonNull(outer) = &type_ann else {
        panic!("expected a non-null type");
    };
    let TypeAnnotation::List(list) = outer.inner.as_ref() else {
        panic!("expected a list type");
    };
    let TypeAnnotation::List(inner_list) = list.inner.as_ref() else {
        panic!("expected a nested list type");
    };
    assert!(inner_list.inner.is_non_null());
    Ok(())
}

#[test]
fn rejects_trailing_tokens_after_a_value() {
    let err = parse_value("1 2").expect_err("only one value is allowed");
    assert_eq!(err.description(), "Expected <EOF>, found Int \"2\".");
}

// =============================================================================
// Type-system documents
// =============================================================================

#[test]
fn parses_object_type_with_description_and_interfaces() -> Result<()> {
    let doc = parse(
        r#"
        """
        A person.
        """
        type Person implements & Node & Named @key(fields: "id") {
          "The id."
          id: ID!
          friends(first: Int = 10, after: String): [Person!]
        }
        "#,
    )?;
    let ast::TypeDefinition::Object(person) = only_type(&doc) else {
        panic!("expected an object type");
    };
    assert_eq!(person.name, "Person");
    let description = person.description.as_ref().expect("description");
    assert_eq!(description.value, "A person.");
    assert!(description.block);

    let interfaces: Vec<_> = person.interfaces.iter().map(|named| named.name.as_str()).collect();
    assert_eq!(interfaces, vec!["Node", "Named"]);
    assert_eq!(person.directives[0].name, "key");

    assert_eq!(person.fields.len(), 2);
    assert_eq!(
        person.fields[0].description.as_ref().map(|desc| desc.value.as_str()),
        Some("The id."),
    );
    let friends = &person.fields[1];
    assert_eq!(friends.arguments.len(), 2);
    assert_eq!(friends.arguments[0].name, "first");
    assert!(friends.arguments[0].default_value.is_some());
    assert_eq!(friends.field_type.innermost_name(), "Person");
    Ok(())
}

#[test]
fn parses_remaining_type_definitions() -> Result<()> {
    let doc = parse(
        "scalar Date @specifiedBy(url: \"https://example.com\")\n\
         interface Node { id: ID! }\n\
         union SearchResult = | Person | Droid\n\
         enum Color { RED GREEN @deprecated }\n\
         input Filter { term: String = \"x\", limit: Int! }\n\
         schema { query: Query mutation: Mutation }\n\
         directive @cached(ttl: Int) repeatable on FIELD_DEFINITION | OBJECT",
    )?;
    assert_eq!(doc.definitions.len(), 7);

    let keywords: Vec<_> = doc
        .definitions
        .iter()
        .filter_map(|def| match def {
            ast::Definition::Type(def) => Some(def.keyword()),
            _ => None,
        })
        .collect();
    assert_eq!(keywords, vec!["scalar", "interface", "union", "enum", "input"]);

    let ast::Definition::Type(ast::TypeDefinition::Union(union)) = &doc.definitions[2] else {
        panic!("expected a union");
    };
    let members: Vec<_> = union.types.iter().map(|named| named.name.as_str()).collect();
    assert_eq!(members, vec!["Person", "Droid"]);

    let ast::Definition::Type(ast::TypeDefinition::Enum(color)) = &doc.definitions[3] else {
        panic!("expected an enum");
    };
    assert_eq!(color.values.len(), 2);
    assert_eq!(color.values[1].directives[0].name, "deprecated");

    let ast::Definition::Schema(schema) = &doc.definitions[5] else {
        panic!("expected a schema definition");
    };
    assert_eq!(schema.operation_types[1].operation, OperationType::Mutation);
    assert_eq!(schema.operation_types[1].named_type.name, "Mutation");

    let ast::Definition::Directive(cached) = &doc.definitions[6] else {
        panic!("expected a directive definition");
    };
    assert!(cached.repeatable);
    assert_eq!(cached.locations, vec![
        DirectiveLocation::FieldDefinition,
        DirectiveLocation::Object,
    ]);
    Ok(())
}

#[test]
fn enum_values_cannot_be_reserved_words() {
    let err = parse_error("enum Bad { true }");
    assert_eq!(
        err.description(),
        "Name \"true\" is reserved and cannot be used for an enum value.",
    );
}

#[test]
fn unknown_directive_location() {
    let err = parse_error("directive @d on NOWHERE");
    assert_eq!(err.description(), "Unexpected Name \"NOWHERE\".");
}

#[test]
fn parses_extensions() -> Result<()> {
    let doc = parse(
        "extend schema @link { subscription: Subscription }\n\
         extend type Query { extra: Int }\n\
         extend union U = C\n\
         extend enum E @tagged",
    )?;
    assert!(matches!(&doc.definitions[0], ast::Definition::SchemaExtension(schema)
        if schema.directives.len() == 1 && schema.operation_types.len() == 1));
    assert!(matches!(&doc.definitions[1], ast::Definition::TypeExtension(ast::TypeDefinition::Object(obj))
        if obj.name == "Query" && obj.fields.len() == 1));
    assert!(matches!(&doc.definitions[2], ast::Definition::TypeExtension(ast::TypeDefinition::Union(_))));
    assert!(matches!(&doc.definitions[3], ast::Definition::TypeExtension(ast::TypeDefinition::Enum(_))));
    assert!(doc.definitions.iter().all(|def| !def.is_executable()));
    Ok(())
}

#[test]
fn empty_extensions_are_rejected() {
    assert_eq!(parse_error("extend type Foo").description(), "Unexpected <EOF>.");
    assert_eq!(parse_error("extend schema").description(), "Unexpected <EOF>.");
    assert_eq!(parse_error("extend thing Foo").description(), "Unexpected Name \"thing\".");
}

#[test]
fn descriptions_only_precede_type_system_definitions() {
    let err = parse_error("\"desc\" query { a }");
    assert_eq!(
        err.description(),
        "Unexpected description, descriptions are supported only on type definitions.",
    );
}

// =============================================================================
// Errors and options
// =============================================================================

#[test]
fn syntax_error_messages() {
    assert_eq!(parse_error("").to_string(), "Syntax Error: Unexpected <EOF>.");
    assert_eq!(parse_error("{").to_string(), "Syntax Error: Expected Name, found <EOF>.");
    assert_eq!(parse_error("{ a(b: ) }").description(), "Unexpected \")\".");
    assert_eq!(parse_error("notakeyword { a }").description(), "Unexpected Name \"notakeyword\".");
    assert_eq!(
        parse_error("query Q($v: Int) { a(x: 1 }").description(),
        "Expected Name, found \"}\".",
    );
}

#[test]
fn syntax_errors_carry_a_location() {
    let err = parse_error("{\n  a\n}}");
    assert_eq!(err.description(), "Unexpected \"}\".");
    assert_eq!(err.position(), 7);
    assert_eq!(err.location(), SourceLocation { line: 3, column: 2 });
    assert_eq!(
        err.print(),
        "Syntax Error: Unexpected \"}\".\n\nGraphQL request:3:2\n2 |   a\n3 | }}\n  |  ^",
    );
}

#[test]
fn attaches_locations_to_nodes() -> Result<()> {
    let doc = parse("{ abc }")?;
    let loc = doc.loc.as_ref().expect("document location");
    assert_eq!((loc.start, loc.end), (0, 7));

    let abc = field(&only_operation(&doc).selection_set.selections[0]);
    let loc = abc.loc.as_ref().expect("field location");
    assert_eq!((loc.start, loc.end), (2, 5));
    assert_eq!(loc.text(), "abc");
    assert_eq!(loc.start_location(), SourceLocation { line: 1, column: 3 });
    Ok(())
}

#[test]
fn no_location_option() -> Result<()> {
    let options = ParseOptions {
        no_location: true,
        ..ParseOptions::default()
    };
    let doc = parse_with_options(Source::new("{ abc(x: [1]) }"), options)?;
    assert!(doc.loc.is_none());
    let abc = field(&only_operation(&doc).selection_set.selections[0]);
    assert!(abc.loc.is_none());
    assert!(abc.arguments[0].value.loc().is_none());
    Ok(())
}

#[test]
fn max_tokens_option() {
    let options = ParseOptions {
        max_tokens: Some(3),
        ..ParseOptions::default()
    };
    let err = parse_with_options(Source::new("{ a b c }"), options)
        .expect_err("token limit exceeded");
    assert_eq!(err.description(), "Document contains more than 3 tokens. Parsing aborted.");

    let options = ParseOptions {
        max_tokens: Some(3),
        ..ParseOptions::default()
    };
    assert!(parse_with_options(Source::new("{ a }"), options).is_ok());
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = GraphQLParser::MAX_DEPTH + 10;
    let text = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let err = parse_value(&text).expect_err("nesting limit exceeded");
    assert!(err.description().contains("maximum nesting depth"));
}

#[test]
fn named_sources_appear_in_printed_errors() {
    let err = parse_with_options(
        Source::with_name("query {", "schema/queries.graphql"),
        ParseOptions::default(),
    )
    .expect_err("unterminated selection set");
    assert!(err.print().contains("schema/queries.graphql:1:8"));
}
