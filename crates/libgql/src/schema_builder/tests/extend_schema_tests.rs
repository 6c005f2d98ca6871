use crate::error::SchemaBuildError;
use crate::schema::Schema;
use crate::schema_builder::BuildSchemaOptions;
use crate::schema_builder::build_schema;
use crate::schema_builder::extend_schema;
use crate::types::GraphQLType;
use crate::utilities::print_schema;
use libgql_parser::parse;

type Result<T> = std::result::Result<T, SchemaBuildError>;

fn extend(schema: &Schema, sdl: &str) -> Result<Schema> {
    extend_schema(schema, &parse(sdl)?, BuildSchemaOptions::default())
}

fn base_schema() -> Schema {
    build_schema(concat!(
        "type Query { foo: Foo }\n",
        "type Foo implements Node { id: ID! name: String }\n",
        "interface Node { id: ID! }\n",
        "union Result = Foo\n",
        "enum Color { RED }\n",
        "input Filter { name: String }\n",
    ))
    .expect("base schema builds")
}

#[test]
fn extending_with_an_empty_document_preserves_the_schema() -> Result<()> {
    let base = base_schema();
    let extended = extend(&base, "")?;

    assert_eq!(print_schema(&extended), print_schema(&base));
    Ok(())
}

#[test]
fn object_fields_are_added_without_touching_the_base() -> Result<()> {
    let base = base_schema();
    let extended = extend(&base, "extend type Foo { age: Int }")?;

    let foo = |schema: &Schema| {
        schema
            .get_type("Foo")
            .and_then(GraphQLType::as_object)
            .map(|foo| foo.fields().len())
    };
    assert_eq!(foo(&base), Some(2));
    assert_eq!(foo(&extended), Some(3));
    Ok(())
}

#[test]
fn members_values_and_input_fields_are_added() -> Result<()> {
    let extended = extend(
        &base_schema(),
        concat!(
            "type Bar { id: ID! }\n",
            "extend union Result = Bar\n",
            "extend enum Color { BLUE }\n",
            "extend input Filter { limit: Int }\n",
        ),
    )?;

    let result = extended.get_type("Result").and_then(GraphQLType::as_union).expect("union");
    assert_eq!(result.types(), ["Foo".to_string(), "Bar".to_string()]);
    let color = extended.get_type("Color").and_then(GraphQLType::as_enum).expect("enum");
    assert!(color.get_value("BLUE").is_some());
    let filter = extended
        .get_type("Filter")
        .and_then(GraphQLType::as_input_object)
        .expect("input object");
    assert!(filter.get_field("limit").is_some());
    Ok(())
}

#[test]
fn new_interface_implementations_are_tracked() -> Result<()> {
    let extended = extend(
        &base_schema(),
        concat!(
            "type Bar implements Node { id: ID! }\n",
            "extend type Query { bar: Bar }\n",
        ),
    )?;

    let implementations = extended.get_implementations("Node");
    assert_eq!(implementations.objects, vec!["Foo".to_string(), "Bar".to_string()]);
    Ok(())
}

#[test]
fn schema_extension_adds_root_types() -> Result<()> {
    let extended = extend(
        &base_schema(),
        concat!(
            "type Mutation { doIt: Boolean }\n",
            "extend schema { mutation: Mutation }\n",
        ),
    )?;

    assert_eq!(extended.mutation_type().map(|mutation| mutation.name()), Some("Mutation"));
    assert_eq!(extended.get_extension_ast_nodes().len(), 1);
    Ok(())
}

#[test]
fn extending_an_unknown_type_fails() {
    let result = extend(&base_schema(), "extend type Missing { a: Int }");

    let Err(SchemaBuildError::InvalidSdl { errors }) = result else {
        panic!("expected InvalidSdl");
    };
    assert_eq!(
        errors[0].message(),
        "Cannot extend type \"Missing\" because it is not defined.",
    );
}

#[test]
fn extension_kind_must_match() {
    let document = parse("extend input Foo { a: Int }").expect("parses");
    let options = BuildSchemaOptions::new().assume_valid_sdl(true);

    let result = extend_schema(&base_schema(), &document, options);

    assert_eq!(
        result.err(),
        Some(SchemaBuildError::ExtensionKindMismatch {
            type_name: "Foo".to_string(),
            expected_kind: "input object",
        }),
    );
}

#[test]
fn redefining_an_existing_type_fails() {
    let result = extend(&base_schema(), "type Foo { other: Int }");

    let Err(SchemaBuildError::InvalidSdl { errors }) = result else {
        panic!("expected InvalidSdl");
    };
    assert_eq!(
        errors[0].message(),
        "Type \"Foo\" already exists in the schema. It cannot also be defined in this type \
         definition.",
    );
}

#[test]
fn resolvers_can_be_attached_to_existing_fields() -> Result<()> {
    let options = BuildSchemaOptions::new().resolve_with("Query", "foo", |_| Ok("x".into()));
    let extended = extend_schema(&base_schema(), &parse("")?, options)?;

    let foo = extended.query_type().and_then(|query| query.get_field("foo")).expect("field");
    assert!(foo.get_resolver().is_some());
    Ok(())
}
