use crate::schema_builder::build_schema;
use crate::utilities::print_introspection_schema;
use crate::utilities::print_schema;

const SDL: &str = r#"type Query {
  pet(id: ID!): Pet
  search(filter: Filter = {limit: 10}): [Result]
}

interface Pet {
  name: String
}

union Result = Dog

type Dog implements Pet {
  name: String
  born: Date
  nickname: String @deprecated
}

scalar Date @specifiedBy(url: "https://example.com/date")

input Filter {
  limit: Int = 10
  color: Color
}

enum Color {
  RED
  GREEN @deprecated(reason: "Use RED")
}"#;

#[test]
fn printed_schema_matches_the_source() {
    let schema = build_schema(SDL).unwrap();

    assert_eq!(print_schema(&schema), SDL);
}

#[test]
fn printing_is_stable_after_a_rebuild() {
    let printed = print_schema(&build_schema(SDL).unwrap());
    let reprinted = print_schema(&build_schema(&printed).unwrap());

    assert_eq!(printed, reprinted);
}

#[test]
fn custom_directives_print_before_types() {
    let sdl = concat!(
        "directive @tag(name: String!) repeatable on FIELD_DEFINITION | OBJECT\n",
        "\n",
        "type Query {\n",
        "  a: Int\n",
        "}",
    );
    let schema = build_schema(sdl).unwrap();

    assert_eq!(print_schema(&schema), sdl);
}

#[test]
fn uncommon_root_names_print_a_schema_block() {
    let schema = build_schema("schema { query: Root } type Root { a: Int }").unwrap();

    assert_eq!(
        print_schema(&schema),
        "schema {\n  query: Root\n}\n\ntype Root {\n  a: Int\n}",
    );
}

#[test]
fn descriptions_print_as_block_strings() {
    let sdl = concat!(
        "\"\"\"The root\"\"\"\n",
        "type Query {\n",
        "  \"\"\"A number\"\"\"\n",
        "  a(\n",
        "    \"\"\"How many\"\"\"\n",
        "    n: Int\n",
        "  ): Int\n",
        "\n",
        "  \"\"\"\n",
        "  Two\n",
        "  lines\n",
        "  \"\"\"\n",
        "  b: Int\n",
        "}",
    );
    let schema = build_schema(sdl).unwrap();

    assert_eq!(print_schema(&schema), sdl);
}

#[test]
fn introspection_schema_holds_only_built_ins() {
    let schema = build_schema("type Query { a: Int }").unwrap();
    let printed = print_introspection_schema(&schema);

    assert!(printed.starts_with("directive @include(\n"));
    assert!(printed.contains("type __Schema {"));
    assert!(printed.contains("enum __TypeKind {"));
    assert!(!printed.contains("type Query"));
}
