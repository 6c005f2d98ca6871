use crate::GraphQLArgs;
use crate::graphql;
use crate::introspection::INTROSPECTION_TYPE_NAMES;
use crate::introspection::is_introspection_type;
use crate::schema_builder::build_schema;
use serde_json::Value as JsonValue;
use serde_json::json;

const SDL: &str = r#"
"""The entry point"""
type Query {
  pet(id: ID!): Pet
  search(filter: Filter = {limit: 10}): [Result]
}

interface Pet {
  name: String
}

union Result = Dog | Cat

type Dog implements Pet {
  name: String
  born: Date
  nickname: String @deprecated
}

type Cat implements Pet {
  name: String
}

scalar Date @specifiedBy(url: "https://example.com/date")

input Filter {
  limit: Int = 10
  color: Color
}

enum Color {
  RED
  GREEN @deprecated(reason: "Use RED")
}

directive @tag(name: String!) repeatable on OBJECT | FIELD_DEFINITION
"#;

async fn introspect(query: &str) -> JsonValue {
    let schema = build_schema(SDL).unwrap();
    let result = graphql(GraphQLArgs::new(&schema, query)).await;
    assert!(result.errors.is_empty(), "{:?}", result.errors);
    result.data.unwrap_or_default()
}

mod types {
    use super::*;

    #[tokio::test]
    async fn object_fields_and_type_wrappers() {
        let data = introspect(
            r#"{
                __type(name: "Query") {
                    kind
                    name
                    description
                    fields {
                        name
                        args { name defaultValue type { kind name ofType { kind name } } }
                        type { kind name ofType { name } }
                    }
                }
            }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({
                "__type": {
                    "kind": "OBJECT",
                    "name": "Query",
                    "description": "The entry point",
                    "fields": [
                        {
                            "name": "pet",
                            "args": [{
                                "name": "id",
                                "defaultValue": null,
                                "type": {
                                    "kind": "NON_NULL",
                                    "name": null,
                                    "ofType": { "kind": "SCALAR", "name": "ID" },
                                },
                            }],
                            "type": { "kind": "INTERFACE", "name": "Pet", "ofType": null },
                        },
                        {
                            "name": "search",
                            "args": [{
                                "name": "filter",
                                "defaultValue": "{limit: 10}",
                                "type": {
                                    "kind": "INPUT_OBJECT",
                                    "name": "Filter",
                                    "ofType": null,
                                },
                            }],
                            "type": { "kind": "LIST", "name": null, "ofType": { "name": "Result" } },
                        },
                    ],
                },
            }),
        );
    }

    #[tokio::test]
    async fn deprecated_members_need_include_deprecated() {
        let data = introspect(
            r#"{
                dog: __type(name: "Dog") {
                    active: fields { name }
                    all: fields(includeDeprecated: true) { name isDeprecated deprecationReason }
                }
                color: __type(name: "Color") {
                    enumValues(includeDeprecated: true) { name deprecationReason }
                }
            }"#,
        )
        .await;

        assert_eq!(data["dog"]["active"], json!([{ "name": "name" }, { "name": "born" }]));
        assert_eq!(
            data["dog"]["all"][2],
            json!({
                "name": "nickname",
                "isDeprecated": true,
                "deprecationReason": "No longer supported",
            }),
        );
        assert_eq!(
            data["color"]["enumValues"],
            json!([
                { "name": "RED", "deprecationReason": null },
                { "name": "GREEN", "deprecationReason": "Use RED" },
            ]),
        );
    }

    #[tokio::test]
    async fn abstract_types_list_their_possible_types() {
        let data = introspect(
            r#"{
                pet: __type(name: "Pet") { possibleTypes { name } fields { name } }
                result: __type(name: "Result") { possibleTypes { name } fields { name } }
                dog: __type(name: "Dog") { interfaces { name } possibleTypes { name } }
            }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({
                "pet": {
                    "possibleTypes": [{ "name": "Dog" }, { "name": "Cat" }],
                    "fields": [{ "name": "name" }],
                },
                "result": {
                    "possibleTypes": [{ "name": "Dog" }, { "name": "Cat" }],
                    "fields": null,
                },
                "dog": { "interfaces": [{ "name": "Pet" }], "possibleTypes": null },
            }),
        );
    }

    #[tokio::test]
    async fn inputs_and_scalars() {
        let data = introspect(
            r#"{
                filter: __type(name: "Filter") {
                    inputFields { name defaultValue type { name } }
                }
                date: __type(name: "Date") { kind specifiedByURL }
                missing: __type(name: "Missing") { name }
            }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({
                "filter": {
                    "inputFields": [
                        { "name": "limit", "defaultValue": "10", "type": { "name": "Int" } },
                        { "name": "color", "defaultValue": null, "type": { "name": "Color" } },
                    ],
                },
                "date": { "kind": "SCALAR", "specifiedByURL": "https://example.com/date" },
                "missing": null,
            }),
        );
    }
}

mod schema {
    use super::*;

    #[tokio::test]
    async fn root_types_and_type_list() {
        let data = introspect(
            "{ __schema { __typename queryType { name } mutationType { name } types { name } } }",
        )
        .await;
        let schema = &data["__schema"];
        let names = schema["types"]
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|type_| type_["name"].as_str())
            .collect::<Vec<_>>();

        assert_eq!(schema["__typename"], json!("__Schema"));
        assert_eq!(schema["queryType"], json!({ "name": "Query" }));
        assert_eq!(schema["mutationType"], json!(null));
        for expected in ["Query", "Dog", "Cat", "Date", "String", "Boolean"] {
            assert!(names.contains(&expected), "missing {expected}");
        }
        for introspection_name in INTROSPECTION_TYPE_NAMES {
            assert!(names.contains(&introspection_name), "missing {introspection_name}");
        }
    }

    #[tokio::test]
    async fn directives_include_built_ins_and_custom() {
        let data = introspect(
            "{ __schema { directives { name isRepeatable locations args { name type { kind } } } } }",
        )
        .await;
        let directives = data["__schema"]["directives"].as_array().cloned().unwrap_or_default();

        let skip = directives.iter().find(|directive| directive["name"] == "skip").unwrap();
        assert_eq!(
            skip["locations"],
            json!(["FIELD", "FRAGMENT_SPREAD", "INLINE_FRAGMENT"]),
        );
        assert_eq!(skip["args"], json!([{ "name": "if", "type": { "kind": "NON_NULL" } }]));

        let tag = directives.iter().find(|directive| directive["name"] == "tag").unwrap();
        assert_eq!(tag["isRepeatable"], json!(true));
        assert_eq!(tag["locations"], json!(["OBJECT", "FIELD_DEFINITION"]));
    }
}

#[tokio::test]
async fn typename_resolves_to_the_runtime_type() {
    let data = introspect("{ __typename t: __type(name: \"Pet\") { __typename } }").await;

    assert_eq!(data, json!({ "__typename": "Query", "t": { "__typename": "__Type" } }));
}

#[test]
fn introspection_type_names_use_the_reserved_prefix() {
    assert!(INTROSPECTION_TYPE_NAMES.iter().all(|name| is_introspection_type(name)));
    assert!(!is_introspection_type("Query"));
}
