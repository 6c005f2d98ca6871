use crate::execution::ExecutionArgs;
use crate::execution::execute;
use crate::execution::tests::messages;
use crate::execution::tests::run;
use crate::execution::tests::schema;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::IsTypeOf;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::TypeResolver;
use crate::types::UnionType;
use crate::value::FieldValue;
use libgql_parser::parse;
use serde_json::json;

const PETS_SDL: &str = concat!(
    "type Query { pets: [Pet] pet: Pet search: SearchResult }\n",
    "interface Pet { name: String }\n",
    "type Dog implements Pet { name: String barks: Boolean }\n",
    "type Cat implements Pet { name: String meows: Boolean }\n",
    "union SearchResult = Dog\n",
);

const PETS_QUERY: &str = "{ pets { name ... on Dog { barks } ... on Cat { meows } } }";

mod default_resolution {
    use super::*;

    #[tokio::test]
    async fn typename_property_picks_the_runtime_type() {
        let schema = schema(PETS_SDL);
        let root = json!({
            "pets": [
                { "__typename": "Dog", "name": "Odie", "barks": true },
                { "__typename": "Cat", "name": "Garfield", "meows": false },
            ],
        });

        let result = run(&schema, PETS_QUERY, root).await;

        assert!(result.errors.is_empty());
        assert_eq!(
            result.data,
            Some(json!({
                "pets": [
                    { "name": "Odie", "barks": true },
                    { "name": "Garfield", "meows": false },
                ],
            })),
        );
    }

    #[tokio::test]
    async fn type_tag_picks_the_runtime_type() {
        let schema = schema(PETS_SDL);
        let root = FieldValue::object([(
            "pet",
            FieldValue::from(json!({ "name": "Odie", "barks": true })).with_type("Dog"),
        )]);

        let result = run(&schema, "{ pet { __typename name } }", root).await;

        assert_eq!(result.data, Some(json!({ "pet": { "__typename": "Dog", "name": "Odie" } })));
    }

    #[tokio::test]
    async fn unresolvable_value_reports_how_to_fix_it() {
        let schema = schema(PETS_SDL);

        let result = run(&schema, "{ pet { name } }", json!({ "pet": { "name": "?" } })).await;

        assert_eq!(result.data, Some(json!({ "pet": null })));
        assert_eq!(
            messages(&result),
            vec![
                "Abstract type \"Pet\" must resolve to an Object type at runtime for field \
                 \"Query.pet\". Either the \"Pet\" type should provide a \"resolveType\" \
                 function or each possible type should provide an \"isTypeOf\" function.",
            ],
        );
    }

    #[tokio::test]
    async fn unknown_type_name_is_reported() {
        let schema = schema(PETS_SDL);
        let root = json!({ "pet": { "__typename": "Bird" } });

        let result = run(&schema, "{ pet { name } }", root).await;

        assert_eq!(
            messages(&result),
            vec![
                "Abstract type \"Pet\" was resolved to a type \"Bird\" that does not exist \
                 inside the schema.",
            ],
        );
    }

    #[tokio::test]
    async fn type_outside_the_union_is_reported() {
        let schema = schema(PETS_SDL);
        let root = json!({ "search": { "__typename": "Cat" } });

        let result = run(&schema, "{ search { __typename } }", root).await;

        assert_eq!(result.data, Some(json!({ "search": null })));
        assert_eq!(
            messages(&result),
            vec!["Runtime Object type \"Cat\" is not a possible type for \"SearchResult\"."],
        );
    }
}

mod custom_resolution {
    use super::*;

    fn shapes_schema(union_type: UnionType) -> Schema {
        let circle = ObjectType::new("Circle")
            .field(Field::new("radius", TypeRef::named("Int")))
            .is_type_of(IsTypeOf::sync(|args| !args.value.property("radius").is_null()));
        let square = ObjectType::new("Square")
            .field(Field::new("side", TypeRef::named("Int")))
            .is_type_of(IsTypeOf::sync(|args| !args.value.property("side").is_null()));
        let query = ObjectType::new("Query")
            .field(Field::new("shapes", TypeRef::List(Box::new(TypeRef::named("Shape")))));
        Schema::new(
            SchemaConfig::new()
                .query(query)
                .add_type(circle)
                .add_type(square)
                .add_type(union_type),
        )
        .expect("schema builds")
    }

    const SHAPES_QUERY: &str =
        "{ shapes { __typename ... on Circle { radius } ... on Square { side } } }";

    #[tokio::test]
    async fn is_type_of_checks_are_probed_without_a_resolver() {
        let schema = shapes_schema(UnionType::new("Shape").member("Circle").member("Square"));
        let root = json!({ "shapes": [{ "side": 2 }, { "radius": 1 }] });

        let result = run(&schema, SHAPES_QUERY, root).await;

        assert!(result.errors.is_empty());
        assert_eq!(
            result.data,
            Some(json!({
                "shapes": [
                    { "__typename": "Square", "side": 2 },
                    { "__typename": "Circle", "radius": 1 },
                ],
            })),
        );
    }

    #[tokio::test]
    async fn union_resolve_type_takes_precedence() {
        let shape = UnionType::new("Shape")
            .member("Circle")
            .member("Square")
            .resolve_type(TypeResolver::sync(|args| {
                args.value.property("kind").to_json()?.as_str().map(str::to_string)
            }));
        let schema = shapes_schema(shape);
        let root = json!({ "shapes": [{ "kind": "Circle", "radius": 3 }] });

        let result = run(&schema, SHAPES_QUERY, root).await;

        assert_eq!(
            result.data,
            Some(json!({ "shapes": [{ "__typename": "Circle", "radius": 3 }] })),
        );
    }

    #[tokio::test]
    async fn failed_is_type_of_check_is_an_error() {
        let shape = UnionType::new("Shape")
            .member("Circle")
            .member("Square")
            .resolve_type(TypeResolver::sync(|_| Some("Circle".to_string())));
        let schema = shapes_schema(shape);
        let root = json!({ "shapes": [{ "side": 4 }] });

        let result = run(&schema, SHAPES_QUERY, root).await;

        assert_eq!(result.data, Some(json!({ "shapes": [null] })));
        assert_eq!(
            messages(&result),
            vec!["Expected value of type \"Circle\" but got: { side: 4 }."],
        );
    }

    #[tokio::test]
    async fn execution_wide_type_resolver_applies_to_interfaces() {
        let schema = schema(PETS_SDL);
        let document = parse("{ pet { name ... on Cat { meows } } }").unwrap();
        let resolver = TypeResolver::sync(|args| {
            assert_eq!(args.abstract_type, "Pet");
            Some("Cat".to_string())
        });

        let result = execute(
            ExecutionArgs::new(&schema, &document)
                .root_value(json!({ "pet": { "name": "Tom", "meows": true } }))
                .type_resolver(resolver),
        )
        .await;

        assert_eq!(result.data, Some(json!({ "pet": { "name": "Tom", "meows": true } })));
    }

    #[tokio::test]
    async fn interface_resolve_type_is_used() {
        let pet = InterfaceType::new("Pet")
            .field(Field::new("name", TypeRef::named("String")))
            .resolve_type(TypeResolver::sync(|_| Some("Dog".to_string())));
        let dog = ObjectType::new("Dog")
            .interface("Pet")
            .field(Field::new("name", TypeRef::named("String")));
        let query = ObjectType::new("Query").field(Field::new("pet", TypeRef::named("Pet")));
        let schema = Schema::new(SchemaConfig::new().query(query).add_type(pet).add_type(dog))
            .expect("schema builds");

        let result = run(&schema, "{ pet { __typename name } }", json!({ "pet": { "name": "Rex" } }))
            .await;

        assert_eq!(result.data, Some(json!({ "pet": { "__typename": "Dog", "name": "Rex" } })));
    }
}
