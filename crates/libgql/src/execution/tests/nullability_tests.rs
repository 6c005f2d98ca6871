use crate::error::ErrorLocation;
use crate::error::FieldError;
use crate::error::PathSegment;
use crate::execution::tests::data_text;
use crate::execution::tests::messages;
use crate::execution::tests::paths;
use crate::execution::tests::run;
use crate::execution::tests::schema;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::types::Field;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::value::FieldValue;
use serde_json::json;

fn key(name: &str) -> PathSegment {
    PathSegment::from(name)
}

fn index(idx: usize) -> PathSegment {
    PathSegment::from(idx)
}

mod resolver_errors {
    use super::*;

    fn failing_schema(failing_type: TypeRef) -> Schema {
        let query = ObjectType::new("Query")
            .field(Field::new("fails", failing_type).resolve_with(|_| Err(FieldError::new("boom"))))
            .field(Field::new("works", TypeRef::named("String")).resolve_with(|_| Ok("ok".into())));
        Schema::new(SchemaConfig::new().query(query)).expect("schema builds")
    }

    #[tokio::test]
    async fn nullable_field_error_becomes_null_beside_sibling_data() {
        let schema = failing_schema(TypeRef::named("String"));

        let result = run(&schema, "{ fails works }", FieldValue::Null).await;

        assert_eq!(data_text(&result), r#"{"fails":null,"works":"ok"}"#);
        assert_eq!(messages(&result), vec!["boom"]);
        assert_eq!(paths(&result), vec![vec![key("fails")]]);
        assert_eq!(result.errors[0].locations(), &[ErrorLocation { line: 1, column: 3 }]);
    }

    #[tokio::test]
    async fn non_null_field_error_nulls_the_whole_response() {
        let schema = failing_schema(TypeRef::named_non_null("String"));

        let result = run(&schema, "{ works fails }", FieldValue::Null).await;

        assert_eq!(result.data, Some(json!(null)));
        assert_eq!(messages(&result), vec!["boom"]);
    }

    #[tokio::test]
    async fn field_error_extensions_are_kept() {
        let query = ObjectType::new("Query").field(
            Field::new("fails", TypeRef::named("String"))
                .resolve_with(|_| Err(FieldError::new("denied").with_extension("code", "FORBIDDEN"))),
        );
        let schema = Schema::new(SchemaConfig::new().query(query)).expect("schema builds");

        let result = run(&schema, "{ fails }", FieldValue::Null).await;

        assert_eq!(
            result.to_json()["errors"][0]["extensions"],
            json!({ "code": "FORBIDDEN" }),
        );
    }
}

mod propagation {
    use super::*;

    const SDL: &str = concat!(
        "type Query { obj: Obj strictObj: Obj! items: [Int] strictItems: [Int!] }\n",
        "type Obj { required: String! other: String }\n",
    );

    #[tokio::test]
    async fn null_in_non_null_field_nulls_nearest_nullable_parent() {
        let schema = schema(SDL);
        let root = json!({ "obj": { "other": "x" } });

        let result = run(&schema, "{ obj { other required } }", root).await;

        assert_eq!(result.data, Some(json!({ "obj": null })));
        assert_eq!(
            messages(&result),
            vec!["Cannot return null for non-nullable field Obj.required."],
        );
        assert_eq!(paths(&result), vec![vec![key("obj"), key("required")]]);
    }

    #[tokio::test]
    async fn propagation_passes_through_non_null_parents() {
        let schema = schema(SDL);
        let root = json!({ "strictObj": { "other": "x" }, "items": [1] });

        let result = run(&schema, "{ items strictObj { required } }", root).await;

        assert_eq!(result.data, Some(json!(null)));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(paths(&result), vec![vec![key("strictObj"), key("required")]]);
    }

    #[tokio::test]
    async fn invalid_list_item_becomes_null() {
        let schema = schema(SDL);
        let root = json!({ "items": [1, "x", 3] });

        let result = run(&schema, "{ items }", root).await;

        assert_eq!(result.data, Some(json!({ "items": [1, null, 3] })));
        assert_eq!(paths(&result), vec![vec![key("items"), index(1)]]);
    }

    #[tokio::test]
    async fn null_item_in_list_of_non_null_nulls_the_list() {
        let schema = schema(SDL);
        let root = json!({ "strictItems": [1, null] });

        let result = run(&schema, "{ strictItems }", root).await;

        assert_eq!(result.data, Some(json!({ "strictItems": null })));
        assert_eq!(
            messages(&result),
            vec!["Cannot return null for non-nullable field Query.strictItems."],
        );
        assert_eq!(paths(&result), vec![vec![key("strictItems"), index(1)]]);
    }

    #[tokio::test]
    async fn non_list_value_for_list_field_is_an_error() {
        let schema = schema(SDL);

        let result = run(&schema, "{ items }", json!({ "items": 5 })).await;

        assert_eq!(result.data, Some(json!({ "items": null })));
        assert_eq!(
            messages(&result),
            vec!["Expected Iterable, but did not find one for field \"Query.items\"."],
        );
    }

    #[tokio::test]
    async fn invalid_scalar_value_reports_serialization_error() {
        let schema = schema(SDL);

        let result = run(&schema, "{ obj { other } }", json!({ "obj": { "other": [1] } })).await;

        assert_eq!(result.data, Some(json!({ "obj": { "other": null } })));
        assert_eq!(paths(&result), vec![vec![key("obj"), key("other")]]);
    }
}
