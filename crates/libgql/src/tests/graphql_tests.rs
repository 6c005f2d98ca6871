use crate::GraphQLArgs;
use crate::build_schema;
use crate::graphql;
use crate::schema::Schema;
use crate::types::FieldResolver;
use crate::value::FieldValue;
use serde_json::json;

fn schema() -> Schema {
    build_schema(concat!(
        "type Query { hello(name: String = \"world\"): String count: Int! }\n",
        "type Mutation { reset: Int }\n",
    ))
    .expect("schema builds")
}

fn greeter() -> FieldResolver {
    FieldResolver::sync(|args| match args.info.field_name {
        "hello" => {
            let name = args.arg("name").and_then(|name| name.as_str()).unwrap_or("?");
            Ok(FieldValue::from(format!("hello, {name}")))
        },
        _ => Ok(args.source.property(args.info.field_name)),
    })
}

mod phases {
    use super::*;

    #[tokio::test]
    async fn valid_request_executes() {
        let schema = schema();

        let result = graphql(GraphQLArgs::new(&schema, "{ hello }").field_resolver(greeter())).await;

        assert_eq!(result.to_json(), json!({ "data": { "hello": "hello, world" } }));
    }

    #[tokio::test]
    async fn syntax_error_is_returned_without_data() {
        let schema = schema();

        let result = graphql(GraphQLArgs::new(&schema, "{ hello")).await;

        assert_eq!(result.data, None);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].message().starts_with("Syntax Error:"));
        assert_eq!(result.errors[0].locations()[0].line, 1);
    }

    #[tokio::test]
    async fn validation_errors_are_returned_without_data() {
        let schema = schema();

        let result = graphql(GraphQLArgs::new(&schema, "{ hello nope }")).await;

        assert_eq!(result.data, None);
        assert_eq!(
            result.errors.iter().map(|error| error.message()).collect::<Vec<_>>(),
            vec!["Cannot query field \"nope\" on type \"Query\"."],
        );
    }

    #[tokio::test]
    async fn execution_errors_come_back_with_data() {
        let schema = schema();

        let result = graphql(GraphQLArgs::new(&schema, "{ hello count }").field_resolver(greeter()))
            .await;

        assert_eq!(result.data, Some(json!(null)));
        assert_eq!(
            result.errors[0].message(),
            "Cannot return null for non-nullable field Query.count.",
        );
    }
}

mod request_options {
    use super::*;

    #[tokio::test]
    async fn variables_and_operation_name_are_forwarded() {
        let schema = schema();
        let variables = json!({ "who": "ada" }).as_object().cloned().unwrap_or_default();

        let result = graphql(
            GraphQLArgs::new(
                &schema,
                "query Other { count } query Greet($who: String) { hello(name: $who) }",
            )
            .operation_name("Greet")
            .variable_values(variables)
            .field_resolver(greeter()),
        )
        .await;

        assert_eq!(result.data, Some(json!({ "hello": "hello, ada" })));
    }

    #[tokio::test]
    async fn root_value_feeds_default_resolvers() {
        let schema = schema();

        let result =
            graphql(GraphQLArgs::new(&schema, "{ count }").root_value(json!({ "count": 7 }))).await;

        assert_eq!(result.data, Some(json!({ "count": 7 })));
    }
}
