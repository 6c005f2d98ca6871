use crate::error::ErrorLocation;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::MAX_VARIABLE_ERRORS;
use crate::execution::execute;
use crate::execution::get_variable_values;
use crate::execution::tests::messages;
use crate::execution::tests::schema;
use crate::schema::Schema;
use crate::types::FieldResolver;
use crate::value::FieldValue;
use crate::value::Variables;
use libgql_parser::ast;
use libgql_parser::parse;
use serde_json::json;

const SDL: &str = concat!(
    "type Query {\n",
    "  echo(value: String = \"default\"): String\n",
    "  int(value: Int): Int\n",
    "  input(value: Point): String\n",
    "  required(value: Int!): Int\n",
    "}\n",
    "input Point { x: Int! y: Int = 0 }\n",
);

/// Executes with a resolver that hands back the `value` argument as JSON
/// text, so tests can see exactly what coercion produced.
async fn run_with_variables(query: &str, variables: serde_json::Value) -> ExecutionResult {
    let schema = schema(SDL);
    let document = parse(query).expect("query parses");
    let variables = match variables {
        serde_json::Value::Object(map) => map,
        _ => Variables::new(),
    };
    let resolver = FieldResolver::sync(|args| {
        Ok(match args.arg("value") {
            Some(serde_json::Value::String(value)) => FieldValue::from(value.as_str()),
            Some(serde_json::Value::Number(value)) => FieldValue::from(serde_json::Value::Number(value.clone())),
            Some(value) => FieldValue::from(value.to_string()),
            None => FieldValue::from("<absent>"),
        })
    });
    execute(
        ExecutionArgs::new(&schema, &document)
            .variable_values(variables)
            .field_resolver(resolver),
    )
    .await
}

fn variable_definitions(document: &ast::Document) -> &[ast::VariableDefinition] {
    &document.operations().next().expect("one operation").variable_definitions
}

mod provided_values {
    use super::*;

    #[tokio::test]
    async fn variables_flow_into_arguments() {
        let result = run_with_variables(
            "query ($v: String, $n: Int) { echo(value: $v) int(value: $n) }",
            json!({ "v": "hi", "n": 3 }),
        )
        .await;

        assert_eq!(result.data, Some(json!({ "echo": "hi", "int": 3 })));
    }

    #[tokio::test]
    async fn variable_default_applies_when_omitted() {
        let result =
            run_with_variables(r#"query ($v: String = "from var") { echo(value: $v) }"#, json!({}))
                .await;

        assert_eq!(result.data, Some(json!({ "echo": "from var" })));
    }

    #[tokio::test]
    async fn unprovided_variable_falls_back_to_argument_default() {
        let result = run_with_variables("query ($v: String) { echo(value: $v) }", json!({})).await;

        assert_eq!(result.data, Some(json!({ "echo": "default" })));
    }

    #[tokio::test]
    async fn explicit_null_variable_overrides_argument_default() {
        let result =
            run_with_variables("query ($v: String) { echo(value: $v) }", json!({ "v": null })).await;

        assert_eq!(result.data, Some(json!({ "echo": "null" })));
    }

    #[tokio::test]
    async fn input_object_defaults_are_filled_in() {
        let result = run_with_variables(
            "query ($p: Point) { input(value: $p) }",
            json!({ "p": { "x": 1 } }),
        )
        .await;

        assert_eq!(result.data, Some(json!({ "input": r#"{"x":1,"y":0}"# })));
    }
}

mod invalid_values {
    use super::*;

    #[tokio::test]
    async fn missing_required_variable_prevents_execution() {
        let result = run_with_variables("query ($x: Int!) { int(value: $x) }", json!({})).await;

        assert_eq!(result.data, None);
        assert_eq!(
            messages(&result),
            vec!["Variable \"$x\" of required type \"Int!\" was not provided."],
        );
        assert_eq!(result.errors[0].locations(), &[ErrorLocation { line: 1, column: 8 }]);
    }

    #[tokio::test]
    async fn null_for_non_null_variable_is_rejected() {
        let result =
            run_with_variables("query ($x: Int!) { int(value: $x) }", json!({ "x": null })).await;

        assert_eq!(result.data, None);
        assert_eq!(
            messages(&result),
            vec!["Variable \"$x\" of non-null type \"Int!\" must not be null."],
        );
    }

    #[tokio::test]
    async fn uncoercible_variable_reports_scalar_error() {
        let result =
            run_with_variables("query ($x: Int) { int(value: $x) }", json!({ "x": "abc" })).await;

        assert_eq!(result.data, None);
        assert_eq!(
            messages(&result),
            vec![
                "Variable \"$x\" got invalid value \"abc\"; Int cannot represent non-integer \
                 value: \"abc\"",
            ],
        );
    }

    #[tokio::test]
    async fn every_invalid_variable_is_reported() {
        let result = run_with_variables(
            "query ($a: Int!, $b: Int!) { a: int(value: $a) b: int(value: $b) }",
            json!({}),
        )
        .await;

        assert_eq!(result.errors.len(), 2);
    }

    #[tokio::test]
    async fn missing_required_argument_errors_the_field() {
        let result = run_with_variables("query ($x: Int) { required(value: $x) }", json!({})).await;

        assert_eq!(result.data, Some(json!({ "required": null })));
        assert_eq!(
            messages(&result),
            vec![
                "Argument \"value\" of required type \"Int!\" was provided the variable \"$x\" \
                 which was not provided a runtime value.",
            ],
        );
    }
}

mod error_limit {
    use super::*;

    fn schema_for_limit() -> Schema {
        schema("type Query { a: Int }")
    }

    #[test]
    fn variable_errors_stop_at_the_limit() {
        let schema = schema_for_limit();
        let definitions = (0..=MAX_VARIABLE_ERRORS)
            .map(|idx| format!("$v{idx}: Int!"))
            .collect::<Vec<_>>()
            .join(", ");
        let document = parse(&format!("query ({definitions}) {{ a }}")).unwrap();

        let errors =
            get_variable_values(&schema, variable_definitions(&document), &Variables::new())
                .unwrap_err();

        assert_eq!(errors.len(), MAX_VARIABLE_ERRORS + 1);
        assert_eq!(
            errors.last().map(|error| error.message()),
            Some("Too many errors processing variables, error limit reached. Execution aborted."),
        );
    }
}
