mod abstract_types_tests;
mod nullability_tests;
mod variables_tests;

use crate::error::PathSegment;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::execute;
use crate::schema::Schema;
use crate::schema_builder::build_schema;
use crate::value::FieldValue;
use libgql_parser::parse;

fn schema(sdl: &str) -> Schema {
    build_schema(sdl).expect("test schema builds")
}

async fn run(schema: &Schema, query: &str, root: impl Into<FieldValue>) -> ExecutionResult {
    let document = parse(query).expect("query parses");
    execute(ExecutionArgs::new(schema, &document).root_value(root)).await
}

fn messages(result: &ExecutionResult) -> Vec<&str> {
    result.errors.iter().map(|error| error.message()).collect()
}

fn paths(result: &ExecutionResult) -> Vec<Vec<PathSegment>> {
    result
        .errors
        .iter()
        .map(|error| error.path().map(<[_]>::to_vec).unwrap_or_default())
        .collect()
}

/// The response data as compact JSON text, so key order is compared too.
fn data_text(result: &ExecutionResult) -> String {
    serde_json::to_string(&result.data).expect("data serializes")
}
