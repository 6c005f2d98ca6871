mod coerce_input_value_tests;
mod inspect_tests;
mod print_schema_tests;
mod suggestions_tests;

use crate::schema::Schema;
use crate::schema_builder::build_schema;

const INPUT_SCHEMA_SDL: &str = concat!(
    "type Query { f(arg: Filter): Int }\n",
    "input Filter { limit: Int = 10 color: Color tags: [String!] nested: Nested }\n",
    "input Nested { id: ID! }\n",
    "enum Color { RED GREEN }\n",
);

fn input_schema() -> Schema {
    build_schema(INPUT_SCHEMA_SDL).expect("input schema builds")
}
