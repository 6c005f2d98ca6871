mod argument_rules_tests;
mod definition_rules_tests;
mod directive_rules_tests;
mod fragment_rules_tests;
mod overlapping_fields_tests;
mod validate_tests;
mod variable_rules_tests;

use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema_builder::build_schema;
use crate::validation::ValidationContext;
use crate::validation::ValidationOptions;
use crate::validation::validate_with_rules;
use libgql_parser::parse;
use libgql_parser::visitor::Visitor;

const TEST_SCHEMA_SDL: &str = r#"
schema {
  query: QueryRoot
  subscription: SubscriptionRoot
}

directive @onQuery on QUERY
directive @onMutation on MUTATION
directive @onField on FIELD
directive @onFragmentSpread on FRAGMENT_SPREAD
directive @onInlineFragment on INLINE_FRAGMENT
directive @onVariableDefinition on VARIABLE_DEFINITION
directive @repeatable repeatable on FIELD
directive @withArgs(required: Int!, optional: Int = 1) on FIELD

interface Pet {
  name(surname: Boolean): String
}

enum DogCommand {
  SIT
  HEEL
  DOWN
}

type Dog implements Pet {
  name(surname: Boolean): String
  nickname: String
  barkVolume: Int
  barks: Boolean
  doesKnowCommand(dogCommand: DogCommand): Boolean
  isHouseTrained(atOtherHomes: Boolean = true): Boolean
  isAtLocation(x: Int, y: Int): Boolean
}

enum FurColor {
  BROWN
  BLACK
  TAN
  SPOTTED
}

type Cat implements Pet {
  name(surname: Boolean): String
  nickname: String
  meows: Boolean
  meowsVolume: Int
  furColor: FurColor
}

union CatOrDog = Cat | Dog

type Human {
  name(surname: Boolean): String
  pets: [Pet]
  relatives: [Human]!
  iq: Int
}

input ComplexInput {
  requiredField: Boolean!
  nonNullField: Boolean! = false
  intField: Int
  stringField: String
  booleanField: Boolean
  stringListField: [String]
}

type ComplicatedArgs {
  intArgField(intArg: Int): String
  nonNullIntArgField(nonNullIntArg: Int!): String
  stringArgField(stringArg: String): String
  booleanArgField(booleanArg: Boolean): String
  enumArgField(enumArg: FurColor): String
  floatArgField(floatArg: Float): String
  idArgField(idArg: ID): String
  stringListArgField(stringListArg: [String]): String
  stringListNonNullArgField(stringListNonNullArg: [String!]): String
  complexArgField(complexArg: ComplexInput): String
  multipleReqs(req1: Int!, req2: Int!): String
  nonNullFieldWithDefault(arg: Int! = 0): String
  multipleOpts(opt1: Int = 0, opt2: Int = 0): String
}

type QueryRoot {
  human(id: ID): Human
  dog: Dog
  cat: Cat
  pet: Pet
  catOrDog: CatOrDog
  complicatedArgs: ComplicatedArgs
}

type SubscriptionRoot {
  catSubscribe: Cat
  dogSubscribe: Dog
}
"#;

fn test_schema() -> Schema {
    build_schema(TEST_SCHEMA_SDL).expect("test schema should build")
}

/// Runs a single rule over `query` against the test schema.
fn rule_errors<R>(rule: R, query: &str) -> Vec<GraphQLError>
where
    R: for<'a> Visitor<ValidationContext<'a>> + 'static,
{
    rule_errors_with_schema(&test_schema(), rule, query)
}

fn rule_errors_with_schema<R>(schema: &Schema, rule: R, query: &str) -> Vec<GraphQLError>
where
    R: for<'a> Visitor<ValidationContext<'a>> + 'static,
{
    let document = parse(query).expect("query should parse");
    validate_with_rules(schema, &document, vec![Box::new(rule)], ValidationOptions::default())
}

fn messages(errors: &[GraphQLError]) -> Vec<&str> {
    errors.iter().map(GraphQLError::message).collect()
}

fn locations(error: &GraphQLError) -> Vec<(usize, usize)> {
    error
        .locations()
        .iter()
        .map(|location| (location.line, location.column))
        .collect()
}
