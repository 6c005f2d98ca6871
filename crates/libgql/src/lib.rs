//! A GraphQL engine: the type system, schema building from SDL, document
//! validation, introspection and asynchronous execution.
//!
//! The language front end (lexing, parsing, the AST and printing) lives in
//! [`libgql_parser`], re-exported here as [`parser`].
//!
//! ```rust
//! use libgql::build_schema;
//! use libgql::parser::parse;
//! use libgql::validation::validate;
//!
//! let schema = build_schema("type Query { name: String }").unwrap();
//! let document = parse("{ nam }").unwrap();
//! let errors = validate(&schema, &document);
//! assert_eq!(
//!     errors[0].message(),
//!     "Cannot query field \"nam\" on type \"Query\". Did you mean \"name\"?",
//! );
//! ```

pub mod error;
pub mod execution;
mod graphql;
pub mod introspection;
pub mod schema;
pub mod schema_builder;
pub mod types;
pub mod utilities;
pub mod validation;
pub mod value;

pub use libgql_parser as parser;

pub use error::FieldError;
pub use error::GraphQLError;
pub use execution::ExecutionArgs;
pub use execution::ExecutionResult;
pub use execution::execute;
pub use graphql::GraphQLArgs;
pub use graphql::graphql;
pub use schema::Schema;
pub use schema::SchemaConfig;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::build_schema;
pub use schema_builder::extend_schema;
pub use utilities::print_schema;
pub use validation::validate;
pub use value::FieldValue;
pub use value::Variables;

#[cfg(test)]
mod tests;
