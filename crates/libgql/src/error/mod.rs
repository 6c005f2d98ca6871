mod field_error;
mod graphql_error;
mod schema_build_error;

pub use field_error::FieldError;
pub use graphql_error::ErrorLocation;
pub use graphql_error::GraphQLError;
pub use graphql_error::PathSegment;
pub use schema_build_error::SchemaBuildError;
