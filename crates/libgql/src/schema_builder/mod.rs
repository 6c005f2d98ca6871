//! Building and extending schemas from SDL documents.

mod build_schema_options;
#[allow(clippy::module_inception)]
mod schema_builder;
mod schema_extender;
mod sdl_validator;

pub use build_schema_options::BuildSchemaOptions;
pub use schema_builder::SchemaBuilder;
pub use schema_builder::build_ast_schema;
pub use schema_builder::build_schema;
pub use schema_builder::build_schema_with_options;
pub use schema_builder::extend_schema;

#[cfg(test)]
mod tests;
