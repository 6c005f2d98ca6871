//! The schema registry, its configuration and schema validation.

mod directive_validator;
mod enum_type_validator;
mod input_object_type_validator;
mod object_or_interface_type_validator;
mod root_types_validator;
#[allow(clippy::module_inception)]
mod schema;
mod schema_config;
mod union_type_validator;
mod validate_schema;

pub use schema::Implementations;
pub use schema::Schema;
pub use schema_config::SchemaConfig;
pub use validate_schema::assert_valid_schema;
pub use validate_schema::validate_schema;
