//! Validation of executable documents against a schema.
//!
//! [`validate`] runs every rule in [`rules`] over a document in a single
//! traversal; a [`TypeInfo`] tracks the schema types in scope as it goes.

pub mod rules;
mod specified_rules;
mod type_info;
mod validate;
mod validation_context;

pub use specified_rules::specified_rules;
pub use type_info::TypeInfo;
pub use type_info::TypeInfoVisitor;
pub use type_info::get_field_def;
pub use validate::ValidationOptions;
pub use validate::ValidationRule;
pub use validate::validate;
pub use validate::validate_with_rules;
pub use validation_context::ValidationContext;
pub use validation_context::VariableUsage;

#[cfg(test)]
mod tests;
