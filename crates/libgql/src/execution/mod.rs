//! Execution of a validated operation against a schema.
//!
//! [`execute`] selects the operation, coerces its variables, then resolves
//! each selected field. Query fields run concurrently and mutation root
//! fields run one after another. Field errors are collected next to the
//! partial data, with `null` propagated to the nearest nullable position.

mod collect_fields;
mod execution_args;
mod execution_result;
mod executor;
mod resolve_info;
mod response_path;
mod values;

pub use collect_fields::GroupedFields;
pub use execution_args::ExecutionArgs;
pub use execution_result::ExecutionResult;
pub use executor::default_field_resolver;
pub use executor::default_type_resolver;
pub use executor::execute;
pub use resolve_info::ResolveInfo;
pub use response_path::ResponsePath;
pub use values::MAX_VARIABLE_ERRORS;
pub use values::get_argument_values;
pub use values::get_directive_values;
pub use values::get_variable_values;

#[cfg(test)]
mod tests;
