//! Helpers shared by validation, execution and schema printing: value
//! coercion and conversion, type comparison and error-message formatting.

mod ast_from_value;
mod coerce_input_value;
mod inspect;
mod print_schema;
mod suggestions;
mod type_comparators;
mod type_from_ast;
mod value_from_ast;
mod value_from_ast_untyped;

pub use ast_from_value::ast_from_value;
pub use coerce_input_value::coerce_input_value;
pub use coerce_input_value::print_path_array;
pub use inspect::inspect;
pub use inspect::inspect_field_value;
pub use print_schema::print_introspection_schema;
pub use print_schema::print_schema;
pub use suggestions::did_you_mean;
pub(crate) use suggestions::natural_compare;
pub use suggestions::suggestion_list;
pub use type_comparators::do_types_overlap;
pub use type_comparators::is_equal_type;
pub use type_comparators::is_type_sub_type_of;
pub use type_from_ast::type_from_ast;
pub use value_from_ast::default_value_to_json;
pub use value_from_ast::value_from_ast;
pub use value_from_ast_untyped::value_from_ast_untyped;

#[cfg(test)]
mod tests;
