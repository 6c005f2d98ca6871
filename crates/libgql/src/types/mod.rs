//! The runtime type system: named types, fields, arguments, directives and
//! the resolver hooks the executor calls into.

mod directive;
mod enum_type;
mod field;
mod graphql_type;
mod input_object_type;
mod input_value;
mod interface_type;
mod object_or_interface_type;
mod object_type;
mod resolvers;
mod scalar_type;
mod thunk;
mod type_ref;
mod union_type;

pub use directive::DEFAULT_DEPRECATION_REASON;
pub use directive::Directive;
pub use directive::SPECIFIED_DIRECTIVE_NAMES;
pub use directive::deprecated_directive;
pub use directive::include_directive;
pub use directive::is_specified_directive;
pub use directive::skip_directive;
pub use directive::specified_by_directive;
pub use directive::specified_directives;
pub use enum_type::EnumType;
pub use enum_type::EnumValue;
pub use field::Field;
pub use graphql_type::GraphQLType;
pub use graphql_type::TypeKind;
pub use input_object_type::InputObjectType;
pub use input_value::DefaultValue;
pub use input_value::InputValue;
pub use interface_type::InterfaceType;
pub use object_or_interface_type::ObjectOrInterfaceType;
pub use object_type::ObjectType;
pub use resolvers::FieldResolver;
pub use resolvers::FieldResult;
pub use resolvers::IsTypeOf;
pub use resolvers::IsTypeOfArgs;
pub use resolvers::ResolverArgs;
pub use resolvers::TypeResolver;
pub use resolvers::TypeResolverArgs;
pub use scalar_type::SPECIFIED_SCALAR_NAMES;
pub use scalar_type::ScalarType;
pub use scalar_type::is_specified_scalar_type;
pub use scalar_type::specified_scalar_type;
pub use thunk::Thunk;
pub use type_ref::TypeRef;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
