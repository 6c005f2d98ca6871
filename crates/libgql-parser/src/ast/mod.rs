//! The GraphQL abstract syntax tree.
//!
//! Every node owns its children and carries an optional [`Location`] (absent
//! when parsed with [`ParseOptions::no_location`](crate::ParseOptions) or when
//! built programmatically). Nodes are treated as immutable once parsed: the
//! [visitor](crate::visitor) produces a new tree rather than editing in place.

mod directive_location;
mod document;
mod executable;
mod location;
mod type_annotation;
mod type_system;
mod values;

pub use directive_location::DirectiveLocation;
pub use document::Definition;
pub use document::Document;
pub use executable::Argument;
pub use executable::Directive;
pub use executable::Field;
pub use executable::FragmentDefinition;
pub use executable::FragmentSpread;
pub use executable::InlineFragment;
pub use executable::OperationDefinition;
pub use executable::OperationType;
pub use executable::Selection;
pub use executable::SelectionSet;
pub use executable::VariableDefinition;
pub use location::Located;
pub use location::Location;
pub use type_annotation::ListType;
pub use type_annotation::NamedType;
pub use type_annotation::NonNullType;
pub use type_annotation::TypeAnnotation;
pub use type_system::Description;
pub use type_system::DirectiveDefinition;
pub use type_system::EnumTypeDefinition;
pub use type_system::EnumValueDefinition;
pub use type_system::FieldDefinition;
pub use type_system::InputObjectTypeDefinition;
pub use type_system::InputValueDefinition;
pub use type_system::InterfaceTypeDefinition;
pub use type_system::ObjectTypeDefinition;
pub use type_system::OperationTypeDefinition;
pub use type_system::ScalarTypeDefinition;
pub use type_system::SchemaDefinition;
pub use type_system::TypeDefinition;
pub use type_system::UnionTypeDefinition;
pub use values::ObjectField;
pub use values::Value;
