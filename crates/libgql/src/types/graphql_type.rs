use crate::types::EnumType;
use crate::types::Field;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;
use libgql_parser::ast::Location;
use std::fmt;
use std::sync::Arc;

/// The kinds reported by introspection's `__Type.kind`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
}

impl TypeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Scalar => "SCALAR",
            TypeKind::Object => "OBJECT",
            TypeKind::Interface => "INTERFACE",
            TypeKind::Union => "UNION",
            TypeKind::Enum => "ENUM",
            TypeKind::InputObject => "INPUT_OBJECT",
            TypeKind::List => "LIST",
            TypeKind::NonNull => "NON_NULL",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named type registered in a [`Schema`](crate::schema::Schema).
///
/// Cloning is cheap: every variant is reference counted.
#[derive(Clone, Debug)]
pub enum GraphQLType {
    Scalar(Arc<ScalarType>),
    Object(Arc<ObjectType>),
    Interface(Arc<InterfaceType>),
    Union(Arc<UnionType>),
    Enum(Arc<EnumType>),
    InputObject(Arc<InputObjectType>),
}

impl GraphQLType {
    pub fn name(&self) -> &str {
        match self {
            GraphQLType::Scalar(type_) => type_.name(),
            GraphQLType::Object(type_) => type_.name(),
            GraphQLType::Interface(type_) => type_.name(),
            GraphQLType::Union(type_) => type_.name(),
            GraphQLType::Enum(type_) => type_.name(),
            GraphQLType::InputObject(type_) => type_.name(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            GraphQLType::Scalar(type_) => type_.get_description(),
            GraphQLType::Object(type_) => type_.get_description(),
            GraphQLType::Interface(type_) => type_.get_description(),
            GraphQLType::Union(type_) => type_.get_description(),
            GraphQLType::Enum(type_) => type_.get_description(),
            GraphQLType::InputObject(type_) => type_.get_description(),
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            GraphQLType::Scalar(_) => TypeKind::Scalar,
            GraphQLType::Object(_) => TypeKind::Object,
            GraphQLType::Interface(_) => TypeKind::Interface,
            GraphQLType::Union(_) => TypeKind::Union,
            GraphQLType::Enum(_) => TypeKind::Enum,
            GraphQLType::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// Where the type was defined, when it came from SDL.
    pub fn ast_loc(&self) -> Option<&Location> {
        match self {
            GraphQLType::Scalar(type_) => type_.get_ast_node()?.loc.as_ref(),
            GraphQLType::Object(type_) => type_.get_ast_node()?.loc.as_ref(),
            GraphQLType::Interface(type_) => type_.get_ast_node()?.loc.as_ref(),
            GraphQLType::Union(type_) => type_.get_ast_node()?.loc.as_ref(),
            GraphQLType::Enum(type_) => type_.get_ast_node()?.loc.as_ref(),
            GraphQLType::InputObject(type_) => type_.get_ast_node()?.loc.as_ref(),
        }
    }

    /// Whether the type may appear as an argument, variable or input field.
    pub fn is_input_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) | GraphQLType::InputObject(_),
        )
    }

    /// Whether the type may appear as a field's return type.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, GraphQLType::InputObject(_))
    }

    pub fn is_leaf_type(&self) -> bool {
        matches!(self, GraphQLType::Scalar(_) | GraphQLType::Enum(_))
    }

    pub fn is_composite_type(&self) -> bool {
        matches!(
            self,
            GraphQLType::Object(_) | GraphQLType::Interface(_) | GraphQLType::Union(_),
        )
    }

    pub fn is_abstract_type(&self) -> bool {
        matches!(self, GraphQLType::Interface(_) | GraphQLType::Union(_))
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            GraphQLType::Scalar(type_) => Some(type_),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            GraphQLType::Object(type_) => Some(type_),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            GraphQLType::Interface(type_) => Some(type_),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            GraphQLType::Union(type_) => Some(type_),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            GraphQLType::Enum(type_) => Some(type_),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            GraphQLType::InputObject(type_) => Some(type_),
            _ => None,
        }
    }

    /// Whether both handles point at the same type object.
    pub fn ptr_eq(&self, other: &GraphQLType) -> bool {
        match (self, other) {
            (GraphQLType::Scalar(a), GraphQLType::Scalar(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Object(a), GraphQLType::Object(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Interface(a), GraphQLType::Interface(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Union(a), GraphQLType::Union(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::Enum(a), GraphQLType::Enum(b)) => Arc::ptr_eq(a, b),
            (GraphQLType::InputObject(a), GraphQLType::InputObject(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// The fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            GraphQLType::Object(type_) => Some(type_.fields()),
            GraphQLType::Interface(type_) => Some(type_.fields()),
            _ => None,
        }
    }
}

impl fmt::Display for GraphQLType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<ScalarType> for GraphQLType {
    fn from(type_: ScalarType) -> Self {
        GraphQLType::Scalar(Arc::new(type_))
    }
}

impl From<ObjectType> for GraphQLType {
    fn from(type_: ObjectType) -> Self {
        GraphQLType::Object(Arc::new(type_))
    }
}

impl From<InterfaceType> for GraphQLType {
    fn from(type_: InterfaceType) -> Self {
        GraphQLType::Interface(Arc::new(type_))
    }
}

impl From<UnionType> for GraphQLType {
    fn from(type_: UnionType) -> Self {
        GraphQLType::Union(Arc::new(type_))
    }
}

impl From<EnumType> for GraphQLType {
    fn from(type_: EnumType) -> Self {
        GraphQLType::Enum(Arc::new(type_))
    }
}

impl From<InputObjectType> for GraphQLType {
    fn from(type_: InputObjectType) -> Self {
        GraphQLType::InputObject(Arc::new(type_))
    }
}
