use crate::ast::Directive;
use crate::ast::DirectiveLocation;
use crate::ast::Located;
use crate::ast::Location;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;

/// A description string preceding a type-system definition.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    pub value: String,
    pub block: bool,
    pub loc: Option<Location>,
}

/// `schema { query: Query ... }`, or `extend schema ...` when wrapped in
/// [`Definition::SchemaExtension`](crate::ast::Definition::SchemaExtension).
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub description: Option<Description>,
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub loc: Option<Location>,
}

/// `query: Query` inside a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub named_type: NamedType,
    pub loc: Option<Location>,
}

/// A named type definition. The same shape is used for type extensions
/// (see [`Definition::TypeExtension`](crate::ast::Definition::TypeExtension)),
/// in which case `description` is always `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition {
    Scalar(ScalarTypeDefinition),
    Object(ObjectTypeDefinition),
    Interface(InterfaceTypeDefinition),
    Union(UnionTypeDefinition),
    Enum(EnumTypeDefinition),
    InputObject(InputObjectTypeDefinition),
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(def) => &def.name,
            TypeDefinition::Object(def) => &def.name,
            TypeDefinition::Interface(def) => &def.name,
            TypeDefinition::Union(def) => &def.name,
            TypeDefinition::Enum(def) => &def.name,
            TypeDefinition::InputObject(def) => &def.name,
        }
    }

    pub fn directives(&self) -> &[Directive] {
        match self {
            TypeDefinition::Scalar(def) => &def.directives,
            TypeDefinition::Object(def) => &def.directives,
            TypeDefinition::Interface(def) => &def.directives,
            TypeDefinition::Union(def) => &def.directives,
            TypeDefinition::Enum(def) => &def.directives,
            TypeDefinition::InputObject(def) => &def.directives,
        }
    }

    pub fn description(&self) -> Option<&Description> {
        match self {
            TypeDefinition::Scalar(def) => def.description.as_ref(),
            TypeDefinition::Object(def) => def.description.as_ref(),
            TypeDefinition::Interface(def) => def.description.as_ref(),
            TypeDefinition::Union(def) => def.description.as_ref(),
            TypeDefinition::Enum(def) => def.description.as_ref(),
            TypeDefinition::InputObject(def) => def.description.as_ref(),
        }
    }

    /// The SDL keyword introducing this kind of definition.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeDefinition::Scalar(_) => "scalar",
            TypeDefinition::Object(_) => "type",
            TypeDefinition::Interface(_) => "interface",
            TypeDefinition::Union(_) => "union",
            TypeDefinition::Enum(_) => "enum",
            TypeDefinition::InputObject(_) => "input",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub loc: Option<Location>,
}

/// A field of an object or interface type.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: TypeAnnotation,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

/// An argument definition or an input object field.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub value_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

/// `directive @name(args) repeatable on LOCATION | ...`
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub description: Option<Description>,
    pub name: String,
    pub arguments: Vec<InputValueDefinition>,
    pub repeatable: bool,
    pub locations: Vec<DirectiveLocation>,
    pub loc: Option<Location>,
}

#[inherent]
impl Located for SchemaDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for OperationTypeDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for TypeDefinition {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            TypeDefinition::Scalar(def) => def.loc.as_ref(),
            TypeDefinition::Object(def) => def.loc.as_ref(),
            TypeDefinition::Interface(def) => def.loc.as_ref(),
            TypeDefinition::Union(def) => def.loc.as_ref(),
            TypeDefinition::Enum(def) => def.loc.as_ref(),
            TypeDefinition::InputObject(def) => def.loc.as_ref(),
        }
    }
}

#[inherent]
impl Located for FieldDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for InputValueDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for EnumValueDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for DirectiveDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}
