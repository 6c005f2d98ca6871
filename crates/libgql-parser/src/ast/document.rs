use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::Located;
use crate::ast::Location;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use inherent::inherent;

/// The root of a parsed document: a non-empty list of definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub loc: Option<Location>,
}

impl Document {
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|def| match def {
            Definition::Fragment(frag) => Some(frag),
            _ => None,
        })
    }
}

#[inherent]
impl Located for Document {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Definition {
    Operation(OperationDefinition),
    Fragment(FragmentDefinition),
    Schema(SchemaDefinition),
    Type(TypeDefinition),
    Directive(DirectiveDefinition),
    SchemaExtension(SchemaDefinition),
    TypeExtension(TypeDefinition),
}

impl Definition {
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

#[inherent]
impl Located for Definition {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Definition::Operation(def) => def.loc.as_ref(),
            Definition::Fragment(def) => def.loc.as_ref(),
            Definition::Schema(def) | Definition::SchemaExtension(def) => def.loc.as_ref(),
            Definition::Type(def) | Definition::TypeExtension(def) => def.loc(),
            Definition::Directive(def) => def.loc.as_ref(),
        }
    }
}
