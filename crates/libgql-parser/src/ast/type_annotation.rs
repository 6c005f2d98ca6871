use crate::ast::Located;
use crate::ast::Location;
use inherent::inherent;

/// A type reference as written in a document: `Foo`, `[Foo]`, `Foo!`,
/// `[[Foo!]]!` and so on.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Named(NamedType),
    List(ListType),
    NonNull(NonNullType),
}

impl TypeAnnotation {
    /// The name of the innermost named type.
    pub fn innermost_name(&self) -> &str {
        match self {
            TypeAnnotation::Named(named) => &named.name,
            TypeAnnotation::List(list) => list.inner.innermost_name(),
            TypeAnnotation::NonNull(non_null) => non_null.inner.innermost_name(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeAnnotation::NonNull(_))
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeAnnotation::Named(NamedType::new(name))
    }
}

#[inherent]
impl Located for TypeAnnotation {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            TypeAnnotation::Named(named) => named.loc.as_ref(),
            TypeAnnotation::List(list) => list.loc.as_ref(),
            TypeAnnotation::NonNull(non_null) => non_null.loc.as_ref(),
        }
    }
}

/// A reference to a named type. Also used for type conditions, implemented
/// interfaces, union members and root operation types.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: String,
    pub loc: Option<Location>,
}

impl NamedType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), loc: None }
    }
}

#[inherent]
impl Located for NamedType {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub inner: Box<TypeAnnotation>,
    pub loc: Option<Location>,
}

/// The parser never produces a `NonNullType` wrapping another
/// `NonNullType`.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner: Box<TypeAnnotation>,
    pub loc: Option<Location>,
}
