use libgql_parser::ast;
use std::fmt;

/// A reference to a type as it appears in a field, argument or variable
/// position: a named type, possibly wrapped in lists and non-null markers.
///
/// Named types are referenced by name and looked up in the
/// [`Schema`](crate::schema::Schema) they belong to.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRef {
    Named(String),
    List(Box<TypeRef>),
    NonNull(Box<TypeRef>),
}

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// `TypeRef::named(name)` wrapped in a non-null marker.
    pub fn named_non_null(name: impl Into<String>) -> Self {
        TypeRef::non_null(TypeRef::named(name))
    }

    /// The name of the innermost named type.
    pub fn named_type(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => inner.named_type(),
        }
    }

    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeRef::NonNull(_))
    }

    /// Whether this is a list, ignoring an outer non-null marker.
    pub fn is_list(&self) -> bool {
        matches!(self.nullable(), TypeRef::List(_))
    }

    /// This type with one outer non-null marker removed.
    pub fn nullable(&self) -> &TypeRef {
        match self {
            TypeRef::NonNull(inner) => inner,
            other => other,
        }
    }

    /// The wrapped type of a list or non-null type.
    pub fn of_type(&self) -> Option<&TypeRef> {
        match self {
            TypeRef::Named(_) => None,
            TypeRef::List(inner) | TypeRef::NonNull(inner) => Some(inner),
        }
    }

    pub fn from_ast(annotation: &ast::TypeAnnotation) -> Self {
        match annotation {
            ast::TypeAnnotation::Named(named) => TypeRef::named(&named.name),
            ast::TypeAnnotation::List(list) => TypeRef::list(TypeRef::from_ast(&list.inner)),
            ast::TypeAnnotation::NonNull(non_null) => {
                TypeRef::non_null(TypeRef::from_ast(&non_null.inner))
            },
        }
    }

    pub fn to_ast(&self) -> ast::TypeAnnotation {
        match self {
            TypeRef::Named(name) => ast::TypeAnnotation::named(name),
            TypeRef::List(inner) => ast::TypeAnnotation::List(ast::ListType {
                inner: Box::new(inner.to_ast()),
                loc: None,
            }),
            TypeRef::NonNull(inner) => ast::TypeAnnotation::NonNull(ast::NonNullType {
                inner: Box::new(inner.to_ast()),
                loc: None,
            }),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => f.write_str(name),
            TypeRef::List(inner) => write!(f, "[{inner}]"),
            TypeRef::NonNull(inner) => write!(f, "{inner}!"),
        }
    }
}

impl From<&ast::TypeAnnotation> for TypeRef {
    fn from(annotation: &ast::TypeAnnotation) -> Self {
        TypeRef::from_ast(annotation)
    }
}
