use crate::schema::Schema;
use crate::types::TypeRef;
use libgql_parser::ast;

/// Resolves a type annotation against `schema`, or `None` when the named
/// type it wraps is not defined there.
pub fn type_from_ast(schema: &Schema, annotation: &ast::TypeAnnotation) -> Option<TypeRef> {
    match annotation {
        ast::TypeAnnotation::Named(named) => {
            schema.get_type(&named.name).map(|type_| TypeRef::named(type_.name()))
        },
        ast::TypeAnnotation::List(list) => type_from_ast(schema, &list.inner).map(TypeRef::list),
        ast::TypeAnnotation::NonNull(non_null) => {
            type_from_ast(schema, &non_null.inner).map(TypeRef::non_null)
        },
    }
}
