use crate::types::FieldResolver;
use crate::types::FieldResult;
use crate::types::IsTypeOf;
use crate::types::ResolverArgs;
use crate::types::ScalarType;
use crate::types::TypeResolver;
use std::collections::HashMap;

/// Behavior to attach to types while building a schema from SDL.
///
/// SDL only declares shapes; resolvers, abstract-type resolution and custom
/// scalar coercion are supplied here by type (and field) name. Fields
/// without a resolver fall back to the executor's default field resolver.
///
/// ```rust
/// use libgql::schema_builder::BuildSchemaOptions;
/// use libgql::schema_builder::build_schema_with_options;
///
/// let options = BuildSchemaOptions::new()
///     .resolve_with("Query", "hello", |_| Ok("world".into()));
/// let schema = build_schema_with_options("type Query { hello: String }", options).unwrap();
/// let hello = schema.query_type().and_then(|query| query.get_field("hello")).unwrap();
/// assert!(hello.get_resolver().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct BuildSchemaOptions {
    pub(super) field_resolvers: HashMap<(String, String), FieldResolver>,
    pub(super) type_resolvers: HashMap<String, TypeResolver>,
    pub(super) is_type_of: HashMap<String, IsTypeOf>,
    pub(super) scalars: HashMap<String, ScalarType>,
    pub(super) assume_valid: bool,
    pub(super) assume_valid_sdl: bool,
}

impl BuildSchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolver(
        mut self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolver: FieldResolver,
    ) -> Self {
        self.field_resolvers
            .insert((type_name.into(), field_name.into()), resolver);
        self
    }

    /// Shorthand for a synchronous resolver.
    pub fn resolve_with<F>(
        self,
        type_name: impl Into<String>,
        field_name: impl Into<String>,
        resolve: F,
    ) -> Self
    where
        F: for<'a> Fn(ResolverArgs<'a>) -> FieldResult + Send + Sync + 'static,
    {
        self.resolver(type_name, field_name, FieldResolver::sync(resolve))
    }

    /// Resolves the concrete type of values of the named interface or union.
    pub fn type_resolver(mut self, type_name: impl Into<String>, resolver: TypeResolver) -> Self {
        self.type_resolvers.insert(type_name.into(), resolver);
        self
    }

    pub fn is_type_of(mut self, type_name: impl Into<String>, is_type_of: IsTypeOf) -> Self {
        self.is_type_of.insert(type_name.into(), is_type_of);
        self
    }

    /// Supplies the coercion functions for a custom scalar declared in the
    /// SDL. The SDL's description and `@specifiedBy` URL take precedence.
    pub fn scalar(mut self, scalar: ScalarType) -> Self {
        self.scalars.insert(scalar.name().to_string(), scalar);
        self
    }

    /// Skips schema validation (see
    /// [`SchemaConfig::assume_valid`](crate::schema::SchemaConfig::assume_valid)).
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }

    /// Skips checking the SDL document itself (unique names, known types
    /// and directives) before building.
    pub fn assume_valid_sdl(mut self, assume_valid_sdl: bool) -> Self {
        self.assume_valid_sdl = assume_valid_sdl;
        self
    }
}
