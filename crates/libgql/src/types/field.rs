use crate::types::FieldResolver;
use crate::types::FieldResult;
use crate::types::InputValue;
use crate::types::ResolverArgs;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgql_parser::ast;

/// A field of an object or interface type.
#[derive(Clone, Debug)]
pub struct Field {
    name: String,
    description: Option<String>,
    ty: TypeRef,
    args: IndexMap<String, InputValue>,
    resolver: Option<FieldResolver>,
    deprecation_reason: Option<String>,
    ast_node: Option<ast::FieldDefinition>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            args: IndexMap::new(),
            resolver: None,
            deprecation_reason: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.insert(arg.name().to_string(), arg);
        self
    }

    pub fn resolver(mut self, resolver: FieldResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Shorthand for a synchronous [`FieldResolver`].
    pub fn resolve_with<F>(self, resolve: F) -> Self
    where
        F: for<'a> Fn(ResolverArgs<'a>) -> FieldResult + Send + Sync + 'static,
    {
        self.resolver(FieldResolver::sync(resolve))
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn ast_node(mut self, node: ast::FieldDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn args(&self) -> &IndexMap<String, InputValue> {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.get(name)
    }

    pub fn get_resolver(&self) -> Option<&FieldResolver> {
        self.resolver.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn get_ast_node(&self) -> Option<&ast::FieldDefinition> {
        self.ast_node.as_ref()
    }
}
