use crate::types::Thunk;
use crate::types::TypeResolver;
use libgql_parser::ast;

/// A [union type](https://spec.graphql.org/October2021/#sec-Unions): one of
/// a fixed set of object types.
#[derive(Clone, Debug)]
pub struct UnionType {
    name: String,
    description: Option<String>,
    types: Thunk<Vec<String>>,
    resolve_type: Option<TypeResolver>,
    ast_node: Option<ast::UnionTypeDefinition>,
    extension_ast_nodes: Vec<ast::UnionTypeDefinition>,
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: Thunk::default(),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn member(mut self, type_name: impl Into<String>) -> Self {
        let mut types = std::mem::take(&mut self.types).into_value();
        types.push(type_name.into());
        self.types = Thunk::ready(types);
        self
    }

    pub fn members_thunk(
        mut self,
        types: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.types = Thunk::lazy(types);
        self
    }

    pub fn resolve_type(mut self, resolve_type: TypeResolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    pub fn ast_node(mut self, node: ast::UnionTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::UnionTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Names of the member object types. Forces the member thunk.
    pub fn types(&self) -> &[String] {
        self.types.get()
    }

    pub fn get_resolve_type(&self) -> Option<&TypeResolver> {
        self.resolve_type.as_ref()
    }

    pub fn get_ast_node(&self) -> Option<&ast::UnionTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::UnionTypeDefinition] {
        &self.extension_ast_nodes
    }
}
