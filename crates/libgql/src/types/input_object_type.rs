use crate::types::InputValue;
use crate::types::Thunk;
use indexmap::IndexMap;
use libgql_parser::ast;

/// An [input object type](https://spec.graphql.org/October2021/#sec-Input-Objects).
#[derive(Clone, Debug)]
pub struct InputObjectType {
    name: String,
    description: Option<String>,
    fields: Thunk<IndexMap<String, InputValue>>,
    ast_node: Option<ast::InputObjectTypeDefinition>,
    extension_ast_nodes: Vec<ast::InputObjectTypeDefinition>,
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Thunk::default(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: InputValue) -> Self {
        let mut fields = std::mem::take(&mut self.fields).into_value();
        fields.insert(field.name().to_string(), field);
        self.fields = Thunk::ready(fields);
        self
    }

    pub fn fields_thunk(
        mut self,
        fields: impl Fn() -> IndexMap<String, InputValue> + Send + Sync + 'static,
    ) -> Self {
        self.fields = Thunk::lazy(fields);
        self
    }

    pub fn ast_node(mut self, node: ast::InputObjectTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::InputObjectTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, InputValue> {
        self.fields.get()
    }

    pub fn get_field(&self, name: &str) -> Option<&InputValue> {
        self.fields.get().get(name)
    }

    pub fn get_ast_node(&self) -> Option<&ast::InputObjectTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::InputObjectTypeDefinition] {
        &self.extension_ast_nodes
    }
}
