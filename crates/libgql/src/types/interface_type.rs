use crate::types::Field;
use crate::types::ObjectOrInterfaceType;
use crate::types::Thunk;
use crate::types::TypeResolver;
use crate::types::object_or_interface_type::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;
use libgql_parser::ast;

/// An [interface type](https://spec.graphql.org/October2021/#sec-Interfaces).
#[derive(Clone, Debug)]
pub struct InterfaceType {
    data: ObjectOrInterfaceTypeData,
    resolve_type: Option<TypeResolver>,
    ast_node: Option<ast::InterfaceTypeDefinition>,
    extension_ast_nodes: Vec<ast::InterfaceTypeDefinition>,
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: ObjectOrInterfaceTypeData::new(name.into()),
            resolve_type: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.data.description = Some(description.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.data.add_field(field);
        self
    }

    /// Supplies the field map lazily, for types whose fields reference
    /// types declared later.
    pub fn fields_thunk(
        mut self,
        fields: impl Fn() -> IndexMap<String, Field> + Send + Sync + 'static,
    ) -> Self {
        self.data.fields = Thunk::lazy(fields);
        self
    }

    pub fn interface(mut self, name: impl Into<String>) -> Self {
        self.data.add_interface(name.into());
        self
    }

    pub fn interfaces_thunk(
        mut self,
        interfaces: impl Fn() -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.data.interfaces = Thunk::lazy(interfaces);
        self
    }

    pub fn resolve_type(mut self, resolve_type: TypeResolver) -> Self {
        self.resolve_type = Some(resolve_type);
        self
    }

    pub fn ast_node(mut self, node: ast::InterfaceTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::InterfaceTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn get_resolve_type(&self) -> Option<&TypeResolver> {
        self.resolve_type.as_ref()
    }

    pub fn get_ast_node(&self) -> Option<&ast::InterfaceTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::InterfaceTypeDefinition] {
        &self.extension_ast_nodes
    }
}

#[inherent]
impl ObjectOrInterfaceType for InterfaceType {
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.data.description.as_deref()
    }

    pub fn fields(&self) -> &IndexMap<String, Field> {
        self.data.fields.get()
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.data.fields.get().get(name)
    }

    pub fn interfaces(&self) -> &[String] {
        self.data.interfaces.get()
    }
}
