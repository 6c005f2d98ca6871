use crate::types::Field;
use crate::types::IsTypeOf;
use crate::types::ObjectOrInterfaceType;
use crate::types::Thunk;
use crate::types::object_or_interface_type::ObjectOrInterfaceTypeData;
use indexmap::IndexMap;
use inherent::inherent;
use libgql_parser::ast;

/// An [object type](https://spec.graphql.org/October2021/#sec-Objects).
///
/// ```rust
/// use libgql::types::Field;
/// use libgql::types::ObjectType;
/// use libgql::types::TypeRef;
///
/// let query = ObjectType::new("Query")
///     .field(Field::new("hello", TypeRef::named("String")));
/// assert_eq!(query.fields().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ObjectType {
    data: ObjectOrInterfaceTypeData,
    is_type_of: Option<IsTypeOf>,
    ast_node: Option<ast::ObjectTypeDefinition>,
    extension_ast_nodes: Vec<ast::ObjectTypeDefinition>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            data: ObjectOrInterfaceTypeData::new(name.into()),
            is_type_of: None,
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

    pub fn is_type_of(mut self, is_type_of: IsTypeOf) -> Self {
        self.is_type_of = Some(is_type_of);
        self
    }

    pub fn ast_node(mut self, node: ast::ObjectTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::ObjectTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn get_is_type_of(&self) -> Option<&IsTypeOf> {
        self.is_type_of.as_ref()
    }

    pub fn get_ast_node(&self) -> Option<&ast::ObjectTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::ObjectTypeDefinition] {
        &self.extension_ast_nodes
    }
}

#[inherent]
impl ObjectOrInterfaceType for ObjectType {
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
