use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use libgql_parser::ast;

/// Everything a [`Schema`](crate::schema::Schema) is built from.
///
/// ```rust
/// use libgql::schema::Schema;
/// use libgql::schema::SchemaConfig;
/// use libgql::types::Field;
/// use libgql::types::ObjectType;
/// use libgql::types::TypeRef;
///
/// let schema = Schema::new(
///     SchemaConfig::new()
///         .query(ObjectType::new("Query").field(Field::new("hello", TypeRef::named("String")))),
/// ).unwrap();
/// assert_eq!(schema.query_type().map(|query| query.name()), Some("Query"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchemaConfig {
    pub(crate) description: Option<String>,
    pub(crate) query: Option<String>,
    pub(crate) mutation: Option<String>,
    pub(crate) subscription: Option<String>,
    pub(crate) types: Vec<GraphQLType>,
    pub(crate) directives: Option<Vec<Directive>>,
    pub(crate) ast_node: Option<ast::SchemaDefinition>,
    pub(crate) extension_ast_nodes: Vec<ast::SchemaDefinition>,
    pub(crate) assume_valid: bool,
}

impl SchemaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Registers `query` and makes it the query root type.
    pub fn query(mut self, query: ObjectType) -> Self {
        self.query = Some(query.name().to_string());
        self.types.push(query.into());
        self
    }

    pub fn mutation(mut self, mutation: ObjectType) -> Self {
        self.mutation = Some(mutation.name().to_string());
        self.types.push(mutation.into());
        self
    }

    pub fn subscription(mut self, subscription: ObjectType) -> Self {
        self.subscription = Some(subscription.name().to_string());
        self.types.push(subscription.into());
        self
    }

    /// Names the query root type without registering it; the type itself
    /// must be supplied through [`SchemaConfig::add_type`].
    pub fn query_type_name(mut self, name: impl Into<String>) -> Self {
        self.query = Some(name.into());
        self
    }

    pub fn mutation_type_name(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    pub fn subscription_type_name(mut self, name: impl Into<String>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    /// Registers a named type. Types reachable from the root types need not
    /// be registered explicitly, but types only reachable through an
    /// interface or union (implementations, members) must be.
    pub fn add_type(mut self, type_: impl Into<GraphQLType>) -> Self {
        self.types.push(type_.into());
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = GraphQLType>) -> Self {
        self.types.extend(types);
        self
    }

    /// Replaces the directive set. Without this the schema carries the
    /// built-in `@include`, `@skip`, `@deprecated` and `@specifiedBy`.
    pub fn directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = Some(directives);
        self
    }

    pub fn ast_node(mut self, node: ast::SchemaDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::SchemaDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    /// Skips [`validate_schema`](crate::schema::validate_schema) when the
    /// schema is used for validation and execution.
    pub fn assume_valid(mut self, assume_valid: bool) -> Self {
        self.assume_valid = assume_valid;
        self
    }
}
