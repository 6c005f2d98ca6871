use crate::schema::Schema;
use crate::types::FieldResolver;
use crate::types::TypeResolver;
use crate::value::FieldValue;
use crate::value::Variables;
use libgql_parser::ast;

/// Everything needed to execute one operation of a document.
///
/// ```rust
/// use libgql::execution::ExecutionArgs;
/// use libgql::execution::execute;
/// use libgql::schema_builder::build_schema;
/// use libgql::value::FieldValue;
/// use serde_json::json;
///
/// let schema = build_schema("type Query { greeting: String }").unwrap();
/// let document = libgql_parser::parse("{ greeting }").unwrap();
/// let root = FieldValue::from(json!({ "greeting": "hello" }));
/// let result = futures::executor::block_on(execute(
///     ExecutionArgs::new(&schema, &document).root_value(root),
/// ));
/// assert_eq!(result.data, Some(json!({ "greeting": "hello" })));
/// ```
#[derive(Clone, Debug)]
pub struct ExecutionArgs<'a> {
    pub(crate) schema: &'a Schema,
    pub(crate) document: &'a ast::Document,
    pub(crate) root_value: FieldValue,
    pub(crate) context_value: FieldValue,
    pub(crate) variable_values: Variables,
    pub(crate) operation_name: Option<String>,
    pub(crate) field_resolver: Option<FieldResolver>,
    pub(crate) type_resolver: Option<TypeResolver>,
}

impl<'a> ExecutionArgs<'a> {
    pub fn new(schema: &'a Schema, document: &'a ast::Document) -> Self {
        Self {
            schema,
            document,
            root_value: FieldValue::Null,
            context_value: FieldValue::Null,
            variable_values: Variables::new(),
            operation_name: None,
            field_resolver: None,
            type_resolver: None,
        }
    }

    /// The source value handed to root field resolvers.
    pub fn root_value(mut self, root_value: impl Into<FieldValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    /// A value shared with every resolver, typically request-scoped state.
    pub fn context_value(mut self, context_value: impl Into<FieldValue>) -> Self {
        self.context_value = context_value.into();
        self
    }

    /// Raw (uncoerced) variable values, as a client sent them.
    pub fn variable_values(mut self, variable_values: Variables) -> Self {
        self.variable_values = variable_values;
        self
    }

    /// Selects which operation to run when the document has several.
    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    /// Replaces the default field resolver for fields without their own.
    pub fn field_resolver(mut self, field_resolver: FieldResolver) -> Self {
        self.field_resolver = Some(field_resolver);
        self
    }

    /// Replaces the default type resolver for abstract types without their
    /// own.
    pub fn type_resolver(mut self, type_resolver: TypeResolver) -> Self {
        self.type_resolver = Some(type_resolver);
        self
    }
}
