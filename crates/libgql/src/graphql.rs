use crate::error::GraphQLError;
use crate::execution::ExecutionArgs;
use crate::execution::ExecutionResult;
use crate::execution::execute;
use crate::schema::Schema;
use crate::types::FieldResolver;
use crate::types::TypeResolver;
use crate::validation::validate;
use crate::value::FieldValue;
use crate::value::Variables;
use libgql_parser::parse;

/// A request for [`graphql`]: a schema, the request text and everything
/// [`ExecutionArgs`] takes.
#[derive(Clone, Debug)]
pub struct GraphQLArgs<'a> {
    schema: &'a Schema,
    source: &'a str,
    root_value: FieldValue,
    context_value: FieldValue,
    variable_values: Variables,
    operation_name: Option<String>,
    field_resolver: Option<FieldResolver>,
    type_resolver: Option<TypeResolver>,
}

impl<'a> GraphQLArgs<'a> {
    pub fn new(schema: &'a Schema, source: &'a str) -> Self {
        Self {
            schema,
            source,
            root_value: FieldValue::Null,
            context_value: FieldValue::Null,
            variable_values: Variables::new(),
            operation_name: None,
            field_resolver: None,
            type_resolver: None,
        }
    }

    pub fn root_value(mut self, root_value: impl Into<FieldValue>) -> Self {
        self.root_value = root_value.into();
        self
    }

    pub fn context_value(mut self, context_value: impl Into<FieldValue>) -> Self {
        self.context_value = context_value.into();
        self
    }

    pub fn variable_values(mut self, variable_values: Variables) -> Self {
        self.variable_values = variable_values;
        self
    }

    pub fn operation_name(mut self, operation_name: impl Into<String>) -> Self {
        self.operation_name = Some(operation_name.into());
        self
    }

    pub fn field_resolver(mut self, field_resolver: FieldResolver) -> Self {
        self.field_resolver = Some(field_resolver);
        self
    }

    pub fn type_resolver(mut self, type_resolver: TypeResolver) -> Self {
        self.type_resolver = Some(type_resolver);
        self
    }
}

/// Parses, validates and executes a request in one step.
///
/// A syntax error or any validation error ends the request before
/// execution; the result then carries those errors and no `data`.
///
/// ```rust
/// use libgql::GraphQLArgs;
/// use libgql::build_schema;
/// use libgql::graphql;
/// use serde_json::json;
///
/// let schema = build_schema("type Query { hello: String }").unwrap();
/// let args = GraphQLArgs::new(&schema, "{ hello }").root_value(json!({ "hello": "world" }));
/// let result = futures::executor::block_on(graphql(args));
/// assert_eq!(result.to_json(), json!({ "data": { "hello": "world" } }));
/// ```
pub async fn graphql(args: GraphQLArgs<'_>) -> ExecutionResult {
    let document = match parse(args.source) {
        Ok(document) => document,
        Err(err) => {
            tracing::debug!(error = %err, "request failed to parse");
            return ExecutionResult::from_errors(vec![GraphQLError::from(err)]);
        },
    };

    let validation_errors = validate(args.schema, &document);
    if !validation_errors.is_empty() {
        tracing::debug!(error_count = validation_errors.len(), "request failed validation");
        return ExecutionResult::from_errors(validation_errors);
    }

    let mut execution_args = ExecutionArgs::new(args.schema, &document)
        .root_value(args.root_value)
        .context_value(args.context_value)
        .variable_values(args.variable_values);
    if let Some(operation_name) = args.operation_name {
        execution_args = execution_args.operation_name(operation_name);
    }
    if let Some(field_resolver) = args.field_resolver {
        execution_args = execution_args.field_resolver(field_resolver);
    }
    if let Some(type_resolver) = args.type_resolver {
        execution_args = execution_args.type_resolver(type_resolver);
    }
    execute(execution_args).await
}
