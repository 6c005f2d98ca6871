use crate::error::GraphQLError;
use crate::schema::Schema;
use libgql_parser::ast::OperationType;

pub(super) struct RootTypesValidator<'a> {
    errors: Vec<GraphQLError>,
    schema: &'a Schema,
}

impl<'a> RootTypesValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            schema,
        }
    }

    /// A query root object type is required; mutation and subscription roots
    /// are optional but must be object types when given.
    ///
    /// https://spec.graphql.org/October2021/#sec-Root-Operation-Types
    pub fn validate(mut self) -> Vec<GraphQLError> {
        let schema_loc = self.schema.get_ast_node().and_then(|node| node.loc.as_ref());
        match self.schema.root_type_name(OperationType::Query) {
            None => self.errors.push(
                GraphQLError::new("Query root type must be provided.").with_node(schema_loc),
            ),
            Some(name) => self.check_is_object(OperationType::Query, name),
        }
        for operation in [OperationType::Mutation, OperationType::Subscription] {
            if let Some(name) = self.schema.root_type_name(operation) {
                self.check_is_object(operation, name);
            }
        }
        self.errors
    }

    fn check_is_object(&mut self, operation: OperationType, name: &str) {
        let Some(type_) = self.schema.get_type(name) else {
            return;
        };
        if type_.as_object().is_some() {
            return;
        }
        let (label, if_provided) = match operation {
            OperationType::Query => ("Query", ""),
            OperationType::Mutation => ("Mutation", " if provided"),
            OperationType::Subscription => ("Subscription", " if provided"),
        };
        self.errors.push(
            GraphQLError::new(format!(
                "{label} root type must be Object type{if_provided}, it cannot be {name}.",
            ))
            .with_node(type_.ast_loc()),
        );
    }
}
