use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema::validate_schema::validate_name;
use crate::types::Directive;

pub(super) struct DirectiveValidator<'a> {
    directive: &'a Directive,
    errors: Vec<GraphQLError>,
    schema: &'a Schema,
}

impl<'a> DirectiveValidator<'a> {
    pub fn new(directive: &'a Directive, schema: &'a Schema) -> Self {
        Self {
            directive,
            errors: vec![],
            schema,
        }
    }

    /// https://spec.graphql.org/October2021/#sec-Type-System.Directives.Validation
    pub fn validate(mut self) -> Vec<GraphQLError> {
        let directive = self.directive;
        let loc = directive.get_ast_node().and_then(|node| node.loc.as_ref());
        self.errors.extend(validate_name(directive.name(), loc));

        if directive.locations().is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Directive @{} must include 1 or more locations.",
                    directive.name(),
                ))
                .with_node(loc),
            );
        }

        for arg in directive.args().values() {
            let arg_loc = arg.get_ast_node().and_then(|node| node.loc.as_ref());
            self.errors.extend(validate_name(arg.name(), arg_loc));

            let is_input_type = self
                .schema
                .get_named_type(arg.ty())
                .is_some_and(|type_| type_.is_input_type());
            if !is_input_type {
                let type_loc = arg.get_ast_node().and_then(|node| node.value_type.loc());
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of @{}({}:) must be Input Type but got: {}.",
                        directive.name(),
                        arg.name(),
                        arg.ty(),
                    ))
                    .with_node(type_loc),
                );
            }

            if arg.is_required() && arg.is_deprecated() {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Required argument @{}({}:) cannot be deprecated.",
                        directive.name(),
                        arg.name(),
                    ))
                    .with_node(arg_loc),
                );
            }
        }
        self.errors
    }
}
