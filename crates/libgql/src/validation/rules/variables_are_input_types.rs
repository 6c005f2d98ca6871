use crate::error::GraphQLError;
use crate::utilities::type_from_ast;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Variables may only be declared with scalar, enum or input object types.
#[derive(Debug, Default)]
pub struct VariablesAreInputTypesRule;

impl<'a> Visitor<ValidationContext<'a>> for VariablesAreInputTypesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::VariableDefinition(definition) = node else {
            return VisitAction::Continue;
        };
        let schema = ctx.schema();
        let is_non_input = type_from_ast(schema, &definition.var_type)
            .and_then(|type_ref| schema.get_named_type(&type_ref))
            .is_some_and(|type_| !type_.is_input_type());
        if is_non_input {
            ctx.report_error(
                GraphQLError::new(format!(
                    "Variable \"${}\" cannot be non-input type \"{}\".",
                    definition.name, definition.var_type,
                ))
                .with_node(definition.var_type.loc()),
            );
        }
        VisitAction::Continue
    }
}
