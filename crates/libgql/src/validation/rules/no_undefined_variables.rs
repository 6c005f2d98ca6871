use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every variable used by an operation, including inside the fragments it
/// spreads, is defined by that operation.
#[derive(Debug, Default)]
pub struct NoUndefinedVariablesRule;

impl<'a> Visitor<ValidationContext<'a>> for NoUndefinedVariablesRule {
    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::OperationDefinition(operation) = node else {
            return VisitAction::Continue;
        };
        let defined = operation
            .variable_definitions
            .iter()
            .map(|definition| definition.name.as_str())
            .collect::<HashSet<_>>();
        for usage in ctx.get_recursive_variable_usages(operation) {
            if defined.contains(usage.name.as_str()) {
                continue;
            }
            let message = match &operation.name {
                Some(op_name) => format!(
                    "Variable \"${}\" is not defined by operation \"{op_name}\".",
                    usage.name,
                ),
                None => format!("Variable \"${}\" is not defined.", usage.name),
            };
            ctx.report_error(
                GraphQLError::new(message).with_nodes([usage.loc.as_ref(), operation.loc.as_ref()]),
            );
        }
        VisitAction::Continue
    }
}
