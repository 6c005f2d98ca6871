use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct NoUnusedVariablesRule;

impl<'a> Visitor<ValidationContext<'a>> for NoUnusedVariablesRule {
    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::OperationDefinition(operation) = node else {
            return VisitAction::Continue;
        };
        let used = ctx
            .get_recursive_variable_usages(operation)
            .into_iter()
            .map(|usage| usage.name)
            .collect::<HashSet<_>>();
        for definition in &operation.variable_definitions {
            if used.contains(&definition.name) {
                continue;
            }
            let message = match &operation.name {
                Some(op_name) => format!(
                    "Variable \"${}\" is never used in operation \"{op_name}\".",
                    definition.name,
                ),
                None => format!("Variable \"${}\" is never used.", definition.name),
            };
            ctx.report_error(GraphQLError::new(message).with_node(definition.loc.as_ref()));
        }
        VisitAction::Continue
    }
}
