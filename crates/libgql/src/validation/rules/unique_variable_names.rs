use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

#[derive(Debug, Default)]
pub struct UniqueVariableNamesRule;

impl<'a> Visitor<ValidationContext<'a>> for UniqueVariableNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::OperationDefinition(operation) = node else {
            return VisitAction::Continue;
        };
        let mut definitions_by_name: IndexMap<&str, Vec<_>> = IndexMap::new();
        for definition in &operation.variable_definitions {
            definitions_by_name
                .entry(definition.name.as_str())
                .or_default()
                .push(definition);
        }
        for (name, definitions) in definitions_by_name {
            if definitions.len() > 1 {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "There can be only one variable named \"${name}\".",
                    ))
                    .with_nodes(definitions.iter().map(|definition| definition.loc.as_ref())),
                );
            }
        }
        VisitAction::Continue
    }
}
