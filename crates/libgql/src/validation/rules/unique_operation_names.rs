use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast::Location;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct UniqueOperationNamesRule {
    known_operation_names: HashMap<String, Option<Location>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueOperationNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::OperationDefinition(operation) => {
                if let Some(name) = &operation.name {
                    match self.known_operation_names.get(name) {
                        Some(first) => ctx.report_error(
                            GraphQLError::new(format!(
                                "There can be only one operation named \"{name}\".",
                            ))
                            .with_nodes([first.as_ref(), operation.loc.as_ref()]),
                        ),
                        None => {
                            self.known_operation_names
                                .insert(name.clone(), operation.loc.clone());
                        },
                    }
                }
                VisitAction::Skip
            },
            AstNodeRef::FragmentDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
