use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// An anonymous operation must be the only operation in its document.
#[derive(Debug, Default)]
pub struct LoneAnonymousOperationRule {
    operation_count: usize,
}

impl<'a> Visitor<ValidationContext<'a>> for LoneAnonymousOperationRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Document(document) => {
                self.operation_count = document.operations().count();
                VisitAction::Continue
            },
            AstNodeRef::OperationDefinition(operation) => {
                if operation.name.is_none() && self.operation_count > 1 {
                    ctx.report_error(
                        GraphQLError::new(
                            "This anonymous operation must be the only defined operation.",
                        )
                        .with_node(operation.loc.as_ref()),
                    );
                }
                VisitAction::Continue
            },
            _ => VisitAction::Continue,
        }
    }
}
