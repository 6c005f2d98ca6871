use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every fragment must be used, directly or indirectly, by some operation.
#[derive(Debug, Default)]
pub struct NoUnusedFragmentsRule;

impl<'a> Visitor<ValidationContext<'a>> for NoUnusedFragmentsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, _ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::OperationDefinition(_) | AstNodeRef::FragmentDefinition(_) => {
                VisitAction::Skip
            },
            _ => VisitAction::Continue,
        }
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        if !matches!(node, AstNodeRef::Document(_)) {
            return VisitAction::Continue;
        }
        let document = ctx.document();
        let mut used_fragment_names = HashSet::new();
        for operation in document.operations() {
            for fragment in ctx.get_recursively_referenced_fragments(operation) {
                used_fragment_names.insert(fragment.name.as_str());
            }
        }
        for fragment in document.fragments() {
            if !used_fragment_names.contains(fragment.name.as_str()) {
                ctx.report_error(
                    GraphQLError::new(format!("Fragment \"{}\" is never used.", fragment.name))
                        .with_node(fragment.loc.as_ref()),
                );
            }
        }
        VisitAction::Continue
    }
}
