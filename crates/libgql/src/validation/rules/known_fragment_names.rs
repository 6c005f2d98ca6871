use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

#[derive(Debug, Default)]
pub struct KnownFragmentNamesRule;

impl<'a> Visitor<ValidationContext<'a>> for KnownFragmentNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        if let AstNodeRef::FragmentSpread(spread) = node
            && ctx.get_fragment(&spread.name).is_none()
        {
            ctx.report_error(
                GraphQLError::new(format!("Unknown fragment \"{}\".", spread.name))
                    .with_node(spread.loc.as_ref()),
            );
        }
        VisitAction::Continue
    }
}
