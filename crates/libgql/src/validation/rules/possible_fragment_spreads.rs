use crate::error::GraphQLError;
use crate::types::GraphQLType;
use crate::utilities::do_types_overlap;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// A fragment may only be spread where some object could satisfy both the
/// fragment's type condition and the enclosing type.
#[derive(Debug, Default)]
pub struct PossibleFragmentSpreadsRule;

impl PossibleFragmentSpreadsRule {
    /// Both types when they are composite and share no possible object
    /// type.
    fn disjoint_types<'a>(
        ctx: &ValidationContext<'a>,
        fragment_type_name: &str,
    ) -> Option<(&'a GraphQLType, &'a GraphQLType)> {
        let schema = ctx.schema();
        let fragment_type = schema
            .get_type(fragment_type_name)
            .filter(|type_| type_.is_composite_type())?;
        let parent_type = ctx.get_parent_type().filter(|type_| type_.is_composite_type())?;
        (!do_types_overlap(schema, fragment_type, parent_type))
            .then_some((fragment_type, parent_type))
    }
}

impl<'a> Visitor<ValidationContext<'a>> for PossibleFragmentSpreadsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::InlineFragment(inline) => {
                let Some(type_condition) = &inline.type_condition else {
                    return VisitAction::Continue;
                };
                if let Some((fragment_type, parent_type)) =
                    Self::disjoint_types(ctx, &type_condition.name)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot be spread here as objects of type \"{parent_type}\" \
                             can never be of type \"{fragment_type}\".",
                        ))
                        .with_node(inline.loc.as_ref()),
                    );
                }
            },
            AstNodeRef::FragmentSpread(spread) => {
                let Some(fragment) = ctx.get_fragment(&spread.name) else {
                    return VisitAction::Continue;
                };
                if let Some((fragment_type, parent_type)) =
                    Self::disjoint_types(ctx, &fragment.type_condition.name)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment \"{}\" cannot be spread here as objects of type \
                             \"{parent_type}\" can never be of type \"{fragment_type}\".",
                            spread.name,
                        ))
                        .with_node(spread.loc.as_ref()),
                    );
                }
            },
            _ => (),
        }
        VisitAction::Continue
    }
}
