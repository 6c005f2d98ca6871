use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Fragments may only condition on object, interface or union types.
#[derive(Debug, Default)]
pub struct FragmentsOnCompositeTypesRule;

impl FragmentsOnCompositeTypesRule {
    fn is_non_composite(ctx: &ValidationContext<'_>, type_condition: &ast::NamedType) -> bool {
        ctx.schema()
            .get_type(&type_condition.name)
            .is_some_and(|type_| !type_.is_composite_type())
    }
}

impl<'a> Visitor<ValidationContext<'a>> for FragmentsOnCompositeTypesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::InlineFragment(inline) => {
                if let Some(type_condition) = &inline.type_condition
                    && Self::is_non_composite(ctx, type_condition)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment cannot condition on non composite type \"{}\".",
                            type_condition.name,
                        ))
                        .with_node(type_condition.loc.as_ref()),
                    );
                }
            },
            AstNodeRef::FragmentDefinition(fragment) => {
                if Self::is_non_composite(ctx, &fragment.type_condition) {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Fragment \"{}\" cannot condition on non composite type \"{}\".",
                            fragment.name, fragment.type_condition.name,
                        ))
                        .with_node(fragment.type_condition.loc.as_ref()),
                    );
                }
            },
            _ => (),
        }
        VisitAction::Continue
    }
}
