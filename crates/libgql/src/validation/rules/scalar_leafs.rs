use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Leaf fields have no selection set and composite fields have one.
#[derive(Debug, Default)]
pub struct ScalarLeafsRule;

impl<'a> Visitor<ValidationContext<'a>> for ScalarLeafsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::Field(field) = node else {
            return VisitAction::Continue;
        };
        let Some(type_ref) = ctx.get_type().cloned() else {
            return VisitAction::Continue;
        };
        let Some(named_type) = ctx.schema().get_named_type(&type_ref) else {
            return VisitAction::Continue;
        };

        if named_type.is_leaf_type() {
            if let Some(selection_set) = &field.selection_set {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Field \"{}\" must not have a selection since type \"{type_ref}\" has no \
                         subfields.",
                        field.name,
                    ))
                    .with_node(selection_set.loc.as_ref()),
                );
            }
        } else if field.selection_set.is_none() {
            ctx.report_error(
                GraphQLError::new(format!(
                    "Field \"{0}\" of type \"{type_ref}\" must have a selection of subfields. Did \
                     you mean \"{0} {{ ... }}\"?",
                    field.name,
                ))
                .with_node(field.loc.as_ref()),
            );
        }
        VisitAction::Continue
    }
}
