use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::ast::OperationType;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashSet;

/// A subscription selects exactly one root field, and that field is not an
/// introspection field.
#[derive(Debug, Default)]
pub struct SingleFieldSubscriptionsRule;

impl<'a> Visitor<ValidationContext<'a>> for SingleFieldSubscriptionsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::OperationDefinition(operation) = node else {
            return VisitAction::Continue;
        };
        if operation.operation != OperationType::Subscription {
            return VisitAction::Skip;
        }

        let subject = match &operation.name {
            Some(name) => format!("Subscription \"{name}\""),
            None => "Anonymous Subscription".to_string(),
        };
        let mut fields = IndexMap::new();
        let mut visited_fragments = HashSet::new();
        collect_root_fields(ctx, &operation.selection_set, &mut fields, &mut visited_fragments);

        let mut errors = vec![];
        if fields.len() > 1 {
            errors.push(
                GraphQLError::new(format!("{subject} must select only one top level field."))
                    .with_nodes(
                        fields
                            .values()
                            .skip(1)
                            .flatten()
                            .map(|field| field.loc.as_ref()),
                    ),
            );
        }
        for field_nodes in fields.values() {
            if field_nodes[0].name.starts_with("__") {
                errors.push(
                    GraphQLError::new(format!(
                        "{subject} must not select an introspection top level field.",
                    ))
                    .with_nodes(field_nodes.iter().map(|field| field.loc.as_ref())),
                );
            }
        }
        for error in errors {
            ctx.report_error(error);
        }
        VisitAction::Skip
    }
}

/// Groups the root fields of a selection set by response key, looking
/// through fragments but ignoring `@skip` and `@include`.
fn collect_root_fields<'a: 'n, 'n>(
    ctx: &ValidationContext<'a>,
    selection_set: &'n ast::SelectionSet,
    fields: &mut IndexMap<&'n str, Vec<&'n ast::Field>>,
    visited_fragments: &mut HashSet<String>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                fields.entry(field.response_key()).or_default().push(field);
            },
            ast::Selection::InlineFragment(inline) => {
                collect_root_fields(ctx, &inline.selection_set, fields, visited_fragments);
            },
            ast::Selection::FragmentSpread(spread) => {
                if !visited_fragments.insert(spread.name.clone()) {
                    continue;
                }
                if let Some(fragment) = ctx.get_fragment(&spread.name) {
                    collect_root_fields(ctx, &fragment.selection_set, fields, visited_fragments);
                }
            },
        }
    }
}
