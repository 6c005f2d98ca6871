use crate::execution::values::should_include_node;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::value::Variables;
use indexmap::IndexMap;
use libgql_parser::ast;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::collections::HashSet;

/// Field nodes grouped by response key, in the order the keys first appear.
///
/// A key is usually selected by a single node.
pub type GroupedFields<'a> = IndexMap<&'a str, SmallVec<[&'a ast::Field; 1]>>;

/// Everything field collection reads from the execution in progress.
pub(crate) struct CollectContext<'c, 'a> {
    pub schema: &'a Schema,
    pub fragments: &'c HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub variables: &'c Variables,
}

/// Flattens a selection set into the fields selected on an object of
/// `runtime_type`, following fragment spreads and inline fragments whose
/// type condition matches and honoring `@skip` and `@include`.
///
/// https://spec.graphql.org/October2021/#CollectFields()
pub(crate) fn collect_fields<'a>(
    ctx: &CollectContext<'_, 'a>,
    runtime_type: &GraphQLType,
    selection_set: &'a ast::SelectionSet,
) -> GroupedFields<'a> {
    let mut fields = GroupedFields::new();
    let mut visited_fragments = HashSet::new();
    collect_into(ctx, runtime_type, selection_set, &mut fields, &mut visited_fragments);
    fields
}

/// Merges the sub-selections of every node of one field.
pub(crate) fn collect_subfields<'a>(
    ctx: &CollectContext<'_, 'a>,
    return_type: &GraphQLType,
    field_nodes: &[&'a ast::Field],
) -> GroupedFields<'a> {
    let mut fields = GroupedFields::new();
    let mut visited_fragments = HashSet::new();
    for node in field_nodes {
        if let Some(selection_set) = &node.selection_set {
            collect_into(ctx, return_type, selection_set, &mut fields, &mut visited_fragments);
        }
    }
    fields
}

fn collect_into<'a>(
    ctx: &CollectContext<'_, 'a>,
    runtime_type: &GraphQLType,
    selection_set: &'a ast::SelectionSet,
    fields: &mut GroupedFields<'a>,
    visited_fragments: &mut HashSet<&'a str>,
) {
    for selection in &selection_set.selections {
        match selection {
            ast::Selection::Field(field) => {
                if !should_include_node(ctx.schema, &field.directives, ctx.variables) {
                    continue;
                }
                fields.entry(field.response_key()).or_default().push(field);
            },
            ast::Selection::InlineFragment(inline) => {
                let type_condition = inline.type_condition.as_ref();
                if !should_include_node(ctx.schema, &inline.directives, ctx.variables)
                    || !does_fragment_condition_match(ctx.schema, type_condition, runtime_type)
                {
                    continue;
                }
                collect_into(ctx, runtime_type, &inline.selection_set, fields, visited_fragments);
            },
            ast::Selection::FragmentSpread(spread) => {
                if visited_fragments.contains(spread.name.as_str())
                    || !should_include_node(ctx.schema, &spread.directives, ctx.variables)
                {
                    continue;
                }
                visited_fragments.insert(spread.name.as_str());
                let Some(&fragment) = ctx.fragments.get(spread.name.as_str()) else {
                    continue;
                };
                let type_condition = Some(&fragment.type_condition);
                if !does_fragment_condition_match(ctx.schema, type_condition, runtime_type) {
                    continue;
                }
                collect_into(ctx, runtime_type, &fragment.selection_set, fields, visited_fragments);
            },
        }
    }
}

fn does_fragment_condition_match(
    schema: &Schema,
    type_condition: Option<&ast::NamedType>,
    runtime_type: &GraphQLType,
) -> bool {
    let Some(type_condition) = type_condition else {
        return true;
    };
    let Some(conditional_type) = schema.get_type(&type_condition.name) else {
        return false;
    };
    if conditional_type.name() == runtime_type.name() {
        return true;
    }
    conditional_type.is_abstract_type() && schema.is_sub_type(conditional_type, runtime_type.name())
}
