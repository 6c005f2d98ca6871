use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::utilities::did_you_mean;
use crate::utilities::natural_compare;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::cmp::Ordering;

/// Every selected field is defined on the type it is selected from.
#[derive(Debug, Default)]
pub struct FieldsOnCorrectTypeRule;

impl<'a> Visitor<ValidationContext<'a>> for FieldsOnCorrectTypeRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::Field(field) = node else {
            return VisitAction::Continue;
        };
        let Some(parent_type) = ctx.get_parent_type() else {
            return VisitAction::Continue;
        };
        if ctx.get_field_def().is_some() {
            return VisitAction::Continue;
        }

        let schema = ctx.schema();
        let field_name = field.name.as_str();
        // Prefer suggesting fragments on types that do have the field over
        // suggesting similarly named fields.
        let type_suggestions = suggested_type_names(schema, parent_type, field_name);
        let hint = if type_suggestions.is_empty() {
            did_you_mean(None, &suggested_field_names(parent_type, field_name))
        } else {
            did_you_mean(Some("to use an inline fragment on"), &type_suggestions)
        };
        ctx.report_error(
            GraphQLError::new(format!(
                "Cannot query field \"{field_name}\" on type \"{}\".{hint}",
                parent_type.name(),
            ))
            .with_node(field.loc.as_ref()),
        );
        VisitAction::Continue
    }
}

/// The possible types of an abstract type that define `field_name`, plus the
/// interfaces they share that define it, most widely implemented first.
fn suggested_type_names(schema: &Schema, type_: &GraphQLType, field_name: &str) -> Vec<String> {
    if !type_.is_abstract_type() {
        return vec![];
    }

    let mut usage_counts: IndexMap<&str, usize> = IndexMap::new();
    for possible_type in schema.get_possible_types(type_) {
        if possible_type.get_field(field_name).is_none() {
            continue;
        }
        usage_counts.insert(possible_type.name(), 1);
        for iface_name in possible_type.interfaces() {
            let defines_field = schema
                .get_type(iface_name)
                .and_then(GraphQLType::as_interface)
                .is_some_and(|iface| iface.get_field(field_name).is_some());
            if defines_field {
                *usage_counts.entry(iface_name.as_str()).or_default() += 1;
            }
        }
    }

    let mut suggested = usage_counts.keys().copied().collect::<Vec<_>>();
    suggested.sort_by(|name_a, name_b| {
        usage_counts[name_b].cmp(&usage_counts[name_a]).then_with(|| {
            let type_a = schema.get_type(name_a);
            let type_b = schema.get_type(name_b);
            // Super types before their subtypes.
            if let Some(iface_a) = type_a.filter(|type_| type_.as_interface().is_some())
                && schema.is_sub_type(iface_a, name_b)
            {
                return Ordering::Less;
            }
            if let Some(iface_b) = type_b.filter(|type_| type_.as_interface().is_some())
                && schema.is_sub_type(iface_b, name_a)
            {
                return Ordering::Greater;
            }
            natural_compare(name_a, name_b)
        })
    });
    suggested.into_iter().map(str::to_string).collect()
}

fn suggested_field_names(type_: &GraphQLType, field_name: &str) -> Vec<String> {
    match type_.fields() {
        Some(fields) => {
            let names = fields.keys().map(String::as_str).collect::<Vec<_>>();
            suggestion_list(field_name, &names)
        },
        None => vec![],
    }
}
