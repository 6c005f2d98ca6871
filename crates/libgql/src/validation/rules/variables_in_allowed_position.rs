use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::TypeRef;
use crate::utilities::is_type_sub_type_of;
use crate::utilities::type_from_ast;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Every variable is used only where its declared type is accepted.
#[derive(Debug, Default)]
pub struct VariablesInAllowedPositionRule;

impl<'a> Visitor<ValidationContext<'a>> for VariablesInAllowedPositionRule {
    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::OperationDefinition(operation) = node else {
            return VisitAction::Continue;
        };
        let schema = ctx.schema();
        for usage in ctx.get_recursive_variable_usages(operation) {
            let Some(location_type) = &usage.type_ref else {
                continue;
            };
            let Some(definition) = operation
                .variable_definitions
                .iter()
                .find(|definition| definition.name == usage.name)
            else {
                continue;
            };
            let Some(var_type) = type_from_ast(schema, &definition.var_type) else {
                continue;
            };
            if !is_allowed_usage(
                schema,
                &var_type,
                definition.default_value.as_ref(),
                location_type,
                usage.has_location_default,
            ) {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Variable \"${}\" of type \"{var_type}\" used in position expecting type \
                         \"{location_type}\".",
                        usage.name,
                    ))
                    .with_nodes([definition.loc.as_ref(), usage.loc.as_ref()]),
                );
            }
        }
        VisitAction::Continue
    }
}

/// A nullable variable may flow into a non-null position only when a
/// non-null default exists on the variable or at the position.
fn is_allowed_usage(
    schema: &Schema,
    var_type: &TypeRef,
    var_default: Option<&ast::Value>,
    location_type: &TypeRef,
    has_location_default: bool,
) -> bool {
    if let TypeRef::NonNull(nullable_location_type) = location_type
        && !var_type.is_non_null()
    {
        let has_non_null_var_default = var_default.is_some_and(|value| !value.is_null());
        if !has_non_null_var_default && !has_location_default {
            return false;
        }
        return is_type_sub_type_of(schema, var_type, nullable_location_type);
    }
    is_type_sub_type_of(schema, var_type, location_type)
}
