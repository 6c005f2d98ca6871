use crate::error::GraphQLError;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Every argument passed to a field or directive is defined by it.
#[derive(Debug, Default)]
pub struct KnownArgumentNamesRule;

impl<'a> Visitor<ValidationContext<'a>> for KnownArgumentNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::Argument(argument) = node else {
            return VisitAction::Continue;
        };
        if ctx.get_argument().is_some() {
            return VisitAction::Continue;
        }

        let arg_name = argument.name.as_str();
        let message = if ctx.is_in_directive() {
            // Unknown directives are reported on their own.
            let Some(directive) = ctx.get_directive() else {
                return VisitAction::Continue;
            };
            let known_args = directive.args().keys().map(String::as_str).collect::<Vec<_>>();
            format!(
                "Unknown argument \"{arg_name}\" on directive \"@{}\".{}",
                directive.name(),
                did_you_mean(None, &suggestion_list(arg_name, &known_args)),
            )
        } else {
            let (Some(field_def), Some(parent_type)) = (ctx.get_field_def(), ctx.get_parent_type())
            else {
                return VisitAction::Continue;
            };
            let known_args = field_def.args().keys().map(String::as_str).collect::<Vec<_>>();
            format!(
                "Unknown argument \"{arg_name}\" on field \"{}.{}\".{}",
                parent_type.name(),
                field_def.name(),
                did_you_mean(None, &suggestion_list(arg_name, &known_args)),
            )
        };
        ctx.report_error(GraphQLError::new(message).with_node(argument.loc.as_ref()));
        VisitAction::Continue
    }
}
