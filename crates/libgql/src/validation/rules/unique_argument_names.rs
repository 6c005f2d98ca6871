use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

#[derive(Debug, Default)]
pub struct UniqueArgumentNamesRule;

impl UniqueArgumentNamesRule {
    fn check_arguments(ctx: &mut ValidationContext<'_>, arguments: &[ast::Argument]) {
        let mut arguments_by_name: IndexMap<&str, Vec<&ast::Argument>> = IndexMap::new();
        for argument in arguments {
            arguments_by_name.entry(argument.name.as_str()).or_default().push(argument);
        }
        for (name, arguments) in arguments_by_name {
            if arguments.len() > 1 {
                ctx.report_error(
                    GraphQLError::new(format!("There can be only one argument named \"{name}\"."))
                        .with_nodes(arguments.iter().map(|argument| argument.loc.as_ref())),
                );
            }
        }
    }
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueArgumentNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Field(field) => Self::check_arguments(ctx, &field.arguments),
            AstNodeRef::Directive(directive) => Self::check_arguments(ctx, &directive.arguments),
            _ => (),
        }
        VisitAction::Continue
    }
}
