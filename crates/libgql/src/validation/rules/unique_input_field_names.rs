use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::ast::Location;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct UniqueInputFieldNamesRule;

impl<'a> Visitor<ValidationContext<'a>> for UniqueInputFieldNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::Value(ast::Value::Object { fields, .. }) = node else {
            return VisitAction::Continue;
        };
        let mut known_names: HashMap<&str, Option<&Location>> = HashMap::new();
        for field in fields {
            match known_names.get(field.name.as_str()) {
                Some(first) => ctx.report_error(
                    GraphQLError::new(format!(
                        "There can be only one input field named \"{}\".",
                        field.name,
                    ))
                    .with_nodes([*first, field.loc.as_ref()]),
                ),
                None => {
                    known_names.insert(&field.name, field.loc.as_ref());
                },
            }
        }
        VisitAction::Continue
    }
}
