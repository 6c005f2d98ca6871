use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast::Location;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct UniqueFragmentNamesRule {
    known_fragment_names: HashMap<String, Option<Location>>,
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueFragmentNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::FragmentDefinition(fragment) => {
                match self.known_fragment_names.get(&fragment.name) {
                    Some(first) => ctx.report_error(
                        GraphQLError::new(format!(
                            "There can be only one fragment named \"{}\".",
                            fragment.name,
                        ))
                        .with_nodes([first.as_ref(), fragment.loc.as_ref()]),
                    ),
                    None => {
                        self.known_fragment_names
                            .insert(fragment.name.clone(), fragment.loc.clone());
                    },
                }
                VisitAction::Skip
            },
            AstNodeRef::OperationDefinition(_) => VisitAction::Skip,
            _ => VisitAction::Continue,
        }
    }
}
