use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// A document submitted for execution may only contain operations and
/// fragments.
#[derive(Debug, Default)]
pub struct ExecutableDefinitionsRule;

impl<'a> Visitor<ValidationContext<'a>> for ExecutableDefinitionsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        let AstNodeRef::Document(document) = node else {
            return VisitAction::Continue;
        };
        for definition in &document.definitions {
            let def_name = match definition {
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => continue,
                ast::Definition::Schema(_) | ast::Definition::SchemaExtension(_) => "schema",
                ast::Definition::Type(def) | ast::Definition::TypeExtension(def) => def.name(),
                ast::Definition::Directive(def) => &def.name,
            };
            ctx.report_error(
                GraphQLError::new(format!("The \"{def_name}\" definition is not executable."))
                    .with_node(definition.loc()),
            );
        }
        VisitAction::Skip
    }
}
