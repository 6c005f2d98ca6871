use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::ast::Location;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

type SeenDirectives = HashMap<String, Option<Location>>;

/// A non-repeatable directive appears at most once per location.
///
/// A type definition and its extensions count as one location, as do the
/// schema definition and its extensions.
#[derive(Debug, Default)]
pub struct UniqueDirectivesPerLocationRule {
    /// Whether each known directive is unique (not repeatable).
    unique_by_name: HashMap<String, bool>,
    schema_directives: SeenDirectives,
    type_directives: HashMap<String, SeenDirectives>,
}

fn node_directives(node: AstNodeRef<'_>) -> Option<&[ast::Directive]> {
    let directives = match node {
        AstNodeRef::OperationDefinition(operation) => &operation.directives,
        AstNodeRef::VariableDefinition(definition) => &definition.directives,
        AstNodeRef::Field(field) => &field.directives,
        AstNodeRef::FragmentSpread(spread) => &spread.directives,
        AstNodeRef::InlineFragment(inline) => &inline.directives,
        AstNodeRef::FragmentDefinition(fragment) => &fragment.directives,
        AstNodeRef::SchemaDefinition(def) | AstNodeRef::SchemaExtension(def) => &def.directives,
        AstNodeRef::TypeDefinition(def) | AstNodeRef::TypeExtension(def) => def.directives(),
        AstNodeRef::FieldDefinition(def) => &def.directives,
        AstNodeRef::InputValueDefinition(def) => &def.directives,
        AstNodeRef::EnumValueDefinition(def) => &def.directives,
        _ => return None,
    };
    Some(directives)
}

impl<'a> Visitor<ValidationContext<'a>> for UniqueDirectivesPerLocationRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        if let AstNodeRef::Document(document) = node {
            self.unique_by_name = ctx
                .schema()
                .directives()
                .iter()
                .map(|directive| (directive.name().to_string(), !directive.is_repeatable()))
                .collect();
            for definition in &document.definitions {
                if let ast::Definition::Directive(def) = definition {
                    self.unique_by_name.insert(def.name.clone(), !def.repeatable);
                }
            }
            return VisitAction::Continue;
        }

        let Some(directives) = node_directives(node) else {
            return VisitAction::Continue;
        };
        let mut local_directives = SeenDirectives::new();
        let seen_directives = match node {
            AstNodeRef::SchemaDefinition(_) | AstNodeRef::SchemaExtension(_) => {
                &mut self.schema_directives
            },
            AstNodeRef::TypeDefinition(def) | AstNodeRef::TypeExtension(def) => {
                self.type_directives.entry(def.name().to_string()).or_default()
            },
            _ => &mut local_directives,
        };

        for directive in directives {
            if !self.unique_by_name.get(&directive.name).copied().unwrap_or(false) {
                continue;
            }
            match seen_directives.get(&directive.name) {
                Some(first) => ctx.report_error(
                    GraphQLError::new(format!(
                        "The directive \"@{}\" can only be used once at this location.",
                        directive.name,
                    ))
                    .with_nodes([first.as_ref(), directive.loc.as_ref()]),
                ),
                None => {
                    seen_directives.insert(directive.name.clone(), directive.loc.clone());
                },
            }
        }
        VisitAction::Continue
    }
}
