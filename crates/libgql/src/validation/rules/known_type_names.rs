use crate::error::GraphQLError;
use crate::types::SPECIFIED_SCALAR_NAMES;
use crate::types::is_specified_scalar_type;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashSet;

/// Every type named in the document is defined by the schema or by the
/// document itself.
#[derive(Debug, Default)]
pub struct KnownTypeNamesRule {
    defined_types: HashSet<String>,
    /// Depth of type-system definitions enclosing the current node.
    type_system_depth: usize,
}

impl<'a> Visitor<ValidationContext<'a>> for KnownTypeNamesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Document(document) => {
                self.defined_types = document
                    .definitions
                    .iter()
                    .filter_map(|definition| match definition {
                        ast::Definition::Type(def) => Some(def.name().to_string()),
                        _ => None,
                    })
                    .collect();
            },
            AstNodeRef::SchemaDefinition(_)
            | AstNodeRef::SchemaExtension(_)
            | AstNodeRef::TypeDefinition(_)
            | AstNodeRef::TypeExtension(_)
            | AstNodeRef::DirectiveDefinition(_) => {
                self.type_system_depth += 1;
            },
            AstNodeRef::NamedType(named_type) => {
                let type_name = named_type.name.as_str();
                let is_sdl = self.type_system_depth > 0;
                if ctx.schema().get_type(type_name).is_some()
                    || self.defined_types.contains(type_name)
                    || (is_sdl && is_specified_scalar_type(type_name))
                {
                    return VisitAction::Continue;
                }

                let mut type_names = ctx
                    .schema()
                    .type_map()
                    .keys()
                    .map(String::as_str)
                    .chain(self.defined_types.iter().map(String::as_str))
                    .collect::<Vec<_>>();
                if is_sdl {
                    type_names.extend(SPECIFIED_SCALAR_NAMES);
                }
                let suggestions = suggestion_list(type_name, &type_names);
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Unknown type \"{type_name}\".{}",
                        did_you_mean(None, &suggestions),
                    ))
                    .with_node(named_type.loc.as_ref()),
                );
            },
            _ => (),
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>, _ctx: &mut ValidationContext<'a>) -> VisitAction {
        if matches!(
            node,
            AstNodeRef::SchemaDefinition(_)
                | AstNodeRef::SchemaExtension(_)
                | AstNodeRef::TypeDefinition(_)
                | AstNodeRef::TypeExtension(_)
                | AstNodeRef::DirectiveDefinition(_)
        ) {
            self.type_system_depth -= 1;
        }
        VisitAction::Continue
    }
}
