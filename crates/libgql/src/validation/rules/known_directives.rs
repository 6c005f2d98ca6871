use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::ast::DirectiveLocation;
use libgql_parser::ast::OperationType;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

/// Every directive used is defined, and is used only at one of the
/// locations its definition allows.
#[derive(Debug, Default)]
pub struct KnownDirectivesRule {
    locations_by_name: HashMap<String, Vec<DirectiveLocation>>,
    /// Locations of the enclosing nodes that can carry directives,
    /// innermost last.
    location_stack: Vec<DirectiveLocation>,
}

impl KnownDirectivesRule {
    fn location_of(&self, node: AstNodeRef<'_>) -> Option<DirectiveLocation> {
        let location = match node {
            AstNodeRef::OperationDefinition(operation) => match operation.operation {
                OperationType::Query => DirectiveLocation::Query,
                OperationType::Mutation => DirectiveLocation::Mutation,
                OperationType::Subscription => DirectiveLocation::Subscription,
            },
            AstNodeRef::Field(_) => DirectiveLocation::Field,
            AstNodeRef::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
            AstNodeRef::InlineFragment(_) => DirectiveLocation::InlineFragment,
            AstNodeRef::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
            AstNodeRef::VariableDefinition(_) => DirectiveLocation::VariableDefinition,
            AstNodeRef::SchemaDefinition(_) | AstNodeRef::SchemaExtension(_) => {
                DirectiveLocation::Schema
            },
            AstNodeRef::TypeDefinition(def) | AstNodeRef::TypeExtension(def) => match def {
                ast::TypeDefinition::Scalar(_) => DirectiveLocation::Scalar,
                ast::TypeDefinition::Object(_) => DirectiveLocation::Object,
                ast::TypeDefinition::Interface(_) => DirectiveLocation::Interface,
                ast::TypeDefinition::Union(_) => DirectiveLocation::Union,
                ast::TypeDefinition::Enum(_) => DirectiveLocation::Enum,
                ast::TypeDefinition::InputObject(_) => DirectiveLocation::InputObject,
            },
            AstNodeRef::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
            AstNodeRef::InputValueDefinition(_) => {
                match self.location_stack.last() {
                    Some(DirectiveLocation::InputObject) => DirectiveLocation::InputFieldDefinition,
                    _ => DirectiveLocation::ArgumentDefinition,
                }
            },
            AstNodeRef::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
            // Directive definitions hold argument definitions but no
            // directives of their own.
            AstNodeRef::DirectiveDefinition(_) => DirectiveLocation::ArgumentDefinition,
            _ => return None,
        };
        Some(location)
    }
}

impl<'a> Visitor<ValidationContext<'a>> for KnownDirectivesRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Document(document) => {
                self.locations_by_name = ctx
                    .schema()
                    .directives()
                    .iter()
                    .map(|directive| (directive.name().to_string(), directive.locations().to_vec()))
                    .collect();
                for definition in &document.definitions {
                    if let ast::Definition::Directive(def) = definition {
                        self.locations_by_name.insert(def.name.clone(), def.locations.clone());
                    }
                }
            },
            AstNodeRef::Directive(directive) => {
                let Some(locations) = self.locations_by_name.get(&directive.name) else {
                    ctx.report_error(
                        GraphQLError::new(format!("Unknown directive \"@{}\".", directive.name))
                            .with_node(directive.loc.as_ref()),
                    );
                    return VisitAction::Continue;
                };
                if let Some(candidate) = self.location_stack.last()
                    && !locations.contains(candidate)
                {
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Directive \"@{}\" may not be used on {candidate}.",
                            directive.name,
                        ))
                        .with_node(directive.loc.as_ref()),
                    );
                }
            },
            _ => {
                if let Some(location) = self.location_of(node) {
                    self.location_stack.push(location);
                }
            },
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>, _ctx: &mut ValidationContext<'a>) -> VisitAction {
        if !matches!(node, AstNodeRef::Directive(_)) && self.location_of(node).is_some() {
            self.location_stack.pop();
        }
        VisitAction::Continue
    }
}
