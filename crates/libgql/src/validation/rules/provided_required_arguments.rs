use crate::error::GraphQLError;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;
use std::collections::HashMap;

/// Non-null arguments without a default are always provided, on fields and
/// on directives.
#[derive(Debug, Default)]
pub struct ProvidedRequiredArgumentsRule {
    /// Required arguments of every known directive, as `(name, type)`.
    required_directive_args: HashMap<String, Vec<(String, String)>>,
}

impl<'a> Visitor<ValidationContext<'a>> for ProvidedRequiredArgumentsRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        if let AstNodeRef::Document(document) = node {
            self.required_directive_args = ctx
                .schema()
                .directives()
                .iter()
                .map(|directive| {
                    let required = directive
                        .args()
                        .values()
                        .filter(|arg| arg.is_required())
                        .map(|arg| (arg.name().to_string(), arg.ty().to_string()))
                        .collect();
                    (directive.name().to_string(), required)
                })
                .collect();
            for definition in &document.definitions {
                if let ast::Definition::Directive(def) = definition {
                    let required = def
                        .arguments
                        .iter()
                        .filter(|arg| arg.value_type.is_non_null() && arg.default_value.is_none())
                        .map(|arg| (arg.name.clone(), arg.value_type.to_string()))
                        .collect();
                    self.required_directive_args.insert(def.name.clone(), required);
                }
            }
        }
        VisitAction::Continue
    }

    fn leave(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Field(field) => {
                let Some(field_def) = ctx.get_field_def() else {
                    return VisitAction::Continue;
                };
                for arg_def in field_def.args().values() {
                    let provided = field.arguments.iter().any(|arg| arg.name == arg_def.name());
                    if !provided && arg_def.is_required() {
                        ctx.report_error(
                            GraphQLError::new(format!(
                                "Field \"{}\" argument \"{}\" of type \"{}\" is required, but it \
                                 was not provided.",
                                field_def.name(),
                                arg_def.name(),
                                arg_def.ty(),
                            ))
                            .with_node(field.loc.as_ref()),
                        );
                    }
                }
            },
            AstNodeRef::Directive(directive) => {
                let Some(required_args) = self.required_directive_args.get(&directive.name) else {
                    return VisitAction::Continue;
                };
                for (arg_name, arg_type) in required_args {
                    if directive.argument(arg_name).is_none() {
                        ctx.report_error(
                            GraphQLError::new(format!(
                                "Directive \"@{}\" argument \"{arg_name}\" of type \"{arg_type}\" \
                                 is required, but it was not provided.",
                                directive.name,
                            ))
                            .with_node(directive.loc.as_ref()),
                        );
                    }
                }
            },
            _ => (),
        }
        VisitAction::Continue
    }
}

