use crate::error::GraphQLError;
use crate::types::GraphQLType;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use crate::validation::ValidationContext;
use libgql_parser::ast;
use libgql_parser::visitor::AstNodeRef;
use libgql_parser::visitor::VisitAction;
use libgql_parser::visitor::Visitor;

/// Every literal value is valid for the input type expected where it
/// appears.
#[derive(Debug, Default)]
pub struct ValuesOfCorrectTypeRule;

impl ValuesOfCorrectTypeRule {
    /// Checks a literal in a position expecting a leaf type.
    fn check_leaf_value(ctx: &mut ValidationContext<'_>, node: &ast::Value) {
        let Some(location_type) = ctx.get_input_type().cloned() else {
            return;
        };
        let parse_result = match ctx.schema().get_named_type(&location_type) {
            Some(GraphQLType::Scalar(scalar)) => scalar.parse_literal(node, None),
            Some(GraphQLType::Enum(enum_type)) => enum_type.parse_literal(node),
            _ => {
                ctx.report_error(
                    GraphQLError::new(format!(
                        "Expected value of type \"{location_type}\", found {node}.",
                    ))
                    .with_node(node.loc()),
                );
                return;
            },
        };
        if let Err(message) = parse_result {
            ctx.report_error(
                GraphQLError::new(format!(
                    "Expected value of type \"{location_type}\", found {node}; {message}",
                ))
                .with_node(node.loc()),
            );
        }
    }
}

impl<'a> Visitor<ValidationContext<'a>> for ValuesOfCorrectTypeRule {
    fn enter(&mut self, node: AstNodeRef<'_>, ctx: &mut ValidationContext<'a>) -> VisitAction {
        match node {
            AstNodeRef::Value(value @ ast::Value::List { .. }) => {
                let is_list = ctx.get_parent_input_type().is_some_and(|type_ref| type_ref.is_list());
                if !is_list {
                    Self::check_leaf_value(ctx, value);
                    return VisitAction::Skip;
                }
            },
            AstNodeRef::Value(value @ ast::Value::Object { fields, .. }) => {
                let input_object = ctx
                    .get_input_type()
                    .and_then(|type_ref| ctx.schema().get_named_type(type_ref))
                    .and_then(GraphQLType::as_input_object);
                let Some(input_object) = input_object else {
                    Self::check_leaf_value(ctx, value);
                    return VisitAction::Skip;
                };
                for field_def in input_object.fields().values() {
                    let provided = fields.iter().any(|field| field.name == field_def.name());
                    if !provided && field_def.is_required() {
                        ctx.report_error(
                            GraphQLError::new(format!(
                                "Field \"{}.{}\" of required type \"{}\" was not provided.",
                                input_object.name(),
                                field_def.name(),
                                field_def.ty(),
                            ))
                            .with_node(value.loc()),
                        );
                    }
                }
            },
            AstNodeRef::ObjectField(object_field) => {
                if ctx.get_input_type().is_some() {
                    return VisitAction::Continue;
                }
                let parent_object = ctx
                    .get_parent_input_type()
                    .and_then(|type_ref| ctx.schema().get_named_type(type_ref))
                    .and_then(GraphQLType::as_input_object);
                if let Some(parent_object) = parent_object {
                    let field_names =
                        parent_object.fields().keys().map(String::as_str).collect::<Vec<_>>();
                    let suggestions = suggestion_list(&object_field.name, &field_names);
                    ctx.report_error(
                        GraphQLError::new(format!(
                            "Field \"{}\" is not defined by type \"{}\".{}",
                            object_field.name,
                            parent_object.name(),
                            did_you_mean(None, &suggestions),
                        ))
                        .with_node(object_field.loc.as_ref()),
                    );
                }
            },
            AstNodeRef::Value(value @ ast::Value::Null { .. }) => {
                if let Some(type_ref) = ctx.get_input_type()
                    && type_ref.is_non_null()
                {
                    let message = format!("Expected value of type \"{type_ref}\", found {value}.");
                    ctx.report_error(GraphQLError::new(message).with_node(value.loc()));
                }
            },
            AstNodeRef::Value(
                value @ (ast::Value::Int { .. }
                | ast::Value::Float { .. }
                | ast::Value::String { .. }
                | ast::Value::Boolean { .. }
                | ast::Value::Enum { .. }),
            ) => Self::check_leaf_value(ctx, value),
            _ => (),
        }
        VisitAction::Continue
    }
}
