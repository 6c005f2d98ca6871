use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::InputValue;
use crate::utilities::coerce_input_value;
use crate::utilities::default_value_to_json;
use crate::utilities::inspect;
use crate::utilities::print_path_array;
use crate::utilities::type_from_ast;
use crate::utilities::value_from_ast;
use crate::value::Variables;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::ast::Location;
use serde_json::Value as JsonValue;

/// Variable coercion gives up after this many errors.
pub const MAX_VARIABLE_ERRORS: usize = 50;

/// Coerces the provided variable values against the operation's variable
/// definitions, applying defaults.
///
/// Every problem found is returned (up to [`MAX_VARIABLE_ERRORS`]) rather
/// than just the first.
pub fn get_variable_values(
    schema: &Schema,
    definitions: &[ast::VariableDefinition],
    inputs: &Variables,
) -> Result<Variables, Vec<GraphQLError>> {
    let mut errors = vec![];
    let mut report = |error: GraphQLError| -> bool {
        if errors.len() >= MAX_VARIABLE_ERRORS {
            errors.push(GraphQLError::new(
                "Too many errors processing variables, error limit reached. Execution aborted.",
            ));
            return false;
        }
        errors.push(error);
        true
    };

    let mut coerced = Variables::new();
    for definition in definitions {
        let var_name = &definition.name;
        let var_type_str = definition.var_type.to_string();
        let var_type = type_from_ast(schema, &definition.var_type)
            .filter(|type_ref| schema.get_named_type(type_ref).is_some_and(|t| t.is_input_type()));
        let Some(var_type) = var_type else {
            let keep_going = report(
                GraphQLError::new(format!(
                    "Variable \"${var_name}\" expected value of type \"{var_type_str}\" which \
                     cannot be used as an input type.",
                ))
                .with_node(definition.var_type.loc()),
            );
            if !keep_going {
                break;
            }
            continue;
        };

        let Some(value) = inputs.get(var_name) else {
            if let Some(default) = &definition.default_value {
                if let Some(value) = value_from_ast(schema, default, &var_type, None) {
                    coerced.insert(var_name.clone(), value);
                }
            } else if var_type.is_non_null() {
                let keep_going = report(
                    GraphQLError::new(format!(
                        "Variable \"${var_name}\" of required type \"{var_type_str}\" was not \
                         provided.",
                    ))
                    .with_node(definition.loc.as_ref()),
                );
                if !keep_going {
                    break;
                }
            }
            continue;
        };

        if value.is_null() && var_type.is_non_null() {
            let keep_going = report(
                GraphQLError::new(format!(
                    "Variable \"${var_name}\" of non-null type \"{var_type_str}\" must not be \
                     null.",
                ))
                .with_node(definition.loc.as_ref()),
            );
            if !keep_going {
                break;
            }
            continue;
        }

        let mut aborted = false;
        let coerced_value = coerce_input_value(schema, value, &var_type, &mut |path, invalid, message| {
            if aborted {
                return;
            }
            let mut prefix = format!("Variable \"${var_name}\" got invalid value {}", inspect(invalid));
            if !path.is_empty() {
                prefix.push_str(&format!(" at \"{var_name}{}\"", print_path_array(path)));
            }
            let error = GraphQLError::new(format!("{prefix}; {message}"))
                .with_node(definition.loc.as_ref());
            aborted = !report(error);
        });
        if aborted {
            break;
        }
        coerced.insert(var_name.clone(), coerced_value);
    }

    if errors.is_empty() {
        Ok(coerced)
    } else {
        Err(errors)
    }
}

/// Coerces the arguments written on a field or directive against their
/// definitions, filling in defaults.
///
/// `node_loc` locates "not provided" errors; other errors point at the
/// offending value.
pub fn get_argument_values(
    schema: &Schema,
    arg_defs: &IndexMap<String, InputValue>,
    arguments: &[ast::Argument],
    node_loc: Option<&Location>,
    variables: &Variables,
) -> Result<Variables, GraphQLError> {
    let mut coerced = Variables::new();
    for (name, arg_def) in arg_defs {
        let arg_type = arg_def.ty();
        let default = || {
            arg_def
                .get_default_value()
                .and_then(|default| default_value_to_json(schema, default, arg_type))
        };

        let Some(argument) = arguments.iter().find(|argument| &argument.name == name) else {
            if let Some(default) = default() {
                coerced.insert(name.clone(), default);
            } else if arg_type.is_non_null() {
                return Err(GraphQLError::new(format!(
                    "Argument \"{name}\" of required type \"{arg_type}\" was not provided.",
                ))
                .with_node(node_loc));
            }
            continue;
        };

        let value_node = &argument.value;
        let mut is_null = value_node.is_null();
        if let ast::Value::Variable { name: var_name, .. } = value_node {
            let Some(var_value) = variables.get(var_name) else {
                if let Some(default) = default() {
                    coerced.insert(name.clone(), default);
                } else if arg_type.is_non_null() {
                    return Err(GraphQLError::new(format!(
                        "Argument \"{name}\" of required type \"{arg_type}\" was provided the \
                         variable \"${var_name}\" which was not provided a runtime value.",
                    ))
                    .with_node(value_node.loc()));
                }
                continue;
            };
            is_null = var_value.is_null();
        }

        if is_null && arg_type.is_non_null() {
            return Err(GraphQLError::new(format!(
                "Argument \"{name}\" of non-null type \"{arg_type}\" must not be null.",
            ))
            .with_node(value_node.loc()));
        }

        let Some(value) = value_from_ast(schema, value_node, arg_type, Some(variables)) else {
            return Err(GraphQLError::new(format!(
                "Argument \"{name}\" has invalid value {value_node}.",
            ))
            .with_node(value_node.loc()));
        };
        coerced.insert(name.clone(), value);
    }
    Ok(coerced)
}

/// The coerced arguments of the first use of `directive` among `directives`,
/// or `None` when it isn't used there.
pub fn get_directive_values(
    schema: &Schema,
    directive: &Directive,
    directives: &[ast::Directive],
    variables: &Variables,
) -> Result<Option<Variables>, GraphQLError> {
    let Some(node) = directives.iter().find(|node| node.name == directive.name()) else {
        return Ok(None);
    };
    get_argument_values(schema, directive.args(), &node.arguments, node.loc.as_ref(), variables)
        .map(Some)
}

/// Whether `@skip` and `@include` leave a selection in.
pub(crate) fn should_include_node(
    schema: &Schema,
    directives: &[ast::Directive],
    variables: &Variables,
) -> bool {
    let condition = |name: &str| {
        let directive = schema.get_directive(name)?;
        let args = get_directive_values(schema, directive, directives, variables).ok()??;
        Some(args.get("if") == Some(&JsonValue::Bool(true)))
    };
    if condition("skip") == Some(true) {
        return false;
    }
    condition("include") != Some(false)
}
