use crate::error::GraphQLError;
use crate::introspection::is_introspection_type;
use crate::schema::Schema;
use crate::schema::directive_validator::DirectiveValidator;
use crate::schema::enum_type_validator::EnumTypeValidator;
use crate::schema::input_object_type_validator::InputObjectCycleValidator;
use crate::schema::input_object_type_validator::InputObjectTypeValidator;
use crate::schema::object_or_interface_type_validator::ObjectOrInterfaceTypeValidator;
use crate::schema::root_types_validator::RootTypesValidator;
use crate::schema::union_type_validator::UnionTypeValidator;
use crate::types::GraphQLType;
use libgql_parser::ast::Location;

/// Checks the rules a schema must satisfy before documents can be
/// validated or executed against it.
///
/// The result is computed once and cached on the schema. Schemas built
/// with [`SchemaConfig::assume_valid`](crate::schema::SchemaConfig::assume_valid)
/// always report no errors.
///
/// https://spec.graphql.org/October2021/#sec-Schema
pub fn validate_schema(schema: &Schema) -> &[GraphQLError] {
    if schema.is_assumed_valid() {
        return &[];
    }
    schema.validation_errors.get_or_init(|| {
        let mut errors = RootTypesValidator::new(schema).validate();
        for directive in schema.directives() {
            errors.append(&mut DirectiveValidator::new(directive, schema).validate());
        }

        let mut cycle_validator = InputObjectCycleValidator::new(schema);
        for type_ in schema.type_map().values() {
            if !is_introspection_type(type_.name()) {
                errors.extend(validate_name(type_.name(), type_.ast_loc()));
            }
            match type_ {
                GraphQLType::Object(object) => {
                    let validator =
                        ObjectOrInterfaceTypeValidator::new(object.as_ref(), type_.ast_loc(), schema);
                    errors.append(&mut validator.validate());
                },
                GraphQLType::Interface(iface) => {
                    let validator =
                        ObjectOrInterfaceTypeValidator::new(iface.as_ref(), type_.ast_loc(), schema);
                    errors.append(&mut validator.validate());
                },
                GraphQLType::Union(union_type) => {
                    errors.append(&mut UnionTypeValidator::new(union_type, schema).validate());
                },
                GraphQLType::Enum(enum_type) => {
                    errors.append(&mut EnumTypeValidator::new(enum_type).validate());
                },
                GraphQLType::InputObject(input) => {
                    errors.append(&mut InputObjectTypeValidator::new(input, schema).validate());
                    cycle_validator.check(input);
                },
                GraphQLType::Scalar(_) => (),
            }
        }
        errors.append(&mut cycle_validator.into_errors());

        tracing::debug!(error_count = errors.len(), "validated schema");
        errors
    })
}

/// Like [`validate_schema`], but fails with the list of errors when there
/// are any.
pub fn assert_valid_schema(schema: &Schema) -> Result<(), Vec<GraphQLError>> {
    match validate_schema(schema) {
        [] => Ok(()),
        errors => Err(errors.to_vec()),
    }
}

/// Names must match `/^[_a-zA-Z][_a-zA-Z0-9]*$/` and must not use the `__`
/// prefix reserved for introspection.
///
/// https://spec.graphql.org/October2021/#sec-Names
pub(super) fn validate_name(name: &str, loc: Option<&Location>) -> Option<GraphQLError> {
    let message = if name.is_empty() {
        "Expected name to be a non-empty string.".to_string()
    } else if name.starts_with("__") {
        format!(
            "Name \"{name}\" must not begin with \"__\", which is reserved by GraphQL introspection."
        )
    } else if !name.starts_with(|ch: char| ch == '_' || ch.is_ascii_alphabetic()) {
        format!("Names must start with [_a-zA-Z] but \"{name}\" does not.")
    } else if !name.chars().all(|ch| ch == '_' || ch.is_ascii_alphanumeric()) {
        format!("Names must only contain [_a-zA-Z0-9] but \"{name}\" does not.")
    } else {
        return None;
    };
    Some(GraphQLError::new(message).with_node(loc))
}
