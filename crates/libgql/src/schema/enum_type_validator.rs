use crate::error::GraphQLError;
use crate::schema::validate_schema::validate_name;
use crate::types::EnumType;

pub(super) struct EnumTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    type_: &'a EnumType,
}

impl<'a> EnumTypeValidator<'a> {
    pub fn new(type_: &'a EnumType) -> Self {
        Self {
            errors: vec![],
            type_,
        }
    }

    /// https://spec.graphql.org/October2021/#sec-Enums.Type-Validation
    pub fn validate(mut self) -> Vec<GraphQLError> {
        let enum_name = self.type_.name();
        if self.type_.values().is_empty() {
            self.errors.push(
                GraphQLError::new(format!("Enum type {enum_name} must define one or more values."))
                    .with_node(self.type_.get_ast_node().and_then(|node| node.loc.as_ref())),
            );
        }

        for (value_name, value) in self.type_.values() {
            let value_loc = value.get_ast_node().and_then(|node| node.loc.as_ref());
            if matches!(value_name.as_str(), "true" | "false" | "null") {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Enum type {enum_name} cannot include value: {value_name}.",
                    ))
                    .with_node(value_loc),
                );
                continue;
            }
            self.errors.extend(validate_name(value_name, value_loc));
        }
        self.errors
    }
}
