use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema::validate_schema::validate_name;
use crate::types::Field;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceType;
use crate::utilities::is_equal_type;
use crate::utilities::is_type_sub_type_of;
use indexmap::IndexMap;
use libgql_parser::ast::Location;
use std::collections::HashSet;

pub(super) struct ObjectOrInterfaceTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    fields: &'a IndexMap<String, Field>,
    interfaces: &'a [String],
    schema: &'a Schema,
    type_: &'a dyn ObjectOrInterfaceType,
    type_loc: Option<&'a Location>,
}

impl<'a> ObjectOrInterfaceTypeValidator<'a> {
    pub fn new(
        type_: &'a dyn ObjectOrInterfaceType,
        type_loc: Option<&'a Location>,
        schema: &'a Schema,
    ) -> Self {
        Self {
            errors: vec![],
            fields: type_.fields(),
            interfaces: type_.interfaces(),
            schema,
            type_,
            type_loc,
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        self.validate_fields();
        self.validate_interfaces();
        self.errors
    }

    /// https://spec.graphql.org/October2021/#sec-Objects.Type-Validation
    fn validate_fields(&mut self) {
        let type_name = self.type_.name();
        if self.fields.is_empty() {
            self.errors.push(
                GraphQLError::new(format!("Type {type_name} must define one or more fields."))
                    .with_node(self.type_loc),
            );
        }

        for (field_name, field) in self.fields {
            let field_node = field.get_ast_node();
            self.errors
                .extend(validate_name(field_name, field_node.and_then(|node| node.loc.as_ref())));

            let is_output_type = self
                .schema
                .get_named_type(field.ty())
                .is_some_and(|type_| type_.is_output_type());
            if !is_output_type {
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of {type_name}.{field_name} must be Output Type but got: {}.",
                        field.ty(),
                    ))
                    .with_node(field_node.and_then(|node| node.field_type.loc())),
                );
            }

            for (arg_name, arg) in field.args() {
                let arg_node = arg.get_ast_node();
                self.errors
                    .extend(validate_name(arg_name, arg_node.and_then(|node| node.loc.as_ref())));

                let is_input_type = self
                    .schema
                    .get_named_type(arg.ty())
                    .is_some_and(|type_| type_.is_input_type());
                if !is_input_type {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "The type of {type_name}.{field_name}({arg_name}:) must be Input Type \
                             but got: {}.",
                            arg.ty(),
                        ))
                        .with_node(arg_node.and_then(|node| node.value_type.loc())),
                    );
                }

                if arg.is_required() && arg.is_deprecated() {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Required argument {type_name}.{field_name}({arg_name}:) cannot be \
                             deprecated.",
                        ))
                        .with_node(arg_node.and_then(|node| node.loc.as_ref())),
                    );
                }
            }
        }
    }

    /// https://spec.graphql.org/October2021/#IsValidImplementation()
    fn validate_interfaces(&mut self) {
        let type_name = self.type_.name();
        let mut seen = HashSet::new();
        for iface_name in self.interfaces {
            let Some(iface_type) = self.schema.get_type(iface_name) else {
                continue;
            };
            let Some(iface) = iface_type.as_interface() else {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {type_name} must only implement Interface types, it cannot \
                         implement {iface_name}.",
                    ))
                    .with_node(self.type_loc),
                );
                continue;
            };
            if iface_name == type_name {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {type_name} cannot implement itself because it would create a \
                         circular reference.",
                    ))
                    .with_node(self.type_loc),
                );
                continue;
            }
            if !seen.insert(iface_name.as_str()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type {type_name} can only implement {iface_name} once.",
                    ))
                    .with_node(self.type_loc),
                );
                continue;
            }

            self.validate_implements_ancestors(iface, iface_type.ast_loc());
            self.validate_implements_interface(iface);
        }
    }

    fn validate_implements_ancestors(&mut self, iface: &InterfaceType, iface_loc: Option<&Location>) {
        let type_name = self.type_.name();
        for transitive in iface.interfaces() {
            if self.interfaces.contains(transitive) {
                continue;
            }
            let message = if transitive == type_name {
                format!(
                    "Type {type_name} cannot implement {} because it would create a circular \
                     reference.",
                    iface.name(),
                )
            } else {
                format!(
                    "Type {type_name} must implement {transitive} because it is implemented by {}.",
                    iface.name(),
                )
            };
            self.errors.push(
                GraphQLError::new(message).with_nodes([iface_loc, self.type_loc]),
            );
        }
    }

    fn validate_implements_interface(&mut self, iface: &InterfaceType) {
        let type_name = self.type_.name();
        let iface_name = iface.name();
        for (field_name, iface_field) in iface.fields() {
            let iface_field_node = iface_field.get_ast_node();
            let Some(type_field) = self.fields.get(field_name) else {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Interface field {iface_name}.{field_name} expected but {type_name} does \
                         not provide it.",
                    ))
                    .with_nodes([
                        iface_field_node.and_then(|node| node.loc.as_ref()),
                        self.type_loc,
                    ]),
                );
                continue;
            };
            let type_field_node = type_field.get_ast_node();

            // Field types are covariant.
            if !is_type_sub_type_of(self.schema, type_field.ty(), iface_field.ty()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Interface field {iface_name}.{field_name} expects type {} but \
                         {type_name}.{field_name} is type {}.",
                        iface_field.ty(),
                        type_field.ty(),
                    ))
                    .with_nodes([
                        iface_field_node.and_then(|node| node.field_type.loc()),
                        type_field_node.and_then(|node| node.field_type.loc()),
                    ]),
                );
            }

            // Argument types are invariant.
            for (arg_name, iface_arg) in iface_field.args() {
                let iface_arg_node = iface_arg.get_ast_node();
                let Some(type_arg) = type_field.arg(arg_name) else {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Interface field argument {iface_name}.{field_name}({arg_name}:) \
                             expected but {type_name}.{field_name} does not provide it.",
                        ))
                        .with_nodes([
                            iface_arg_node.and_then(|node| node.loc.as_ref()),
                            type_field_node.and_then(|node| node.loc.as_ref()),
                        ]),
                    );
                    continue;
                };
                if !is_equal_type(iface_arg.ty(), type_arg.ty()) {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Interface field argument {iface_name}.{field_name}({arg_name}:) \
                             expects type {} but {type_name}.{field_name}({arg_name}:) is type {}.",
                            iface_arg.ty(),
                            type_arg.ty(),
                        ))
                        .with_nodes([
                            iface_arg_node.and_then(|node| node.value_type.loc()),
                            type_arg.get_ast_node().and_then(|node| node.value_type.loc()),
                        ]),
                    );
                }
            }

            for (arg_name, type_arg) in type_field.args() {
                if iface_field.arg(arg_name).is_none() && type_arg.is_required() {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Object field {type_name}.{field_name} includes required argument \
                             {arg_name} that is missing from the Interface field \
                             {iface_name}.{field_name}.",
                        ))
                        .with_nodes([
                            type_arg.get_ast_node().and_then(|node| node.loc.as_ref()),
                            iface_field_node.and_then(|node| node.loc.as_ref()),
                        ]),
                    );
                }
            }
        }
    }
}
