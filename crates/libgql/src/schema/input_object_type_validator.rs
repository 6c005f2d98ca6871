use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::schema::validate_schema::validate_name;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::TypeRef;
use std::collections::HashMap;
use std::collections::HashSet;

pub(super) struct InputObjectTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    schema: &'a Schema,
    type_: &'a InputObjectType,
}

impl<'a> InputObjectTypeValidator<'a> {
    pub fn new(type_: &'a InputObjectType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            schema,
            type_,
        }
    }

    /// https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation
    pub fn validate(mut self) -> Vec<GraphQLError> {
        let type_name = self.type_.name();
        if self.type_.fields().is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Input Object type {type_name} must define one or more fields.",
                ))
                .with_node(self.type_.get_ast_node().and_then(|node| node.loc.as_ref())),
            );
        }

        for (field_name, field) in self.type_.fields() {
            let field_node = field.get_ast_node();
            self.errors
                .extend(validate_name(field_name, field_node.and_then(|node| node.loc.as_ref())));

            // Input object fields can not be declared with an output type.
            let is_input_type = self
                .schema
                .get_named_type(field.ty())
                .is_some_and(|type_| type_.is_input_type());
            if !is_input_type {
                self.errors.push(
                    GraphQLError::new(format!(
                        "The type of {type_name}.{field_name} must be Input Type but got: {}.",
                        field.ty(),
                    ))
                    .with_node(field_node.and_then(|node| node.value_type.loc())),
                );
            }

            if field.is_required() && field.is_deprecated() {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Required input field {type_name}.{field_name} cannot be deprecated.",
                    ))
                    .with_node(field_node.and_then(|node| node.loc.as_ref())),
                );
            }
        }
        self.errors
    }
}

/// Finds input objects that reference themselves through a chain of
/// non-null fields, which no finite value could satisfy.
///
/// A single validator is shared across all input objects of a schema so
/// that each cycle is reported once.
///
/// https://spec.graphql.org/October2021/#sec-Input-Objects.Type-Validation
pub(super) struct InputObjectCycleValidator<'a> {
    errors: Vec<GraphQLError>,
    field_path: Vec<&'a InputValue>,
    field_path_index_by_type_name: HashMap<&'a str, usize>,
    schema: &'a Schema,
    visited_types: HashSet<&'a str>,
}

impl<'a> InputObjectCycleValidator<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            field_path: vec![],
            field_path_index_by_type_name: HashMap::new(),
            schema,
            visited_types: HashSet::new(),
        }
    }

    pub fn check(&mut self, input: &'a InputObjectType) {
        if !self.visited_types.insert(input.name()) {
            return;
        }
        self.field_path_index_by_type_name
            .insert(input.name(), self.field_path.len());

        for field in input.fields().values() {
            let TypeRef::NonNull(inner) = field.ty() else {
                continue;
            };
            let TypeRef::Named(field_type_name) = inner.as_ref() else {
                continue;
            };
            let Some(field_type) = self
                .schema
                .get_type(field_type_name)
                .and_then(|type_| type_.as_input_object())
            else {
                continue;
            };

            self.field_path.push(field);
            match self.field_path_index_by_type_name.get(field_type.name()) {
                None => self.check(field_type),
                Some(&cycle_index) => {
                    let cycle_path = &self.field_path[cycle_index..];
                    let path_str = cycle_path
                        .iter()
                        .map(|field| field.name())
                        .collect::<Vec<_>>()
                        .join(".");
                    let nodes = cycle_path
                        .iter()
                        .map(|field| field.get_ast_node().and_then(|node| node.loc.as_ref()))
                        .collect::<Vec<_>>();
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Cannot reference Input Object \"{}\" within itself through a series \
                             of non-null fields: \"{path_str}\".",
                            field_type.name(),
                        ))
                        .with_nodes(nodes),
                    );
                },
            }
            self.field_path.pop();
        }

        self.field_path_index_by_type_name.remove(input.name());
    }

    pub fn into_errors(self) -> Vec<GraphQLError> {
        self.errors
    }
}
