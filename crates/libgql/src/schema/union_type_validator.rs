use crate::error::GraphQLError;
use crate::schema::Schema;
use crate::types::UnionType;
use std::collections::HashSet;

pub(super) struct UnionTypeValidator<'a> {
    errors: Vec<GraphQLError>,
    schema: &'a Schema,
    type_: &'a UnionType,
}

impl<'a> UnionTypeValidator<'a> {
    pub fn new(type_: &'a UnionType, schema: &'a Schema) -> Self {
        Self {
            errors: vec![],
            schema,
            type_,
        }
    }

    /// https://spec.graphql.org/October2021/#sec-Unions.Type-Validation
    pub fn validate(mut self) -> Vec<GraphQLError> {
        let union_name = self.type_.name();
        let union_loc = self.type_.get_ast_node().and_then(|node| node.loc.as_ref());
        let members = self.type_.types();
        if members.is_empty() {
            self.errors.push(
                GraphQLError::new(format!(
                    "Union type {union_name} must define one or more member types.",
                ))
                .with_node(union_loc),
            );
        }

        let mut seen = HashSet::new();
        for member in members {
            if !seen.insert(member.as_str()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Union type {union_name} can only include type {member} once.",
                    ))
                    .with_node(union_loc),
                );
                continue;
            }
            let is_object = self
                .schema
                .get_type(member)
                .is_some_and(|type_| type_.as_object().is_some());
            if !is_object {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Union type {union_name} can only include Object types, it cannot \
                         include {member}.",
                    ))
                    .with_node(union_loc),
                );
            }
        }
        self.errors
    }
}
