use crate::execution::ResponsePath;
use crate::schema::Schema;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::value::FieldValue;
use crate::value::Variables;
use libgql_parser::ast;
use std::collections::HashMap;
use std::sync::Arc;

/// What a resolver knows about the field it is resolving and the operation
/// being executed.
#[derive(Clone, Debug)]
pub struct ResolveInfo<'a> {
    pub field_name: &'a str,
    /// Every node selecting this field under the same response key.
    pub field_nodes: &'a [&'a ast::Field],
    pub return_type: &'a TypeRef,
    pub parent_type: &'a ObjectType,
    pub path: Arc<ResponsePath>,
    pub schema: &'a Schema,
    pub fragments: &'a HashMap<&'a str, &'a ast::FragmentDefinition>,
    pub root_value: &'a FieldValue,
    pub operation: &'a ast::OperationDefinition,
    pub variable_values: &'a Variables,
}

impl ResolveInfo<'_> {
    /// The key the field's value is written under in the response.
    pub fn response_key(&self) -> &str {
        self.field_nodes
            .first()
            .map_or(self.field_name, |node| node.response_key())
    }
}
