use crate::types::TypeRef;
use libgql_parser::ast;
use serde_json::Value as JsonValue;

/// The default of an argument or input field.
///
/// Defaults written in SDL are kept as literals and coerced against the
/// declared type each time they are used; programmatic defaults are
/// already-coerced JSON.
#[derive(Clone, Debug, PartialEq)]
pub enum DefaultValue {
    Value(JsonValue),
    Literal(ast::Value),
}

/// An argument definition or an input object field.
#[derive(Clone, Debug)]
pub struct InputValue {
    name: String,
    description: Option<String>,
    ty: TypeRef,
    default_value: Option<DefaultValue>,
    deprecation_reason: Option<String>,
    ast_node: Option<ast::InputValueDefinition>,
}

impl InputValue {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            description: None,
            ty,
            default_value: None,
            deprecation_reason: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, default_value: DefaultValue) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn ast_node(mut self, node: ast::InputValueDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    pub fn get_default_value(&self) -> Option<&DefaultValue> {
        self.default_value.as_ref()
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn get_ast_node(&self) -> Option<&ast::InputValueDefinition> {
        self.ast_node.as_ref()
    }

    /// A non-null input value without a default must always be provided.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}
