use crate::utilities::did_you_mean;
use crate::utilities::inspect;
use crate::utilities::inspect_field_value;
use crate::utilities::suggestion_list;
use crate::value::FieldValue;
use indexmap::IndexMap;
use libgql_parser::ast;
use serde_json::Value as JsonValue;

/// One value of an [`EnumType`].
///
/// `value` is the internal representation handed to resolvers as an
/// argument and accepted back from them when serializing. It defaults to
/// the value's name.
#[derive(Clone, Debug)]
pub struct EnumValue {
    name: String,
    description: Option<String>,
    value: JsonValue,
    deprecation_reason: Option<String>,
    ast_node: Option<ast::EnumValueDefinition>,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: JsonValue::String(name.clone()),
            name,
            description: None,
            deprecation_reason: None,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: JsonValue) -> Self {
        self.value = value;
        self
    }

    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    pub fn ast_node(mut self, node: ast::EnumValueDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn internal_value(&self) -> &JsonValue {
        &self.value
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }

    pub fn get_ast_node(&self) -> Option<&ast::EnumValueDefinition> {
        self.ast_node.as_ref()
    }
}

/// An [enum type](https://spec.graphql.org/October2021/#sec-Enums).
#[derive(Clone, Debug)]
pub struct EnumType {
    name: String,
    description: Option<String>,
    values: IndexMap<String, EnumValue>,
    ast_node: Option<ast::EnumTypeDefinition>,
    extension_ast_nodes: Vec<ast::EnumTypeDefinition>,
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn value(mut self, value: EnumValue) -> Self {
        self.values.insert(value.name().to_string(), value);
        self
    }

    pub fn ast_node(mut self, node: ast::EnumTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::EnumTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }

    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.get(name)
    }

    pub fn get_ast_node(&self) -> Option<&ast::EnumTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::EnumTypeDefinition] {
        &self.extension_ast_nodes
    }

    /// Maps an internal value back to the name of the enum value holding it.
    pub fn serialize(&self, output: &FieldValue) -> Result<JsonValue, String> {
        let internal = output.to_json();
        self.values
            .values()
            .find(|value| internal.as_ref() == Some(&value.value))
            .map(|value| JsonValue::String(value.name.clone()))
            .ok_or_else(|| {
                format!(
                    "Enum \"{}\" cannot represent value: {}",
                    self.name,
                    inspect_field_value(output),
                )
            })
    }

    /// Coerces a variable value (the enum value's name as a JSON string)
    /// into its internal value.
    pub fn parse_value(&self, input: &JsonValue) -> Result<JsonValue, String> {
        let JsonValue::String(name) = input else {
            return Err(format!(
                "Enum \"{}\" cannot represent non-string value: {}.{}",
                self.name,
                inspect(input),
                self.did_you_mean_value(&inspect(input)),
            ));
        };
        match self.values.get(name) {
            Some(value) => Ok(value.value.clone()),
            None => Err(format!(
                "Value {} does not exist in \"{}\" enum.{}",
                inspect(input),
                self.name,
                self.did_you_mean_value(name),
            )),
        }
    }

    pub fn parse_literal(&self, node: &ast::Value) -> Result<JsonValue, String> {
        let ast::Value::Enum { value: name, .. } = node else {
            let printed = node.to_string();
            return Err(format!(
                "Enum \"{}\" cannot represent non-enum value: {printed}.{}",
                self.name,
                self.did_you_mean_value(&printed),
            ));
        };
        match self.values.get(name) {
            Some(value) => Ok(value.value.clone()),
            None => Err(format!(
                "Value \"{name}\" does not exist in \"{}\" enum.{}",
                self.name,
                self.did_you_mean_value(name),
            )),
        }
    }

    fn did_you_mean_value(&self, unknown: &str) -> String {
        let names = self.values.keys().map(String::as_str).collect::<Vec<_>>();
        did_you_mean(None, &suggestion_list(unknown, &names))
    }
}
