use crate::utilities::inspect;
use crate::utilities::inspect_field_value;
use crate::utilities::value_from_ast_untyped;
use crate::value::FieldValue;
use crate::value::Variables;
use libgql_parser::ast;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

pub type SerializeFn = Arc<dyn Fn(&FieldValue) -> Result<JsonValue, String> + Send + Sync>;
pub type ParseValueFn = Arc<dyn Fn(&JsonValue) -> Result<JsonValue, String> + Send + Sync>;
pub type ParseLiteralFn =
    Arc<dyn Fn(&ast::Value, Option<&Variables>) -> Result<JsonValue, String> + Send + Sync>;

/// A leaf type with caller-defined
/// [serialization and parsing](https://spec.graphql.org/October2021/#sec-Scalars).
///
/// Without explicit functions a scalar passes JSON through unchanged in both
/// directions and reads literals structurally.
#[derive(Clone)]
pub struct ScalarType {
    name: String,
    description: Option<String>,
    specified_by_url: Option<String>,
    serialize: SerializeFn,
    parse_value: ParseValueFn,
    parse_literal: ParseLiteralFn,
    ast_node: Option<ast::ScalarTypeDefinition>,
    extension_ast_nodes: Vec<ast::ScalarTypeDefinition>,
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let serialize_name = name.clone();
        Self {
            serialize: Arc::new(move |value| {
                value.to_json().ok_or_else(|| {
                    format!(
                        "Scalar \"{serialize_name}\" cannot represent value: {}",
                        inspect_field_value(value),
                    )
                })
            }),
            parse_value: Arc::new(|value| Ok(value.clone())),
            parse_literal: Arc::new(|node, variables| Ok(value_from_ast_untyped(node, variables))),
            name,
            description: None,
            specified_by_url: None,
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn specified_by_url(mut self, url: impl Into<String>) -> Self {
        self.specified_by_url = Some(url.into());
        self
    }

    pub fn serialize_with(
        mut self,
        serialize: impl Fn(&FieldValue) -> Result<JsonValue, String> + Send + Sync + 'static,
    ) -> Self {
        self.serialize = Arc::new(serialize);
        self
    }

    pub fn parse_value_with(
        mut self,
        parse_value: impl Fn(&JsonValue) -> Result<JsonValue, String> + Send + Sync + 'static,
    ) -> Self {
        self.parse_value = Arc::new(parse_value);
        self
    }

    pub fn parse_literal_with(
        mut self,
        parse_literal: impl Fn(&ast::Value, Option<&Variables>) -> Result<JsonValue, String>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.parse_literal = Arc::new(parse_literal);
        self
    }

    pub fn ast_node(mut self, node: ast::ScalarTypeDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn extension_ast_nodes(mut self, nodes: Vec<ast::ScalarTypeDefinition>) -> Self {
        self.extension_ast_nodes = nodes;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn get_specified_by_url(&self) -> Option<&str> {
        self.specified_by_url.as_deref()
    }

    pub fn get_ast_node(&self) -> Option<&ast::ScalarTypeDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::ScalarTypeDefinition] {
        &self.extension_ast_nodes
    }

    /// Converts a resolved value into its response representation.
    pub fn serialize(&self, value: &FieldValue) -> Result<JsonValue, String> {
        (self.serialize)(value)
    }

    /// Coerces a JSON input value (a variable).
    pub fn parse_value(&self, value: &JsonValue) -> Result<JsonValue, String> {
        (self.parse_value)(value)
    }

    /// Coerces a literal written in a document.
    pub fn parse_literal(
        &self,
        node: &ast::Value,
        variables: Option<&Variables>,
    ) -> Result<JsonValue, String> {
        (self.parse_literal)(node, variables)
    }
}

impl fmt::Debug for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Built-in scalars
// =============================================================================

pub const SPECIFIED_SCALAR_NAMES: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

pub fn is_specified_scalar_type(name: &str) -> bool {
    SPECIFIED_SCALAR_NAMES.contains(&name)
}

/// Builds the built-in scalar with the given name.
pub fn specified_scalar_type(name: &str) -> Option<ScalarType> {
    match name {
        "Int" => Some(int_type()),
        "Float" => Some(float_type()),
        "String" => Some(string_type()),
        "Boolean" => Some(boolean_type()),
        "ID" => Some(id_type()),
        _ => None,
    }
}

/// The JSON a resolved value serializes from; host values have none.
fn output_json(value: &FieldValue) -> JsonValue {
    value.to_json().unwrap_or(JsonValue::Null)
}

fn integral(num: f64) -> Option<f64> {
    (num.is_finite() && num.fract() == 0.0).then_some(num)
}

fn int_type() -> ScalarType {
    ScalarType::new("Int")
        .description(
            "The `Int` scalar type represents non-fractional signed whole numeric values. \
             Int can represent values between -(2^31) and 2^31 - 1.",
        )
        .serialize_with(|output| {
            let value = output_json(output);
            let num = match &value {
                JsonValue::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
                JsonValue::String(text) if !text.is_empty() => text.trim().parse::<f64>().ok(),
                JsonValue::Number(num) => num.as_f64(),
                _ => None,
            };
            let Some(num) = num.and_then(integral) else {
                return Err(format!("Int cannot represent non-integer value: {}", inspect(&value)));
            };
            if num > f64::from(i32::MAX) || num < f64::from(i32::MIN) {
                return Err(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    inspect(&value),
                ));
            }
            Ok(JsonValue::from(num as i32))
        })
        .parse_value_with(|input| {
            let Some(num) = input.as_f64().filter(|_| input.is_number()).and_then(integral) else {
                return Err(format!("Int cannot represent non-integer value: {}", inspect(input)));
            };
            if num > f64::from(i32::MAX) || num < f64::from(i32::MIN) {
                return Err(format!(
                    "Int cannot represent non 32-bit signed integer value: {}",
                    inspect(input),
                ));
            }
            Ok(JsonValue::from(num as i32))
        })
        .parse_literal_with(|node, _| {
            let ast::Value::Int { value, .. } = node else {
                return Err(format!("Int cannot represent non-integer value: {node}"));
            };
            value
                .parse::<i32>()
                .map(JsonValue::from)
                .map_err(|_| format!("Int cannot represent non 32-bit signed integer value: {value}"))
        })
}

fn float_type() -> ScalarType {
    ScalarType::new("Float")
        .description(
            "The `Float` scalar type represents signed double-precision fractional values as \
             specified by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_floating_point).",
        )
        .serialize_with(|output| {
            let value = output_json(output);
            match &value {
                JsonValue::Bool(flag) => Ok(JsonValue::from(if *flag { 1 } else { 0 })),
                JsonValue::Number(_) => Ok(value.clone()),
                JsonValue::String(text) if !text.is_empty() => text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|num| num.is_finite())
                    .map(JsonValue::from)
                    .ok_or_else(|| format!("Float cannot represent non numeric value: {}", inspect(&value))),
                _ => Err(format!("Float cannot represent non numeric value: {}", inspect(&value))),
            }
        })
        .parse_value_with(|input| match input {
            JsonValue::Number(_) => Ok(input.clone()),
            _ => Err(format!("Float cannot represent non numeric value: {}", inspect(input))),
        })
        .parse_literal_with(|node, _| match node {
            ast::Value::Int { value, .. } | ast::Value::Float { value, .. } => value
                .parse::<f64>()
                .ok()
                .filter(|num| num.is_finite())
                .map(|num| match value.parse::<i64>() {
                    Ok(int) => JsonValue::from(int),
                    Err(_) => JsonValue::from(num),
                })
                .ok_or_else(|| format!("Float cannot represent non numeric value: {node}")),
            _ => Err(format!("Float cannot represent non numeric value: {node}")),
        })
}

fn string_type() -> ScalarType {
    ScalarType::new("String")
        .description(
            "The `String` scalar type represents textual data, represented as UTF-8 character \
             sequences. The String type is most often used by GraphQL to represent free-form \
             human-readable text.",
        )
        .serialize_with(|output| {
            let value = output_json(output);
            match &value {
                JsonValue::String(_) => Ok(value.clone()),
                JsonValue::Bool(flag) => Ok(JsonValue::from(flag.to_string())),
                JsonValue::Number(num) => Ok(JsonValue::from(num.to_string())),
                _ => Err(format!("String cannot represent value: {}", inspect(&value))),
            }
        })
        .parse_value_with(|input| match input {
            JsonValue::String(_) => Ok(input.clone()),
            _ => Err(format!("String cannot represent a non string value: {}", inspect(input))),
        })
        .parse_literal_with(|node, _| match node {
            ast::Value::String { value, .. } => Ok(JsonValue::from(value.as_str())),
            _ => Err(format!("String cannot represent a non string value: {node}")),
        })
}

fn boolean_type() -> ScalarType {
    ScalarType::new("Boolean")
        .description("The `Boolean` scalar type represents `true` or `false`.")
        .serialize_with(|output| {
            let value = output_json(output);
            match &value {
                JsonValue::Bool(_) => Ok(value.clone()),
                JsonValue::Number(num) => num
                    .as_f64()
                    .filter(|num| num.is_finite())
                    .map(|num| JsonValue::Bool(num != 0.0))
                    .ok_or_else(|| {
                        format!("Boolean cannot represent a non boolean value: {}", inspect(&value))
                    }),
                _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(&value))),
            }
        })
        .parse_value_with(|input| match input {
            JsonValue::Bool(_) => Ok(input.clone()),
            _ => Err(format!("Boolean cannot represent a non boolean value: {}", inspect(input))),
        })
        .parse_literal_with(|node, _| match node {
            ast::Value::Boolean { value, .. } => Ok(JsonValue::Bool(*value)),
            _ => Err(format!("Boolean cannot represent a non boolean value: {node}")),
        })
}

fn id_type() -> ScalarType {
    ScalarType::new("ID")
        .description(
            "The `ID` scalar type represents a unique identifier, often used to refetch an object \
             or as key for a cache. The ID type appears in a JSON response as a String; however, \
             it is not intended to be human-readable. When expected as an input type, any string \
             (such as `\"4\"`) or integer (such as `4`) input value will be accepted as an ID.",
        )
        .serialize_with(|output| {
            let value = output_json(output);
            match &value {
                JsonValue::String(_) => Ok(value.clone()),
                JsonValue::Number(num) if num.is_i64() || num.is_u64() => {
                    Ok(JsonValue::from(num.to_string()))
                },
                _ => Err(format!("ID cannot represent value: {}", inspect(&value))),
            }
        })
        .parse_value_with(|input| match input {
            JsonValue::String(_) => Ok(input.clone()),
            JsonValue::Number(num) if num.is_i64() || num.is_u64() => {
                Ok(JsonValue::from(num.to_string()))
            },
            _ => Err(format!("ID cannot represent value: {}", inspect(input))),
        })
        .parse_literal_with(|node, _| match node {
            ast::Value::String { value, .. } | ast::Value::Int { value, .. } => {
                Ok(JsonValue::from(value.as_str()))
            },
            _ => Err(format!("ID cannot represent a non-string and non-integer value: {node}")),
        })
}
