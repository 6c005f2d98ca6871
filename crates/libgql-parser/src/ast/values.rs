use crate::ast::Located;
use crate::ast::Location;
use inherent::inherent;

/// A value literal, or a `$variable` reference where variables are
/// permitted.
///
/// Int and Float literals keep their source text; interpreting them is up to
/// whichever input type they are coerced to.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable {
        name: String,
        loc: Option<Location>,
    },
    Int {
        value: String,
        loc: Option<Location>,
    },
    Float {
        value: String,
        loc: Option<Location>,
    },
    String {
        value: String,
        /// Whether this was written as a `"""block string"""`.
        block: bool,
        loc: Option<Location>,
    },
    Boolean {
        value: bool,
        loc: Option<Location>,
    },
    Null {
        loc: Option<Location>,
    },
    Enum {
        value: String,
        loc: Option<Location>,
    },
    List {
        values: Vec<Value>,
        loc: Option<Location>,
    },
    Object {
        fields: Vec<ObjectField>,
        loc: Option<Location>,
    },
}

impl Value {
    /// A short name for the kind of literal, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Variable { .. } => "Variable",
            Value::Int { .. } => "IntValue",
            Value::Float { .. } => "FloatValue",
            Value::String { .. } => "StringValue",
            Value::Boolean { .. } => "BooleanValue",
            Value::Null { .. } => "NullValue",
            Value::Enum { .. } => "EnumValue",
            Value::List { .. } => "ListValue",
            Value::Object { .. } => "ObjectValue",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null { .. })
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        match self {
            Value::Variable { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Convenience constructors for building literals without a location.
    pub fn string(value: impl Into<String>) -> Self {
        Value::String { value: value.into(), block: false, loc: None }
    }

    pub fn int(value: impl ToString) -> Self {
        Value::Int { value: value.to_string(), loc: None }
    }

    pub fn enum_value(value: impl Into<String>) -> Self {
        Value::Enum { value: value.into(), loc: None }
    }
}

#[inherent]
impl Located for Value {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Value::Variable { loc, .. }
            | Value::Int { loc, .. }
            | Value::Float { loc, .. }
            | Value::String { loc, .. }
            | Value::Boolean { loc, .. }
            | Value::Null { loc }
            | Value::Enum { loc, .. }
            | Value::List { loc, .. }
            | Value::Object { loc, .. } => loc.as_ref(),
        }
    }
}

/// A `name: value` entry of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
    pub loc: Option<Location>,
}

#[inherent]
impl Located for ObjectField {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}
