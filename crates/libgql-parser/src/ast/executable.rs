use crate::ast::Located;
use crate::ast::Location;
use crate::ast::NamedType;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use inherent::inherent;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationType::Query),
            "mutation" => Some(OperationType::Mutation),
            "subscription" => Some(OperationType::Subscription),
            _ => None,
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `query`, `mutation` or `subscription`, or an anonymous `{ ... }`
/// shorthand query.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<String>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

impl OperationDefinition {
    /// Whether this was written as a bare `{ ... }` selection set.
    pub fn is_shorthand(&self) -> bool {
        self.operation == OperationType::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
    }
}

/// `$name: Type = default @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub name: String,
    pub var_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

impl Selection {
    pub fn directives(&self) -> &[Directive] {
        match self {
            Selection::Field(field) => &field.directives,
            Selection::FragmentSpread(spread) => &spread.directives,
            Selection::InlineFragment(inline) => &inline.directives,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<String>,
    pub name: String,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub loc: Option<Location>,
}

impl Field {
    /// The key this field is written under in the response: its alias if it
    /// has one, otherwise its name.
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: String,
    pub value: Value,
    pub loc: Option<Location>,
}

/// `...FragmentName @directives`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: String,
    pub directives: Vec<Directive>,
    pub loc: Option<Location>,
}

/// `... on Type @directives { ... }`; the type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: String,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub loc: Option<Location>,
}

/// A directive application: `@name(arg: value)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: String,
    pub arguments: Vec<Argument>,
    pub loc: Option<Location>,
}

impl Directive {
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments.iter().find(|arg| arg.name == name)
    }
}

#[inherent]
impl Located for OperationDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for VariableDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for SelectionSet {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for Selection {
    pub fn loc(&self) -> Option<&Location> {
        match self {
            Selection::Field(field) => field.loc.as_ref(),
            Selection::FragmentSpread(spread) => spread.loc.as_ref(),
            Selection::InlineFragment(inline) => inline.loc.as_ref(),
        }
    }
}

#[inherent]
impl Located for Field {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for Argument {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for FragmentSpread {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for InlineFragment {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for FragmentDefinition {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}

#[inherent]
impl Located for Directive {
    pub fn loc(&self) -> Option<&Location> {
        self.loc.as_ref()
    }
}
