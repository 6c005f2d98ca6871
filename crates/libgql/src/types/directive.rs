use crate::types::DefaultValue;
use crate::types::InputValue;
use crate::types::TypeRef;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::ast::DirectiveLocation;
use serde_json::Value as JsonValue;

/// A [directive definition](https://spec.graphql.org/October2021/#sec-Type-System.Directives).
#[derive(Clone, Debug)]
pub struct Directive {
    name: String,
    description: Option<String>,
    locations: Vec<DirectiveLocation>,
    args: IndexMap<String, InputValue>,
    is_repeatable: bool,
    ast_node: Option<ast::DirectiveDefinition>,
}

impl Directive {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            locations: vec![],
            args: IndexMap::new(),
            is_repeatable: false,
            ast_node: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(mut self, location: DirectiveLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn argument(mut self, arg: InputValue) -> Self {
        self.args.insert(arg.name().to_string(), arg);
        self
    }

    pub fn repeatable(mut self, is_repeatable: bool) -> Self {
        self.is_repeatable = is_repeatable;
        self
    }

    pub fn ast_node(mut self, node: ast::DirectiveDefinition) -> Self {
        self.ast_node = Some(node);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn locations(&self) -> &[DirectiveLocation] {
        &self.locations
    }

    pub fn args(&self) -> &IndexMap<String, InputValue> {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&InputValue> {
        self.args.get(name)
    }

    pub fn is_repeatable(&self) -> bool {
        self.is_repeatable
    }

    pub fn get_ast_node(&self) -> Option<&ast::DirectiveDefinition> {
        self.ast_node.as_ref()
    }
}

// =============================================================================
// Built-in directives
// =============================================================================

pub const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

pub const SPECIFIED_DIRECTIVE_NAMES: [&str; 4] = ["include", "skip", "deprecated", "specifiedBy"];

pub fn is_specified_directive(name: &str) -> bool {
    SPECIFIED_DIRECTIVE_NAMES.contains(&name)
}

/// `@include(if: Boolean!)`
pub fn include_directive() -> Directive {
    Directive::new("include")
        .description(
            "Directs the executor to include this field or fragment only when the `if` argument \
             is true.",
        )
        .location(DirectiveLocation::Field)
        .location(DirectiveLocation::FragmentSpread)
        .location(DirectiveLocation::InlineFragment)
        .argument(
            InputValue::new("if", TypeRef::named_non_null("Boolean"))
                .description("Included when true."),
        )
}

/// `@skip(if: Boolean!)`
pub fn skip_directive() -> Directive {
    Directive::new("skip")
        .description(
            "Directs the executor to skip this field or fragment when the `if` argument is true.",
        )
        .location(DirectiveLocation::Field)
        .location(DirectiveLocation::FragmentSpread)
        .location(DirectiveLocation::InlineFragment)
        .argument(
            InputValue::new("if", TypeRef::named_non_null("Boolean"))
                .description("Skipped when true."),
        )
}

/// `@deprecated(reason: String = "No longer supported")`
pub fn deprecated_directive() -> Directive {
    Directive::new("deprecated")
        .description("Marks an element of a GraphQL schema as no longer supported.")
        .location(DirectiveLocation::FieldDefinition)
        .location(DirectiveLocation::ArgumentDefinition)
        .location(DirectiveLocation::InputFieldDefinition)
        .location(DirectiveLocation::EnumValue)
        .argument(
            InputValue::new("reason", TypeRef::named("String"))
                .description(
                    "Explains why this element was deprecated, usually also including a \
                     suggestion for how to access supported similar data. Formatted using the \
                     Markdown syntax, as specified by [CommonMark](https://commonmark.org/).",
                )
                .default_value(DefaultValue::Value(JsonValue::from(DEFAULT_DEPRECATION_REASON))),
        )
}

/// `@specifiedBy(url: String!)`
pub fn specified_by_directive() -> Directive {
    Directive::new("specifiedBy")
        .description("Exposes a URL that specifies the behavior of this scalar.")
        .location(DirectiveLocation::Scalar)
        .argument(
            InputValue::new("url", TypeRef::named_non_null("String"))
                .description("The URL that specifies the behavior of this scalar."),
        )
}

pub fn specified_directives() -> Vec<Directive> {
    vec![
        include_directive(),
        skip_directive(),
        deprecated_directive(),
        specified_by_directive(),
    ]
}
