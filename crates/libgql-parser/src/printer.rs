//! Canonical printing of AST nodes back to GraphQL text.
//!
//! Output is normalized: two-space indentation, one selection per line,
//! `, `-separated arguments and no comments. Printing a parsed document and
//! parsing the result again yields a structurally equal AST.

use crate::ast::Argument;
use crate::ast::Definition;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::DirectiveDefinition;
use crate::ast::Document;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputValueDefinition;
use crate::ast::NamedType;
use crate::ast::ObjectField;
use crate::ast::OperationDefinition;
use crate::ast::OperationTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::block_string::is_printable_as_block_string;
use crate::block_string::print_block_string;
use std::fmt;

/// Fields whose argument list would push the line past this width are
/// printed with one argument per line.
const MAX_LINE_LENGTH: usize = 80;

/// Implemented by every AST node that can be printed on its own.
pub trait PrintNode {
    fn print(&self) -> String;
}

/// Prints a whole document.
pub fn print(document: &Document) -> String {
    document.print()
}

impl PrintNode for Document {
    fn print(&self) -> String {
        join(self.definitions.iter().map(PrintNode::print), "\n\n")
    }
}

impl PrintNode for Definition {
    fn print(&self) -> String {
        match self {
            Definition::Operation(def) => def.print(),
            Definition::Fragment(def) => def.print(),
            Definition::Schema(def) => def.print(),
            Definition::Type(def) => def.print(),
            Definition::Directive(def) => def.print(),
            Definition::SchemaExtension(def) => join(
                [
                    "extend schema".to_string(),
                    print_directives(&def.directives),
                    block(def.operation_types.iter().map(PrintNode::print)),
                ],
                " ",
            ),
            Definition::TypeExtension(def) => {
                format!("extend {}", print_type_definition_body(def))
            },
        }
    }
}

// =============================================================================
// Executable definitions
// =============================================================================

impl PrintNode for OperationDefinition {
    fn print(&self) -> String {
        let var_defs = wrap(
            "(",
            &join(self.variable_definitions.iter().map(PrintNode::print), ", "),
            ")",
        );
        let name_and_vars = join(
            [self.name.clone().unwrap_or_default(), var_defs],
            "",
        );
        let prefix = join(
            [
                self.operation.as_str().to_string(),
                name_and_vars,
                print_directives(&self.directives),
            ],
            " ",
        );
        let selection_set = self.selection_set.print();
        if prefix == "query" {
            selection_set
        } else {
            format!("{prefix} {selection_set}")
        }
    }
}

impl PrintNode for VariableDefinition {
    fn print(&self) -> String {
        format!(
            "${}: {}{}{}",
            self.name,
            self.var_type.print(),
            wrap(" = ", &self.default_value.as_ref().map(PrintNode::print).unwrap_or_default(), ""),
            wrap(" ", &print_directives(&self.directives), ""),
        )
    }
}

impl PrintNode for SelectionSet {
    fn print(&self) -> String {
        block(self.selections.iter().map(PrintNode::print))
    }
}

impl PrintNode for Selection {
    fn print(&self) -> String {
        match self {
            Selection::Field(field) => field.print(),
            Selection::FragmentSpread(spread) => spread.print(),
            Selection::InlineFragment(inline) => inline.print(),
        }
    }
}

impl PrintNode for Field {
    fn print(&self) -> String {
        let prefix = match &self.alias {
            Some(alias) => format!("{alias}: {}", self.name),
            None => self.name.clone(),
        };
        let args: Vec<String> = self.arguments.iter().map(PrintNode::print).collect();
        let mut args_line = format!("{prefix}{}", wrap("(", &args.join(", "), ")"));
        if args_line.chars().count() > MAX_LINE_LENGTH {
            args_line = format!("{prefix}{}", wrap("(\n", &indent(&args.join("\n")), "\n)"));
        }
        join(
            [
                args_line,
                print_directives(&self.directives),
                self.selection_set.as_ref().map(PrintNode::print).unwrap_or_default(),
            ],
            " ",
        )
    }
}

impl PrintNode for Argument {
    fn print(&self) -> String {
        format!("{}: {}", self.name, self.value.print())
    }
}

impl PrintNode for FragmentSpread {
    fn print(&self) -> String {
        format!("...{}{}", self.name, wrap(" ", &print_directives(&self.directives), ""))
    }
}

impl PrintNode for InlineFragment {
    fn print(&self) -> String {
        join(
            [
                "...".to_string(),
                wrap("on ", &self.type_condition.as_ref().map(PrintNode::print).unwrap_or_default(), ""),
                print_directives(&self.directives),
                self.selection_set.print(),
            ],
            " ",
        )
    }
}

impl PrintNode for FragmentDefinition {
    fn print(&self) -> String {
        format!(
            "fragment {} on {} {}{}",
            self.name,
            self.type_condition.print(),
            wrap("", &print_directives(&self.directives), " "),
            self.selection_set.print(),
        )
    }
}

impl PrintNode for Directive {
    fn print(&self) -> String {
        format!(
            "@{}{}",
            self.name,
            wrap("(", &join(self.arguments.iter().map(PrintNode::print), ", "), ")"),
        )
    }
}

// =============================================================================
// Values and types
// =============================================================================

impl PrintNode for Value {
    fn print(&self) -> String {
        match self {
            Value::Variable { name, .. } => format!("${name}"),
            Value::Int { value, .. } | Value::Float { value, .. } => value.clone(),
            Value::String { value, block, .. } => {
                if *block && is_printable_as_block_string(value) {
                    print_block_string(value)
                } else {
                    print_string(value)
                }
            },
            Value::Boolean { value, .. } => value.to_string(),
            Value::Null { .. } => "null".to_string(),
            Value::Enum { value, .. } => value.clone(),
            Value::List { values, .. } => {
                format!("[{}]", join(values.iter().map(PrintNode::print), ", "))
            },
            Value::Object { fields, .. } => {
                format!("{{{}}}", join(fields.iter().map(PrintNode::print), ", "))
            },
        }
    }
}

impl PrintNode for ObjectField {
    fn print(&self) -> String {
        format!("{}: {}", self.name, self.value.print())
    }
}

impl PrintNode for TypeAnnotation {
    fn print(&self) -> String {
        match self {
            TypeAnnotation::Named(named) => named.print(),
            TypeAnnotation::List(list) => format!("[{}]", list.inner.print()),
            TypeAnnotation::NonNull(non_null) => format!("{}!", non_null.inner.print()),
        }
    }
}

impl PrintNode for NamedType {
    fn print(&self) -> String {
        self.name.clone()
    }
}

// =============================================================================
// Type-system definitions
// =============================================================================

impl PrintNode for Description {
    fn print(&self) -> String {
        if self.block && is_printable_as_block_string(&self.value) {
            print_block_string(&self.value)
        } else {
            print_string(&self.value)
        }
    }
}

fn print_description(description: &Option<Description>) -> String {
    wrap("", &description.as_ref().map(PrintNode::print).unwrap_or_default(), "\n")
}

impl PrintNode for SchemaDefinition {
    fn print(&self) -> String {
        format!(
            "{}{}",
            print_description(&self.description),
            join(
                [
                    "schema".to_string(),
                    print_directives(&self.directives),
                    block(self.operation_types.iter().map(PrintNode::print)),
                ],
                " ",
            ),
        )
    }
}

impl PrintNode for OperationTypeDefinition {
    fn print(&self) -> String {
        format!("{}: {}", self.operation, self.named_type.print())
    }
}

impl PrintNode for TypeDefinition {
    fn print(&self) -> String {
        format!(
            "{}{}",
            print_description(&self.description().cloned()),
            print_type_definition_body(self),
        )
    }
}

/// Everything after the description; shared by definitions and
/// `extend ...` extensions.
fn print_type_definition_body(def: &TypeDefinition) -> String {
    match def {
        TypeDefinition::Scalar(def) => join(
            ["scalar".to_string(), def.name.clone(), print_directives(&def.directives)],
            " ",
        ),
        TypeDefinition::Object(def) => join(
            [
                "type".to_string(),
                def.name.clone(),
                print_implements(&def.interfaces),
                print_directives(&def.directives),
                block(def.fields.iter().map(PrintNode::print)),
            ],
            " ",
        ),
        TypeDefinition::Interface(def) => join(
            [
                "interface".to_string(),
                def.name.clone(),
                print_implements(&def.interfaces),
                print_directives(&def.directives),
                block(def.fields.iter().map(PrintNode::print)),
            ],
            " ",
        ),
        TypeDefinition::Union(def) => join(
            [
                "union".to_string(),
                def.name.clone(),
                print_directives(&def.directives),
                wrap("= ", &join(def.types.iter().map(PrintNode::print), " | "), ""),
            ],
            " ",
        ),
        TypeDefinition::Enum(def) => join(
            [
                "enum".to_string(),
                def.name.clone(),
                print_directives(&def.directives),
                block(def.values.iter().map(PrintNode::print)),
            ],
            " ",
        ),
        TypeDefinition::InputObject(def) => join(
            [
                "input".to_string(),
                def.name.clone(),
                print_directives(&def.directives),
                block(def.fields.iter().map(PrintNode::print)),
            ],
            " ",
        ),
    }
}

fn print_implements(interfaces: &[NamedType]) -> String {
    wrap("implements ", &join(interfaces.iter().map(PrintNode::print), " & "), "")
}

impl PrintNode for FieldDefinition {
    fn print(&self) -> String {
        format!(
            "{}{}{}: {}{}",
            print_description(&self.description),
            self.name,
            print_argument_defs(&self.arguments),
            self.field_type.print(),
            wrap(" ", &print_directives(&self.directives), ""),
        )
    }
}

impl PrintNode for InputValueDefinition {
    fn print(&self) -> String {
        format!(
            "{}{}",
            print_description(&self.description),
            join(
                [
                    format!("{}: {}", self.name, self.value_type.print()),
                    wrap("= ", &self.default_value.as_ref().map(PrintNode::print).unwrap_or_default(), ""),
                    print_directives(&self.directives),
                ],
                " ",
            ),
        )
    }
}

impl PrintNode for EnumValueDefinition {
    fn print(&self) -> String {
        format!(
            "{}{}",
            print_description(&self.description),
            join([self.name.clone(), print_directives(&self.directives)], " "),
        )
    }
}

impl PrintNode for DirectiveDefinition {
    fn print(&self) -> String {
        let locations: Vec<&str> = self.locations.iter().map(|loc| loc.as_str()).collect();
        format!(
            "{}directive @{}{}{} on {}",
            print_description(&self.description),
            self.name,
            print_argument_defs(&self.arguments),
            if self.repeatable { " repeatable" } else { "" },
            locations.join(" | "),
        )
    }
}

/// Argument definitions go on one line unless any of them spans several
/// (because of a description, say).
fn print_argument_defs(args: &[InputValueDefinition]) -> String {
    let printed: Vec<String> = args.iter().map(PrintNode::print).collect();
    if printed.iter().any(|arg| arg.contains('\n')) {
        wrap("(\n", &indent(&printed.join("\n")), "\n)")
    } else {
        wrap("(", &printed.join(", "), ")")
    }
}

fn print_directives(directives: &[Directive]) -> String {
    join(directives.iter().map(PrintNode::print), " ")
}

// =============================================================================
// String helpers
// =============================================================================

/// Prints `value` as a double-quoted string literal, escaping quotes,
/// backslashes and control characters.
pub fn print_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{0020}' || ('\u{007F}'..='\u{009F}').contains(&c) => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            },
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Joins the non-empty parts with `separator`.
fn join(parts: impl IntoIterator<Item = String>, separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Surrounds `inner` with `start` and `end`, or returns `""` when `inner` is
/// empty.
fn wrap(start: &str, inner: &str, end: &str) -> String {
    if inner.is_empty() {
        String::new()
    } else {
        format!("{start}{inner}{end}")
    }
}

fn indent(text: &str) -> String {
    wrap("  ", &text.replace('\n', "\n  "), "")
}

fn block(items: impl IntoIterator<Item = String>) -> String {
    wrap("{\n", &indent(&join(items, "\n")), "\n}")
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}
