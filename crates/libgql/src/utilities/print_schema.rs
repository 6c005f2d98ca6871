use crate::introspection::is_introspection_type;
use crate::schema::Schema;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::DefaultValue;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::ObjectOrInterfaceType;
use crate::types::ScalarType;
use crate::types::UnionType;
use crate::types::is_specified_directive;
use crate::types::is_specified_scalar_type;
use crate::utilities::ast_from_value;
use libgql_parser::PrintNode;
use libgql_parser::ast;
use libgql_parser::is_printable_as_block_string;

/// Prints the SDL for every type and directive the schema defines itself,
/// leaving out built-in scalars, built-in directives and the introspection
/// types.
///
/// ```rust
/// use libgql::build_schema;
/// use libgql::utilities::print_schema;
///
/// let schema = build_schema("type Query { hello(name: String = \"world\"): String }").unwrap();
/// assert_eq!(
///     print_schema(&schema),
///     "type Query {\n  hello(name: String = \"world\"): String\n}",
/// );
/// ```
pub fn print_schema(schema: &Schema) -> String {
    print_filtered_schema(
        schema,
        |directive| !is_specified_directive(directive.name()),
        |type_| !is_specified_scalar_type(type_.name()) && !is_introspection_type(type_.name()),
    )
}

/// Prints only the built-in directives and the introspection types.
pub fn print_introspection_schema(schema: &Schema) -> String {
    print_filtered_schema(
        schema,
        |directive| is_specified_directive(directive.name()),
        |type_| is_introspection_type(type_.name()),
    )
}

fn print_filtered_schema(
    schema: &Schema,
    directive_filter: impl Fn(&Directive) -> bool,
    type_filter: impl Fn(&GraphQLType) -> bool,
) -> String {
    let printer = SchemaPrinter { schema };
    let schema_definition = printer.print_schema_definition();
    let directives = schema
        .directives()
        .iter()
        .filter(|directive| directive_filter(directive))
        .map(|directive| printer.print_directive(directive));
    let types = schema
        .type_map()
        .values()
        .filter(|type_| type_filter(type_))
        .map(|type_| printer.print_type(type_));

    schema_definition
        .into_iter()
        .chain(directives)
        .chain(types)
        .collect::<Vec<_>>()
        .join("\n\n")
}

struct SchemaPrinter<'a> {
    schema: &'a Schema,
}

impl SchemaPrinter<'_> {
    /// The `schema` block is only needed when it carries a description or
    /// a root type has a name other than `Query`, `Mutation` or
    /// `Subscription`.
    fn print_schema_definition(&self) -> Option<String> {
        let roots = [
            ("query", self.schema.query_type().map(|type_| type_.name()), "Query"),
            ("mutation", self.schema.mutation_type().map(|type_| type_.name()), "Mutation"),
            (
                "subscription",
                self.schema.subscription_type().map(|type_| type_.name()),
                "Subscription",
            ),
        ];
        let has_common_names = roots
            .iter()
            .all(|(_, name, common_name)| name.is_none_or(|name| name == *common_name));
        if self.schema.description().is_none() && has_common_names {
            return None;
        }

        let operation_types = roots
            .iter()
            .filter_map(|(operation, name, _)| Some(format!("  {operation}: {}", (*name)?)))
            .collect::<Vec<_>>();
        Some(format!(
            "{}schema {{\n{}\n}}",
            print_description(self.schema.description(), "", true),
            operation_types.join("\n"),
        ))
    }

    fn print_directive(&self, directive: &Directive) -> String {
        let locations = directive
            .locations()
            .iter()
            .map(|location| location.as_str())
            .collect::<Vec<_>>();
        format!(
            "{}directive @{}{}{} on {}",
            print_description(directive.get_description(), "", true),
            directive.name(),
            self.print_args(directive.args().values(), ""),
            if directive.is_repeatable() { " repeatable" } else { "" },
            locations.join(" | "),
        )
    }

    fn print_type(&self, type_: &GraphQLType) -> String {
        match type_ {
            GraphQLType::Scalar(scalar) => print_scalar(scalar),
            GraphQLType::Object(object) => self.print_object_or_interface("type", object.as_ref()),
            GraphQLType::Interface(iface) => {
                self.print_object_or_interface("interface", iface.as_ref())
            },
            GraphQLType::Union(union_type) => print_union(union_type),
            GraphQLType::Enum(enum_type) => print_enum(enum_type),
            GraphQLType::InputObject(input) => self.print_input_object(input),
        }
    }

    fn print_object_or_interface(
        &self,
        keyword: &str,
        type_: &dyn ObjectOrInterfaceType,
    ) -> String {
        let interfaces = match type_.interfaces() {
            [] => String::new(),
            names => format!(" implements {}", names.join(" & ")),
        };
        let fields = type_
            .fields()
            .values()
            .enumerate()
            .map(|(idx, field)| {
                format!(
                    "{}  {}{}: {}{}",
                    print_description(field.get_description(), "  ", idx == 0),
                    field.name(),
                    self.print_args(field.args().values(), "  "),
                    field.ty(),
                    print_deprecated(field.deprecation_reason()),
                )
            })
            .collect::<Vec<_>>();
        format!(
            "{}{keyword} {}{interfaces}{}",
            print_description(type_.get_description(), "", true),
            type_.name(),
            print_block(&fields),
        )
    }

    fn print_input_object(&self, input: &InputObjectType) -> String {
        let fields = input
            .fields()
            .values()
            .enumerate()
            .map(|(idx, field)| {
                format!(
                    "{}  {}",
                    print_description(field.get_description(), "  ", idx == 0),
                    self.print_input_value(field),
                )
            })
            .collect::<Vec<_>>();
        format!(
            "{}input {}{}",
            print_description(input.get_description(), "", true),
            input.name(),
            print_block(&fields),
        )
    }

    /// Arguments print on one line unless any of them has a description.
    fn print_args<'v>(
        &self,
        args: impl ExactSizeIterator<Item = &'v InputValue> + Clone,
        indentation: &str,
    ) -> String {
        if args.len() == 0 {
            return String::new();
        }
        if args.clone().all(|arg| arg.get_description().is_none()) {
            let printed = args.map(|arg| self.print_input_value(arg)).collect::<Vec<_>>();
            return format!("({})", printed.join(", "));
        }
        let printed = args
            .enumerate()
            .map(|(idx, arg)| {
                format!(
                    "{}  {indentation}{}",
                    print_description(arg.get_description(), &format!("  {indentation}"), idx == 0),
                    self.print_input_value(arg),
                )
            })
            .collect::<Vec<_>>();
        format!("(\n{}\n{indentation})", printed.join("\n"))
    }

    fn print_input_value(&self, arg: &InputValue) -> String {
        let default = arg.get_default_value().and_then(|default| match default {
            DefaultValue::Literal(literal) => Some(literal.print()),
            DefaultValue::Value(value) => {
                ast_from_value(self.schema, value, arg.ty()).map(|literal| literal.print())
            },
        });
        let mut decl = format!("{}: {}", arg.name(), arg.ty());
        if let Some(default) = default {
            decl.push_str(" = ");
            decl.push_str(&default);
        }
        decl.push_str(&print_deprecated(arg.deprecation_reason()));
        decl
    }
}

fn print_scalar(scalar: &ScalarType) -> String {
    let specified_by = scalar
        .get_specified_by_url()
        .map(|url| format!(" @specifiedBy(url: {})", ast::Value::string(url).print()))
        .unwrap_or_default();
    format!(
        "{}scalar {}{specified_by}",
        print_description(scalar.get_description(), "", true),
        scalar.name(),
    )
}

fn print_union(union_type: &UnionType) -> String {
    let possible_types = match union_type.types() {
        [] => String::new(),
        members => format!(" = {}", members.join(" | ")),
    };
    format!(
        "{}union {}{possible_types}",
        print_description(union_type.get_description(), "", true),
        union_type.name(),
    )
}

fn print_enum(enum_type: &EnumType) -> String {
    let values = enum_type
        .values()
        .values()
        .enumerate()
        .map(|(idx, value)| {
            format!(
                "{}  {}{}",
                print_description(value.get_description(), "  ", idx == 0),
                value.name(),
                print_deprecated(value.deprecation_reason()),
            )
        })
        .collect::<Vec<_>>();
    format!(
        "{}enum {}{}",
        print_description(enum_type.get_description(), "", true),
        enum_type.name(),
        print_block(&values),
    )
}

fn print_block(items: &[String]) -> String {
    if items.is_empty() {
        return String::new();
    }
    format!(" {{\n{}\n}}", items.join("\n"))
}

fn print_deprecated(reason: Option<&str>) -> String {
    match reason {
        None => String::new(),
        Some(DEFAULT_DEPRECATION_REASON) => " @deprecated".to_string(),
        Some(reason) => format!(" @deprecated(reason: {})", ast::Value::string(reason).print()),
    }
}

/// Descriptions print as block strings where that round-trips, indented to
/// match the definition they describe. Every definition but the first in a
/// block is preceded by a blank line when it has a description.
fn print_description(description: Option<&str>, indentation: &str, first_in_block: bool) -> String {
    let Some(description) = description else {
        return String::new();
    };
    let literal = ast::Value::String {
        value: description.to_string(),
        block: is_printable_as_block_string(description),
        loc: None,
    };
    let prefix = if !indentation.is_empty() && !first_in_block {
        format!("\n{indentation}")
    } else {
        indentation.to_string()
    };
    format!(
        "{prefix}{}\n",
        literal.print().replace('\n', &format!("\n{indentation}")),
    )
}
