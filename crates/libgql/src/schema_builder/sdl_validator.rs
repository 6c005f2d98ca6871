use crate::error::GraphQLError;
use crate::introspection::introspection_types;
use crate::schema::Schema;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::SPECIFIED_SCALAR_NAMES;
use crate::types::specified_directives;
use crate::utilities::did_you_mean;
use crate::utilities::suggestion_list;
use indexmap::IndexMap;
use libgql_parser::PrintNode;
use libgql_parser::ast;
use libgql_parser::ast::DirectiveLocation;
use std::collections::HashMap;
use std::collections::HashSet;

/// What the SDL checks need to know about a directive definition.
struct KnownDirective {
    locations: Vec<DirectiveLocation>,
    repeatable: bool,
    /// `(name, printed type, required)` per argument.
    args: Vec<(String, String, bool)>,
}

impl KnownDirective {
    fn from_definition(directive: &Directive) -> Self {
        Self {
            locations: directive.locations().to_vec(),
            repeatable: directive.is_repeatable(),
            args: directive
                .args()
                .values()
                .map(|arg| (arg.name().to_string(), arg.ty().to_string(), arg.is_required()))
                .collect(),
        }
    }

    fn from_ast(def: &ast::DirectiveDefinition) -> Self {
        Self {
            locations: def.locations.clone(),
            repeatable: def.repeatable,
            args: def
                .arguments
                .iter()
                .map(|arg| {
                    let required = arg.value_type.is_non_null() && arg.default_value.is_none();
                    (arg.name.clone(), arg.value_type.print(), required)
                })
                .collect(),
        }
    }
}

/// Checks an SDL document before it is built into a schema (or used to
/// extend one): names are unique, referenced types and directives exist,
/// directives are used where they are allowed and extensions extend a type
/// of the matching kind.
pub(super) struct SdlValidator<'a> {
    base: Option<&'a Schema>,
    document: &'a ast::Document,
    errors: Vec<GraphQLError>,
    known_directives: HashMap<String, KnownDirective>,
    /// Type name to the kind it was defined as, in the words extension
    /// errors use ("object", "input object", ...).
    known_types: IndexMap<String, &'static str>,
}

impl<'a> SdlValidator<'a> {
    pub fn new(document: &'a ast::Document, base: Option<&'a Schema>) -> Self {
        Self {
            base,
            document,
            errors: vec![],
            known_directives: HashMap::new(),
            known_types: IndexMap::new(),
        }
    }

    pub fn validate(mut self) -> Vec<GraphQLError> {
        self.collect_known_definitions();
        self.check_schema_definitions();
        self.check_type_names();
        self.check_directive_definitions();
        self.check_member_names();

        let document = self.document;
        for def in &document.definitions {
            match def {
                ast::Definition::Schema(schema_def) | ast::Definition::SchemaExtension(schema_def) => {
                    self.check_directives(&schema_def.directives, DirectiveLocation::Schema);
                    for operation_type in &schema_def.operation_types {
                        self.check_named_type(&operation_type.named_type);
                    }
                },
                ast::Definition::Type(type_def) => self.check_type_definition(type_def),
                ast::Definition::TypeExtension(type_def) => {
                    self.check_type_extension(type_def);
                    self.check_type_definition(type_def);
                },
                ast::Definition::Directive(directive_def) => {
                    let parent_name = format!("@{}", directive_def.name);
                    self.check_argument_definitions(&parent_name, &directive_def.arguments);
                },
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => (),
            }
        }
        self.errors
    }

    fn collect_known_definitions(&mut self) {
        match self.base {
            Some(base) => {
                for type_ in base.type_map().values() {
                    self.known_types.insert(type_.name().to_string(), type_kind_name(type_));
                }
                for directive in base.directives() {
                    self.known_directives
                        .insert(directive.name().to_string(), KnownDirective::from_definition(directive));
                }
            },
            None => {
                for name in SPECIFIED_SCALAR_NAMES {
                    self.known_types.insert(name.to_string(), "scalar");
                }
                for type_ in introspection_types() {
                    self.known_types.insert(type_.name().to_string(), type_kind_name(type_));
                }
                for directive in specified_directives() {
                    self.known_directives
                        .insert(directive.name().to_string(), KnownDirective::from_definition(&directive));
                }
            },
        }

        for def in &self.document.definitions {
            match def {
                ast::Definition::Type(type_def) => {
                    self.known_types
                        .entry(type_def.name().to_string())
                        .or_insert(definition_kind_name(type_def));
                },
                ast::Definition::Directive(directive_def) => {
                    self.known_directives
                        .insert(directive_def.name.clone(), KnownDirective::from_ast(directive_def));
                },
                _ => (),
            }
        }
    }

    /// https://spec.graphql.org/October2021/#sec-Schema
    fn check_schema_definitions(&mut self) {
        let base_has_schema = self.base.is_some_and(|base| {
            base.get_ast_node().is_some()
                || base.query_type().is_some()
                || base.mutation_type().is_some()
                || base.subscription_type().is_some()
        });

        let mut schema_definition_count = 0;
        let mut defined_operations = HashSet::new();
        for def in &self.document.definitions {
            let schema_def = match def {
                ast::Definition::Schema(schema_def) => {
                    if base_has_schema {
                        self.errors.push(
                            GraphQLError::new("Cannot define a new schema within a schema extension.")
                                .with_node(schema_def.loc.as_ref()),
                        );
                    } else if schema_definition_count > 0 {
                        self.errors.push(
                            GraphQLError::new("Must provide only one schema definition.")
                                .with_node(schema_def.loc.as_ref()),
                        );
                    }
                    schema_definition_count += 1;
                    schema_def
                },
                ast::Definition::SchemaExtension(schema_def) => schema_def,
                _ => continue,
            };

            for operation_type in &schema_def.operation_types {
                let operation = operation_type.operation;
                let already_in_base = self
                    .base
                    .is_some_and(|base| base.root_type_name(operation).is_some());
                if already_in_base {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "Type for {operation} already defined in the schema. It cannot be \
                             redefined.",
                        ))
                        .with_node(operation_type.loc.as_ref()),
                    );
                } else if !defined_operations.insert(operation) {
                    self.errors.push(
                        GraphQLError::new(format!("There can be only one {operation} type in schema."))
                            .with_node(operation_type.loc.as_ref()),
                    );
                }
            }
        }
    }

    fn check_type_names(&mut self) {
        let mut defined: HashMap<&str, Option<&ast::Location>> = HashMap::new();
        for def in &self.document.definitions {
            let ast::Definition::Type(type_def) = def else {
                continue;
            };
            let name = type_def.name();
            if self.base.is_some_and(|base| base.get_type(name).is_some()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Type \"{name}\" already exists in the schema. It cannot also be defined \
                         in this type definition.",
                    ))
                    .with_node(type_def.loc()),
                );
                continue;
            }
            match defined.get(name) {
                Some(first_loc) => self.errors.push(
                    GraphQLError::new(format!("There can be only one type named \"{name}\"."))
                        .with_nodes([*first_loc, type_def.loc()]),
                ),
                None => {
                    defined.insert(name, type_def.loc());
                },
            }
        }
    }

    fn check_directive_definitions(&mut self) {
        let mut defined: HashMap<&str, Option<&ast::Location>> = HashMap::new();
        for def in &self.document.definitions {
            let ast::Definition::Directive(directive_def) = def else {
                continue;
            };
            let name = directive_def.name.as_str();
            if self.base.is_some_and(|base| base.get_directive(name).is_some()) {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Directive \"@{name}\" already exists in the schema. It cannot be \
                         redefined.",
                    ))
                    .with_node(directive_def.loc.as_ref()),
                );
                continue;
            }
            match defined.get(name) {
                Some(first_loc) => self.errors.push(
                    GraphQLError::new(format!("There can be only one directive named \"@{name}\"."))
                        .with_nodes([*first_loc, directive_def.loc.as_ref()]),
                ),
                None => {
                    defined.insert(name, directive_def.loc.as_ref());
                },
            }
        }
    }

    /// Fields and enum values must be unique per type, across the type's
    /// definition and all of its extensions.
    fn check_member_names(&mut self) {
        let mut known_members: HashMap<&str, HashMap<&str, Option<&ast::Location>>> =
            HashMap::new();
        for def in &self.document.definitions {
            let (ast::Definition::Type(type_def) | ast::Definition::TypeExtension(type_def)) = def
            else {
                continue;
            };
            let type_name = type_def.name();
            let (member_kind, members) = member_names(type_def);
            let existing_type = self.base.and_then(|base| base.get_type(type_name));

            for (member_name, member_loc) in members {
                if existing_type.is_some_and(|type_| has_member(type_, member_name)) {
                    self.errors.push(
                        GraphQLError::new(format!(
                            "{member_kind} \"{type_name}.{member_name}\" already exists in the \
                             schema. It cannot also be defined in this type extension.",
                        ))
                        .with_node(member_loc),
                    );
                    continue;
                }
                let known = known_members.entry(type_name).or_default();
                match known.get(member_name) {
                    Some(first_loc) => self.errors.push(
                        GraphQLError::new(format!(
                            "{member_kind} \"{type_name}.{member_name}\" can only be defined once.",
                        ))
                        .with_nodes([*first_loc, member_loc]),
                    ),
                    None => {
                        known.insert(member_name, member_loc);
                    },
                }
            }
        }
    }

    fn check_type_definition(&mut self, type_def: &ast::TypeDefinition) {
        let type_name = type_def.name();
        match type_def {
            ast::TypeDefinition::Scalar(def) => {
                self.check_directives(&def.directives, DirectiveLocation::Scalar);
            },
            ast::TypeDefinition::Object(def) => {
                self.check_directives(&def.directives, DirectiveLocation::Object);
                def.interfaces.iter().for_each(|iface| self.check_named_type(iface));
                self.check_field_definitions(type_name, &def.fields);
            },
            ast::TypeDefinition::Interface(def) => {
                self.check_directives(&def.directives, DirectiveLocation::Interface);
                def.interfaces.iter().for_each(|iface| self.check_named_type(iface));
                self.check_field_definitions(type_name, &def.fields);
            },
            ast::TypeDefinition::Union(def) => {
                self.check_directives(&def.directives, DirectiveLocation::Union);
                def.types.iter().for_each(|member| self.check_named_type(member));
            },
            ast::TypeDefinition::Enum(def) => {
                self.check_directives(&def.directives, DirectiveLocation::Enum);
                for value in &def.values {
                    self.check_directives(&value.directives, DirectiveLocation::EnumValue);
                }
            },
            ast::TypeDefinition::InputObject(def) => {
                self.check_directives(&def.directives, DirectiveLocation::InputObject);
                for field in &def.fields {
                    self.check_directives(&field.directives, DirectiveLocation::InputFieldDefinition);
                    self.check_type_annotation(&field.value_type);
                }
            },
        }
    }

    fn check_field_definitions(&mut self, type_name: &str, fields: &[ast::FieldDefinition]) {
        for field in fields {
            self.check_directives(&field.directives, DirectiveLocation::FieldDefinition);
            self.check_type_annotation(&field.field_type);
            let parent_name = format!("{type_name}.{}", field.name);
            self.check_argument_definitions(&parent_name, &field.arguments);
        }
    }

    fn check_argument_definitions(&mut self, parent_name: &str, args: &[ast::InputValueDefinition]) {
        let mut seen: HashMap<&str, Option<&ast::Location>> = HashMap::new();
        for arg in args {
            self.check_directives(&arg.directives, DirectiveLocation::ArgumentDefinition);
            self.check_type_annotation(&arg.value_type);
            match seen.get(arg.name.as_str()) {
                Some(first_loc) => self.errors.push(
                    GraphQLError::new(format!(
                        "Argument \"{parent_name}({}:)\" can only be defined once.",
                        arg.name,
                    ))
                    .with_nodes([*first_loc, arg.loc.as_ref()]),
                ),
                None => {
                    seen.insert(&arg.name, arg.loc.as_ref());
                },
            }
        }
    }

    fn check_type_extension(&mut self, type_def: &ast::TypeDefinition) {
        let type_name = type_def.name();
        let extension_kind = definition_kind_name(type_def);
        match self.known_types.get(type_name) {
            None => {
                let known = self.known_types.keys().map(String::as_str).collect::<Vec<_>>();
                self.errors.push(
                    GraphQLError::new(format!(
                        "Cannot extend type \"{type_name}\" because it is not defined.{}",
                        did_you_mean(None, &suggestion_list(type_name, &known)),
                    ))
                    .with_node(type_def.loc()),
                );
            },
            Some(defined_kind) if *defined_kind != extension_kind => {
                self.errors.push(
                    GraphQLError::new(format!(
                        "Cannot extend non-{extension_kind} type \"{type_name}\".",
                    ))
                    .with_node(type_def.loc()),
                );
            },
            Some(_) => (),
        }
    }

    fn check_type_annotation(&mut self, annotation: &ast::TypeAnnotation) {
        match annotation {
            ast::TypeAnnotation::Named(named) => self.check_named_type(named),
            ast::TypeAnnotation::List(list) => self.check_type_annotation(&list.inner),
            ast::TypeAnnotation::NonNull(non_null) => self.check_type_annotation(&non_null.inner),
        }
    }

    fn check_named_type(&mut self, named: &ast::NamedType) {
        if self.known_types.contains_key(&named.name) {
            return;
        }
        let known = self.known_types.keys().map(String::as_str).collect::<Vec<_>>();
        self.errors.push(
            GraphQLError::new(format!(
                "Unknown type \"{}\".{}",
                named.name,
                did_you_mean(None, &suggestion_list(&named.name, &known)),
            ))
            .with_node(named.loc.as_ref()),
        );
    }

    fn check_directives(&mut self, directives: &[ast::Directive], location: DirectiveLocation) {
        let mut seen_non_repeatable = HashSet::new();
        for directive in directives {
            let name = directive.name.as_str();
            let loc = directive.loc.as_ref();
            let Some(known) = self.known_directives.get(name) else {
                self.errors.push(
                    GraphQLError::new(format!("Unknown directive \"@{name}\".")).with_node(loc),
                );
                continue;
            };

            let mut errors = vec![];
            if !known.locations.contains(&location) {
                errors.push(
                    GraphQLError::new(format!(
                        "Directive \"@{name}\" may not be used on {}.",
                        location.as_str(),
                    ))
                    .with_node(loc),
                );
            }
            if !known.repeatable && !seen_non_repeatable.insert(name) {
                errors.push(
                    GraphQLError::new(format!(
                        "The directive \"@{name}\" can only be used once at this location.",
                    ))
                    .with_node(loc),
                );
            }

            let mut seen_args = HashSet::new();
            for arg in &directive.arguments {
                if !seen_args.insert(arg.name.as_str()) {
                    errors.push(
                        GraphQLError::new(format!(
                            "There can be only one argument named \"{}\".",
                            arg.name,
                        ))
                        .with_node(arg.loc.as_ref()),
                    );
                }
                if !known.args.iter().any(|(arg_name, _, _)| *arg_name == arg.name) {
                    let arg_names = known.args.iter().map(|(name, _, _)| name.as_str()).collect::<Vec<_>>();
                    errors.push(
                        GraphQLError::new(format!(
                            "Unknown argument \"{}\" on directive \"@{name}\".{}",
                            arg.name,
                            did_you_mean(None, &suggestion_list(&arg.name, &arg_names)),
                        ))
                        .with_node(arg.loc.as_ref()),
                    );
                }
            }
            for (arg_name, arg_type, required) in &known.args {
                if *required && directive.argument(arg_name).is_none() {
                    errors.push(
                        GraphQLError::new(format!(
                            "Argument \"@{name}({arg_name}:)\" of type \"{arg_type}\" is required, \
                             but it was not provided.",
                        ))
                        .with_node(loc),
                    );
                }
            }
            self.errors.append(&mut errors);
        }
    }
}

fn type_kind_name(type_: &GraphQLType) -> &'static str {
    match type_ {
        GraphQLType::Scalar(_) => "scalar",
        GraphQLType::Object(_) => "object",
        GraphQLType::Interface(_) => "interface",
        GraphQLType::Union(_) => "union",
        GraphQLType::Enum(_) => "enum",
        GraphQLType::InputObject(_) => "input object",
    }
}

pub(super) fn definition_kind_name(type_def: &ast::TypeDefinition) -> &'static str {
    match type_def {
        ast::TypeDefinition::Scalar(_) => "scalar",
        ast::TypeDefinition::Object(_) => "object",
        ast::TypeDefinition::Interface(_) => "interface",
        ast::TypeDefinition::Union(_) => "union",
        ast::TypeDefinition::Enum(_) => "enum",
        ast::TypeDefinition::InputObject(_) => "input object",
    }
}

/// The kind of member a type definition declares and each member's name.
fn member_names(type_def: &ast::TypeDefinition) -> (&'static str, Vec<(&str, Option<&ast::Location>)>) {
    match type_def {
        ast::TypeDefinition::Object(ast::ObjectTypeDefinition { fields, .. })
        | ast::TypeDefinition::Interface(ast::InterfaceTypeDefinition { fields, .. }) => (
            "Field",
            fields.iter().map(|field| (field.name.as_str(), field.loc.as_ref())).collect(),
        ),
        ast::TypeDefinition::InputObject(def) => (
            "Field",
            def.fields.iter().map(|field| (field.name.as_str(), field.loc.as_ref())).collect(),
        ),
        ast::TypeDefinition::Enum(def) => (
            "Enum value",
            def.values.iter().map(|value| (value.name.as_str(), value.loc.as_ref())).collect(),
        ),
        ast::TypeDefinition::Scalar(_) | ast::TypeDefinition::Union(_) => ("", vec![]),
    }
}

fn has_member(type_: &GraphQLType, member_name: &str) -> bool {
    match type_ {
        GraphQLType::Object(object) => object.get_field(member_name).is_some(),
        GraphQLType::Interface(iface) => iface.get_field(member_name).is_some(),
        GraphQLType::InputObject(input) => input.get_field(member_name).is_some(),
        GraphQLType::Enum(enum_type) => enum_type.get_value(member_name).is_some(),
        GraphQLType::Scalar(_) | GraphQLType::Union(_) => false,
    }
}
