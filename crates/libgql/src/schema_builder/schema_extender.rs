use crate::error::SchemaBuildError;
use crate::introspection::is_introspection_type;
use crate::schema::Schema;
use crate::schema::SchemaConfig;
use crate::schema_builder::BuildSchemaOptions;
use crate::schema_builder::sdl_validator::definition_kind_name;
use crate::types::DEFAULT_DEPRECATION_REASON;
use crate::types::DefaultValue;
use crate::types::Directive;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::FieldResolver;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::InputValue;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::TypeRef;
use crate::types::UnionType;
use crate::types::is_specified_scalar_type;
use crate::types::specified_directives;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::ast::OperationType;
use std::collections::HashMap;

/// Produces a new schema from `base` (or from nothing) plus the type-system
/// definitions and extensions in an SDL document.
///
/// Types of the base schema that the document does not extend are carried
/// over untouched; extended types are copied and grown. The base schema is
/// never modified.
pub(super) struct SchemaExtender<'a> {
    base: Option<&'a Schema>,
    options: &'a BuildSchemaOptions,
    type_defs: IndexMap<&'a str, &'a ast::TypeDefinition>,
    type_extensions: HashMap<&'a str, Vec<&'a ast::TypeDefinition>>,
    directive_defs: Vec<&'a ast::DirectiveDefinition>,
    schema_def: Option<&'a ast::SchemaDefinition>,
    schema_extensions: Vec<&'a ast::SchemaDefinition>,
}

impl<'a> SchemaExtender<'a> {
    pub fn new(
        base: Option<&'a Schema>,
        document: &'a ast::Document,
        options: &'a BuildSchemaOptions,
    ) -> Result<Self, SchemaBuildError> {
        let mut extender = Self {
            base,
            options,
            type_defs: IndexMap::new(),
            type_extensions: HashMap::new(),
            directive_defs: vec![],
            schema_def: None,
            schema_extensions: vec![],
        };

        for def in &document.definitions {
            match def {
                ast::Definition::Schema(schema_def) => {
                    if extender.schema_def.is_some() {
                        return Err(SchemaBuildError::DuplicateSchemaDefinition);
                    }
                    extender.schema_def = Some(schema_def);
                },
                ast::Definition::SchemaExtension(schema_def) => {
                    extender.schema_extensions.push(schema_def);
                },
                ast::Definition::Type(type_def) => {
                    // Later duplicates are reported by SDL validation; the
                    // first definition wins.
                    extender.type_defs.entry(type_def.name()).or_insert(type_def);
                },
                ast::Definition::TypeExtension(type_def) => {
                    extender.type_extensions.entry(type_def.name()).or_default().push(type_def);
                },
                ast::Definition::Directive(directive_def) => {
                    extender.directive_defs.push(directive_def);
                },
                ast::Definition::Operation(_) | ast::Definition::Fragment(_) => (),
            }
        }
        extender.check_extension_targets()?;
        Ok(extender)
    }

    pub fn extend(self) -> Result<Schema, SchemaBuildError> {
        let mut types = vec![];
        if let Some(base) = self.base {
            for type_ in base.type_map().values() {
                types.push(self.extend_named_type(type_));
            }
        }
        for type_def in self.type_defs.values() {
            types.push(self.build_type(type_def));
        }

        let mut directives = self
            .base
            .map(|base| base.directives().to_vec())
            .unwrap_or_default();
        directives.extend(self.directive_defs.iter().map(|def| build_directive(def)));
        if self.base.is_none() {
            for specified in specified_directives() {
                if !directives.iter().any(|directive| directive.name() == specified.name()) {
                    directives.push(specified);
                }
            }
        }

        let mut config = match self.base {
            Some(base) => {
                let base_config = base.to_config();
                SchemaConfig {
                    types: vec![],
                    directives: None,
                    ..base_config
                }
            },
            None => SchemaConfig::new(),
        };
        config.types = types;
        config.directives = Some(directives);
        config.assume_valid = self.options.assume_valid;

        for schema_def in self.schema_def.into_iter().chain(self.schema_extensions.iter().copied()) {
            for operation_type in &schema_def.operation_types {
                let type_name = Some(operation_type.named_type.name.clone());
                match operation_type.operation {
                    OperationType::Query => config.query = type_name,
                    OperationType::Mutation => config.mutation = type_name,
                    OperationType::Subscription => config.subscription = type_name,
                }
            }
        }
        if self.base.is_none() && self.schema_def.is_none() {
            let defines = |name: &str| {
                matches!(self.type_defs.get(name), Some(ast::TypeDefinition::Object(_)))
                    .then(|| name.to_string())
            };
            config.query = config.query.or_else(|| defines("Query"));
            config.mutation = config.mutation.or_else(|| defines("Mutation"));
            config.subscription = config.subscription.or_else(|| defines("Subscription"));
        }

        if let Some(schema_def) = self.schema_def {
            if let Some(description) = &schema_def.description {
                config.description = Some(description.value.clone());
            }
            config.ast_node = Some(schema_def.clone());
        }
        config
            .extension_ast_nodes
            .extend(self.schema_extensions.iter().map(|&def| def.clone()));

        tracing::debug!(
            new_types = self.type_defs.len(),
            extended_types = self.type_extensions.len(),
            new_directives = self.directive_defs.len(),
            "extending schema",
        );
        Schema::new(config)
    }

    fn check_extension_targets(&self) -> Result<(), SchemaBuildError> {
        for (type_name, extensions) in &self.type_extensions {
            let defined_kind = match self.type_defs.get(type_name) {
                Some(type_def) => definition_kind_name(type_def),
                None => match self.base.and_then(|base| base.get_type(type_name)) {
                    Some(type_) => graphql_type_kind_name(type_),
                    None => {
                        return Err(SchemaBuildError::ExtensionOfUndefinedType {
                            type_name: type_name.to_string(),
                        });
                    },
                },
            };
            for extension in extensions {
                let expected_kind = definition_kind_name(extension);
                if expected_kind != defined_kind {
                    return Err(SchemaBuildError::ExtensionKindMismatch {
                        type_name: type_name.to_string(),
                        expected_kind,
                    });
                }
            }
        }
        Ok(())
    }

    fn extensions_of(&self, type_name: &str) -> &[&'a ast::TypeDefinition] {
        self.type_extensions
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // =========================================================================
    // Extending types of the base schema
    // =========================================================================

    fn extend_named_type(&self, type_: &GraphQLType) -> GraphQLType {
        let type_name = type_.name();
        if is_specified_scalar_type(type_name) || is_introspection_type(type_name) {
            return type_.clone();
        }
        let extensions = self.extensions_of(type_name);
        let has_options = self.options.type_resolvers.contains_key(type_name)
            || self.options.is_type_of.contains_key(type_name)
            || self
                .options
                .field_resolvers
                .keys()
                .any(|(resolver_type, _)| resolver_type == type_name);
        if extensions.is_empty() && !has_options {
            return type_.clone();
        }

        match type_ {
            GraphQLType::Scalar(scalar) => {
                let nodes = scalar_extensions(extensions);
                let mut scalar = (**scalar).clone();
                if let Some(url) = nodes.iter().find_map(|node| specified_by_url(&node.directives)) {
                    scalar = scalar.specified_by_url(url);
                }
                let mut all_nodes = scalar.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                scalar.extension_ast_nodes(all_nodes).into()
            },
            GraphQLType::Object(object) => {
                let nodes = object_extensions(extensions);
                let mut object = (**object).clone();
                for (field_name, field) in object.fields().clone() {
                    if let Some(resolver) = self.field_resolver(type_name, &field_name) {
                        object = object.field(field.resolver(resolver));
                    }
                }
                for node in &nodes {
                    for iface in &node.interfaces {
                        object = object.interface(&iface.name);
                    }
                    for field_def in &node.fields {
                        object = object.field(self.build_field(type_name, field_def));
                    }
                }
                if let Some(is_type_of) = self.options.is_type_of.get(type_name) {
                    object = object.is_type_of(is_type_of.clone());
                }
                let mut all_nodes = object.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                object.extension_ast_nodes(all_nodes).into()
            },
            GraphQLType::Interface(iface) => {
                let nodes = interface_extensions(extensions);
                let mut iface = (**iface).clone();
                for (field_name, field) in iface.fields().clone() {
                    if let Some(resolver) = self.field_resolver(type_name, &field_name) {
                        iface = iface.field(field.resolver(resolver));
                    }
                }
                for node in &nodes {
                    for super_iface in &node.interfaces {
                        iface = iface.interface(&super_iface.name);
                    }
                    for field_def in &node.fields {
                        iface = iface.field(self.build_field(type_name, field_def));
                    }
                }
                if let Some(resolver) = self.options.type_resolvers.get(type_name) {
                    iface = iface.resolve_type(resolver.clone());
                }
                let mut all_nodes = iface.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                iface.extension_ast_nodes(all_nodes).into()
            },
            GraphQLType::Union(union_type) => {
                let nodes = union_extensions(extensions);
                let mut union_type = (**union_type).clone();
                for node in &nodes {
                    for member in &node.types {
                        union_type = union_type.member(&member.name);
                    }
                }
                if let Some(resolver) = self.options.type_resolvers.get(type_name) {
                    union_type = union_type.resolve_type(resolver.clone());
                }
                let mut all_nodes = union_type.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                union_type.extension_ast_nodes(all_nodes).into()
            },
            GraphQLType::Enum(enum_type) => {
                let nodes = enum_extensions(extensions);
                let mut enum_type = (**enum_type).clone();
                for node in &nodes {
                    for value_def in &node.values {
                        enum_type = enum_type.value(build_enum_value(value_def));
                    }
                }
                let mut all_nodes = enum_type.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                enum_type.extension_ast_nodes(all_nodes).into()
            },
            GraphQLType::InputObject(input) => {
                let nodes = input_object_extensions(extensions);
                let mut input = (**input).clone();
                for node in &nodes {
                    for field_def in &node.fields {
                        input = input.field(build_input_value(field_def));
                    }
                }
                let mut all_nodes = input.get_extension_ast_nodes().to_vec();
                all_nodes.extend(nodes);
                input.extension_ast_nodes(all_nodes).into()
            },
        }
    }

    // =========================================================================
    // Building types defined in the document
    // =========================================================================

    fn build_type(&self, type_def: &ast::TypeDefinition) -> GraphQLType {
        let type_name = type_def.name();
        let extensions = self.extensions_of(type_name);
        let description = type_def.description().map(|description| description.value.clone());

        match type_def {
            ast::TypeDefinition::Scalar(def) => {
                let nodes = scalar_extensions(extensions);
                let mut scalar = match self.options.scalars.get(type_name) {
                    Some(custom) => custom.clone(),
                    None => ScalarType::new(type_name),
                };
                if let Some(description) = description {
                    scalar = scalar.description(description);
                }
                let url = std::iter::once(def)
                    .chain(&nodes)
                    .find_map(|node| specified_by_url(&node.directives));
                if let Some(url) = url {
                    scalar = scalar.specified_by_url(url);
                }
                scalar.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
            ast::TypeDefinition::Object(def) => {
                let nodes = object_extensions(extensions);
                let mut object = ObjectType::new(type_name);
                if let Some(description) = description {
                    object = object.description(description);
                }
                for node in std::iter::once(def).chain(&nodes) {
                    for iface in &node.interfaces {
                        object = object.interface(&iface.name);
                    }
                    for field_def in &node.fields {
                        object = object.field(self.build_field(type_name, field_def));
                    }
                }
                if let Some(is_type_of) = self.options.is_type_of.get(type_name) {
                    object = object.is_type_of(is_type_of.clone());
                }
                object.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
            ast::TypeDefinition::Interface(def) => {
                let nodes = interface_extensions(extensions);
                let mut iface = InterfaceType::new(type_name);
                if let Some(description) = description {
                    iface = iface.description(description);
                }
                for node in std::iter::once(def).chain(&nodes) {
                    for super_iface in &node.interfaces {
                        iface = iface.interface(&super_iface.name);
                    }
                    for field_def in &node.fields {
                        iface = iface.field(self.build_field(type_name, field_def));
                    }
                }
                if let Some(resolver) = self.options.type_resolvers.get(type_name) {
                    iface = iface.resolve_type(resolver.clone());
                }
                iface.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
            ast::TypeDefinition::Union(def) => {
                let nodes = union_extensions(extensions);
                let mut union_type = UnionType::new(type_name);
                if let Some(description) = description {
                    union_type = union_type.description(description);
                }
                for node in std::iter::once(def).chain(&nodes) {
                    for member in &node.types {
                        union_type = union_type.member(&member.name);
                    }
                }
                if let Some(resolver) = self.options.type_resolvers.get(type_name) {
                    union_type = union_type.resolve_type(resolver.clone());
                }
                union_type.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
            ast::TypeDefinition::Enum(def) => {
                let nodes = enum_extensions(extensions);
                let mut enum_type = EnumType::new(type_name);
                if let Some(description) = description {
                    enum_type = enum_type.description(description);
                }
                for node in std::iter::once(def).chain(&nodes) {
                    for value_def in &node.values {
                        enum_type = enum_type.value(build_enum_value(value_def));
                    }
                }
                enum_type.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
            ast::TypeDefinition::InputObject(def) => {
                let nodes = input_object_extensions(extensions);
                let mut input = InputObjectType::new(type_name);
                if let Some(description) = description {
                    input = input.description(description);
                }
                for node in std::iter::once(def).chain(&nodes) {
                    for field_def in &node.fields {
                        input = input.field(build_input_value(field_def));
                    }
                }
                input.ast_node(def.clone()).extension_ast_nodes(nodes).into()
            },
        }
    }

    fn build_field(&self, type_name: &str, def: &ast::FieldDefinition) -> Field {
        let mut field = Field::new(&def.name, TypeRef::from_ast(&def.field_type));
        if let Some(description) = &def.description {
            field = field.description(&description.value);
        }
        for arg_def in &def.arguments {
            field = field.argument(build_input_value(arg_def));
        }
        if let Some(reason) = deprecation_reason(&def.directives) {
            field = field.deprecated(reason);
        }
        if let Some(resolver) = self.field_resolver(type_name, &def.name) {
            field = field.resolver(resolver);
        }
        field.ast_node(def.clone())
    }

    fn field_resolver(&self, type_name: &str, field_name: &str) -> Option<FieldResolver> {
        self.options
            .field_resolvers
            .get(&(type_name.to_string(), field_name.to_string()))
            .cloned()
    }
}

fn build_directive(def: &ast::DirectiveDefinition) -> Directive {
    let mut directive = Directive::new(&def.name).repeatable(def.repeatable);
    if let Some(description) = &def.description {
        directive = directive.description(&description.value);
    }
    for location in &def.locations {
        directive = directive.location(*location);
    }
    for arg_def in &def.arguments {
        directive = directive.argument(build_input_value(arg_def));
    }
    directive.ast_node(def.clone())
}

fn build_input_value(def: &ast::InputValueDefinition) -> InputValue {
    let mut input_value = InputValue::new(&def.name, TypeRef::from_ast(&def.value_type));
    if let Some(description) = &def.description {
        input_value = input_value.description(&description.value);
    }
    if let Some(default_value) = &def.default_value {
        input_value = input_value.default_value(DefaultValue::Literal(default_value.clone()));
    }
    if let Some(reason) = deprecation_reason(&def.directives) {
        input_value = input_value.deprecated(reason);
    }
    input_value.ast_node(def.clone())
}

fn build_enum_value(def: &ast::EnumValueDefinition) -> EnumValue {
    let mut value = EnumValue::new(&def.name);
    if let Some(description) = &def.description {
        value = value.description(&description.value);
    }
    if let Some(reason) = deprecation_reason(&def.directives) {
        value = value.deprecated(reason);
    }
    value.ast_node(def.clone())
}

/// The reason given by an `@deprecated` directive, if one is present.
fn deprecation_reason(directives: &[ast::Directive]) -> Option<String> {
    let deprecated = directives.iter().find(|directive| directive.name == "deprecated")?;
    let reason = match deprecated.argument("reason").map(|arg| &arg.value) {
        Some(ast::Value::String { value, .. }) => value.clone(),
        _ => DEFAULT_DEPRECATION_REASON.to_string(),
    };
    Some(reason)
}

fn specified_by_url(directives: &[ast::Directive]) -> Option<String> {
    let specified_by = directives.iter().find(|directive| directive.name == "specifiedBy")?;
    match &specified_by.argument("url")?.value {
        ast::Value::String { value, .. } => Some(value.clone()),
        _ => None,
    }
}

fn graphql_type_kind_name(type_: &GraphQLType) -> &'static str {
    match type_ {
        GraphQLType::Scalar(_) => "scalar",
        GraphQLType::Object(_) => "object",
        GraphQLType::Interface(_) => "interface",
        GraphQLType::Union(_) => "union",
        GraphQLType::Enum(_) => "enum",
        GraphQLType::InputObject(_) => "input object",
    }
}

// =============================================================================
// Extension nodes by kind
// =============================================================================

fn scalar_extensions(extensions: &[&ast::TypeDefinition]) -> Vec<ast::ScalarTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::Scalar(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}

fn object_extensions(extensions: &[&ast::TypeDefinition]) -> Vec<ast::ObjectTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::Object(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}

fn interface_extensions(extensions: &[&ast::TypeDefinition]) -> Vec<ast::InterfaceTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::Interface(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}

fn union_extensions(extensions: &[&ast::TypeDefinition]) -> Vec<ast::UnionTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::Union(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}

fn enum_extensions(extensions: &[&ast::TypeDefinition]) -> Vec<ast::EnumTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::Enum(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}

fn input_object_extensions(
    extensions: &[&ast::TypeDefinition],
) -> Vec<ast::InputObjectTypeDefinition> {
    extensions
        .iter()
        .filter_map(|ext| match ext {
            ast::TypeDefinition::InputObject(def) => Some(def.clone()),
            _ => None,
        })
        .collect()
}
