use crate::error::GraphQLError;
use crate::error::SchemaBuildError;
use crate::introspection::introspection_types;
use crate::schema::SchemaConfig;
use crate::schema::validate_schema;
use crate::types::Directive;
use crate::types::GraphQLType;
use crate::types::ObjectType;
use crate::types::TypeRef;
use crate::types::specified_directives;
use crate::types::specified_scalar_type;
use indexmap::IndexMap;
use libgql_parser::ast;
use libgql_parser::ast::OperationType;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The object and interface types implementing an interface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Implementations {
    pub objects: Vec<String>,
    pub interfaces: Vec<String>,
}

/// An immutable registry of named types and directives, plus the names of
/// the root operation types.
///
/// Named types refer to each other by name (see [`TypeRef`]) and are looked
/// up here. A schema may be shared freely between concurrent validations
/// and executions.
#[derive(Debug)]
pub struct Schema {
    description: Option<String>,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
    type_map: IndexMap<String, GraphQLType>,
    directives: Vec<Directive>,
    ast_node: Option<ast::SchemaDefinition>,
    extension_ast_nodes: Vec<ast::SchemaDefinition>,
    assume_valid: bool,
    implementations: OnceLock<HashMap<String, Implementations>>,
    pub(crate) validation_errors: OnceLock<Vec<GraphQLError>>,
}

impl Schema {
    /// Collects every type reachable from the root types, the registered
    /// types, directive arguments and the introspection types into one map.
    ///
    /// Built-in scalars are added when referenced. Two distinct types with
    /// the same name, or a reference to a name that is neither registered
    /// nor built in, fail construction.
    pub fn new(config: SchemaConfig) -> Result<Self, SchemaBuildError> {
        let directives = config.directives.unwrap_or_else(specified_directives);

        let mut registry: HashMap<String, GraphQLType> = HashMap::new();
        for type_ in config.types.iter().chain(introspection_types()) {
            match registry.get(type_.name()) {
                Some(existing) if !existing.ptr_eq(type_) => {
                    return Err(SchemaBuildError::DuplicateTypeName {
                        type_name: type_.name().to_string(),
                    });
                },
                Some(_) => (),
                None => {
                    registry.insert(type_.name().to_string(), type_.clone());
                },
            }
        }

        let mut collector = TypeCollector {
            registry,
            type_map: IndexMap::new(),
        };
        for type_ in &config.types {
            collector.collect(type_.name(), "the schema configuration")?;
        }
        let root_names = [&config.query, &config.mutation, &config.subscription];
        for root_name in root_names.into_iter().flatten() {
            collector.collect(root_name, "the schema root types")?;
        }
        for directive in &directives {
            for arg in directive.args().values() {
                let referenced_by = format!("@{}({}:)", directive.name(), arg.name());
                collector.collect(arg.ty().named_type(), &referenced_by)?;
            }
        }
        collector.collect("__Schema", "introspection")?;

        tracing::debug!(
            type_count = collector.type_map.len(),
            directive_count = directives.len(),
            "built schema",
        );

        Ok(Self {
            description: config.description,
            query_type: config.query,
            mutation_type: config.mutation,
            subscription_type: config.subscription,
            type_map: collector.type_map,
            directives,
            ast_node: config.ast_node,
            extension_ast_nodes: config.extension_ast_nodes,
            assume_valid: config.assume_valid,
            implementations: OnceLock::new(),
            validation_errors: OnceLock::new(),
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The query root type, when one is configured and is an object type.
    pub fn query_type(&self) -> Option<&ObjectType> {
        self.get_type(self.query_type.as_deref()?)?.as_object()
    }

    pub fn mutation_type(&self) -> Option<&ObjectType> {
        self.get_type(self.mutation_type.as_deref()?)?.as_object()
    }

    pub fn subscription_type(&self) -> Option<&ObjectType> {
        self.get_type(self.subscription_type.as_deref()?)?.as_object()
    }

    /// The configured name of the root type for `operation`, whatever kind
    /// of type it names.
    pub fn root_type_name(&self, operation: OperationType) -> Option<&str> {
        match operation {
            OperationType::Query => self.query_type.as_deref(),
            OperationType::Mutation => self.mutation_type.as_deref(),
            OperationType::Subscription => self.subscription_type.as_deref(),
        }
    }

    pub fn get_root_type(&self, operation: OperationType) -> Option<&ObjectType> {
        match operation {
            OperationType::Query => self.query_type(),
            OperationType::Mutation => self.mutation_type(),
            OperationType::Subscription => self.subscription_type(),
        }
    }

    /// All named types, including built-in scalars and introspection types,
    /// in the order they were first reached.
    pub fn type_map(&self) -> &IndexMap<String, GraphQLType> {
        &self.type_map
    }

    pub fn get_type(&self, name: &str) -> Option<&GraphQLType> {
        self.type_map.get(name)
    }

    /// The named type at the core of `type_ref`.
    pub fn get_named_type(&self, type_ref: &TypeRef) -> Option<&GraphQLType> {
        self.get_type(type_ref.named_type())
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|directive| directive.name() == name)
    }

    pub fn get_ast_node(&self) -> Option<&ast::SchemaDefinition> {
        self.ast_node.as_ref()
    }

    pub fn get_extension_ast_nodes(&self) -> &[ast::SchemaDefinition] {
        &self.extension_ast_nodes
    }

    pub fn is_assumed_valid(&self) -> bool {
        self.assume_valid
    }

    /// The problems [`validate_schema`] finds with this schema. Computed
    /// once and cached.
    pub fn validation_errors(&self) -> &[GraphQLError] {
        validate_schema(self)
    }

    /// The object types an abstract type may resolve to: a union's members
    /// or an interface's object implementations.
    pub fn get_possible_types(&self, abstract_type: &GraphQLType) -> Vec<&ObjectType> {
        let names: &[String] = match abstract_type {
            GraphQLType::Union(union_type) => union_type.types(),
            GraphQLType::Interface(iface) => &self.get_implementations(iface.name()).objects,
            _ => &[],
        };
        names
            .iter()
            .filter_map(|name| self.get_type(name)?.as_object())
            .collect()
    }

    pub fn get_implementations(&self, interface_name: &str) -> &Implementations {
        static EMPTY: Implementations = Implementations {
            objects: Vec::new(),
            interfaces: Vec::new(),
        };
        self.implementations
            .get_or_init(|| self.collect_implementations())
            .get(interface_name)
            .unwrap_or(&EMPTY)
    }

    /// Whether `maybe_sub_type` is a member of the union, or an object or
    /// interface implementing the interface, `abstract_type`.
    pub fn is_sub_type(&self, abstract_type: &GraphQLType, maybe_sub_type: &str) -> bool {
        match abstract_type {
            GraphQLType::Union(union_type) => {
                union_type.types().iter().any(|member| member == maybe_sub_type)
            },
            GraphQLType::Interface(iface) => {
                let implementations = self.get_implementations(iface.name());
                implementations.objects.iter().any(|name| name == maybe_sub_type)
                    || implementations.interfaces.iter().any(|name| name == maybe_sub_type)
            },
            _ => false,
        }
    }

    /// Reassembles the configuration this schema was built from, for
    /// extending it.
    pub fn to_config(&self) -> SchemaConfig {
        SchemaConfig {
            description: self.description.clone(),
            query: self.query_type.clone(),
            mutation: self.mutation_type.clone(),
            subscription: self.subscription_type.clone(),
            types: self.type_map.values().cloned().collect(),
            directives: Some(self.directives.clone()),
            ast_node: self.ast_node.clone(),
            extension_ast_nodes: self.extension_ast_nodes.clone(),
            assume_valid: self.assume_valid,
        }
    }

    fn collect_implementations(&self) -> HashMap<String, Implementations> {
        let mut implementations: HashMap<String, Implementations> = HashMap::new();
        for type_ in self.type_map.values() {
            match type_ {
                GraphQLType::Object(object) => {
                    for iface_name in object.interfaces() {
                        implementations
                            .entry(iface_name.clone())
                            .or_default()
                            .objects
                            .push(object.name().to_string());
                    }
                },
                GraphQLType::Interface(iface) => {
                    for iface_name in iface.interfaces() {
                        implementations
                            .entry(iface_name.clone())
                            .or_default()
                            .interfaces
                            .push(iface.name().to_string());
                    }
                },
                _ => (),
            }
        }
        implementations
    }
}

/// Walks type references depth-first, registering each named type the first
/// time it is reached.
struct TypeCollector {
    registry: HashMap<String, GraphQLType>,
    type_map: IndexMap<String, GraphQLType>,
}

impl TypeCollector {
    fn collect(&mut self, name: &str, referenced_by: &str) -> Result<(), SchemaBuildError> {
        if self.type_map.contains_key(name) {
            return Ok(());
        }
        let type_ = match self.registry.get(name) {
            Some(type_) => type_.clone(),
            None => match specified_scalar_type(name) {
                Some(scalar) => GraphQLType::from(scalar),
                None => {
                    return Err(SchemaBuildError::UnknownType {
                        type_name: name.to_string(),
                        referenced_by: referenced_by.to_string(),
                    });
                },
            },
        };
        self.type_map.insert(name.to_string(), type_.clone());

        match &type_ {
            GraphQLType::Union(union_type) => {
                for member in union_type.types() {
                    self.collect(member, &format!("union {name}"))?;
                }
            },
            GraphQLType::Object(_) | GraphQLType::Interface(_) => {
                let interfaces = match &type_ {
                    GraphQLType::Object(object) => object.interfaces(),
                    GraphQLType::Interface(iface) => iface.interfaces(),
                    _ => &[],
                };
                for iface_name in interfaces {
                    self.collect(iface_name, &format!("type {name}"))?;
                }
                for (field_name, field) in type_.fields().into_iter().flatten() {
                    let referenced_by = format!("field {name}.{field_name}");
                    self.collect(field.ty().named_type(), &referenced_by)?;
                    for (arg_name, arg) in field.args() {
                        let referenced_by = format!("argument {name}.{field_name}({arg_name}:)");
                        self.collect(arg.ty().named_type(), &referenced_by)?;
                    }
                }
            },
            GraphQLType::InputObject(input) => {
                for (field_name, field) in input.fields() {
                    let referenced_by = format!("input field {name}.{field_name}");
                    self.collect(field.ty().named_type(), &referenced_by)?;
                }
            },
            GraphQLType::Scalar(_) | GraphQLType::Enum(_) => (),
        }
        Ok(())
    }
}
