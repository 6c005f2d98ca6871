use crate::error::FieldError;
use crate::introspection::introspection_value::IntrospectionValue;
use crate::introspection::introspection_value::named_type_value;
use crate::introspection::introspection_value::type_value;
use crate::types::DefaultValue;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::FieldResult;
use crate::types::GraphQLType;
use crate::types::InputValue;
use crate::types::ObjectType;
use crate::types::ResolverArgs;
use crate::types::TypeKind;
use crate::types::TypeRef;
use crate::utilities::ast_from_value;
use crate::value::FieldValue;
use libgql_parser::PrintNode;
use libgql_parser::ast::DirectiveLocation;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

pub const INTROSPECTION_TYPE_NAMES: [&str; 8] = [
    "__Schema",
    "__Directive",
    "__DirectiveLocation",
    "__Type",
    "__Field",
    "__InputValue",
    "__EnumValue",
    "__TypeKind",
];

pub fn is_introspection_type(name: &str) -> bool {
    INTROSPECTION_TYPE_NAMES.contains(&name)
}

static INTROSPECTION_TYPES: LazyLock<Vec<GraphQLType>> = LazyLock::new(|| {
    vec![
        schema_type().into(),
        directive_type().into(),
        directive_location_type().into(),
        type_type().into(),
        field_type().into(),
        input_value_type().into(),
        enum_value_type().into(),
        type_kind_type().into(),
    ]
});

/// The types describing a schema to introspection queries. Every schema
/// contains them, and every schema shares these same instances.
pub fn introspection_types() -> &'static [GraphQLType] {
    &INTROSPECTION_TYPES
}

// =============================================================================
// Resolver helpers
// =============================================================================

fn include_deprecated_arg() -> InputValue {
    InputValue::new("includeDeprecated", TypeRef::named("Boolean"))
        .default_value(DefaultValue::Value(JsonValue::Bool(false)))
}

fn include_deprecated(args: &ResolverArgs<'_>) -> bool {
    args.arg("includeDeprecated")
        .and_then(JsonValue::as_bool)
        .unwrap_or(false)
}

fn optional_string(value: Option<&str>) -> FieldValue {
    value.map_or(FieldValue::Null, FieldValue::from)
}

fn list(items: impl IntoIterator<Item = FieldValue>) -> FieldValue {
    FieldValue::List(items.into_iter().collect())
}

/// The named type a `__Type` source refers to, or `None` for list and
/// non-null wrappers.
fn source_named_type<'a>(args: &ResolverArgs<'a>) -> Result<Option<&'a GraphQLType>, FieldError> {
    let TypeRef::Named(name) = IntrospectionValue::from_source(args)?.as_type_ref()? else {
        return Ok(None);
    };
    match args.info.schema.get_type(name) {
        Some(type_) => Ok(Some(type_)),
        None => Err(FieldError::new(format!("Unknown type \"{name}\"."))),
    }
}

fn input_values<'v>(
    values: impl Iterator<Item = &'v InputValue>,
    include_deprecated: bool,
) -> FieldValue {
    list(
        values
            .filter(|value| include_deprecated || !value.is_deprecated())
            .map(|value| IntrospectionValue::InputValue(value.clone()).into_field_value()),
    )
}

// =============================================================================
// __Schema
// =============================================================================

fn schema_type() -> ObjectType {
    ObjectType::new("__Schema")
        .description(
            "A GraphQL Schema defines the capabilities of a GraphQL server. It exposes all \
             available types and directives on the server, as well as the entry points for \
             query, mutation, and subscription operations.",
        )
        .field(
            Field::new("description", TypeRef::named("String"))
                .resolve_with(|args| Ok(optional_string(args.info.schema.description()))),
        )
        .field(
            Field::new("types", TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("__Type"))))
                .description("A list of all types supported by this server.")
                .resolve_with(|args| {
                    let types = args.info.schema.type_map().keys();
                    Ok(list(types.map(|name| named_type_value(name))))
                }),
        )
        .field(
            Field::new("queryType", TypeRef::named_non_null("__Type"))
                .description("The type that query operations will be rooted at.")
                .resolve_with(|args| {
                    let root = args.info.schema.query_type();
                    Ok(root.map_or(FieldValue::Null, |root| named_type_value(root.name())))
                }),
        )
        .field(
            Field::new("mutationType", TypeRef::named("__Type"))
                .description(
                    "If this server supports mutation, the type that mutation operations will be \
                     rooted at.",
                )
                .resolve_with(|args| {
                    let root = args.info.schema.mutation_type();
                    Ok(root.map_or(FieldValue::Null, |root| named_type_value(root.name())))
                }),
        )
        .field(
            Field::new("subscriptionType", TypeRef::named("__Type"))
                .description(
                    "If this server support subscription, the type that subscription operations \
                     will be rooted at.",
                )
                .resolve_with(|args| {
                    let root = args.info.schema.subscription_type();
                    Ok(root.map_or(FieldValue::Null, |root| named_type_value(root.name())))
                }),
        )
        .field(
            Field::new(
                "directives",
                TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("__Directive"))),
            )
            .description("A list of all directives supported by this server.")
            .resolve_with(|args| {
                let directives = args.info.schema.directives().iter();
                Ok(list(directives.map(|directive| {
                    IntrospectionValue::Directive(directive.clone()).into_field_value()
                })))
            }),
        )
}

// =============================================================================
// __Directive
// =============================================================================

fn directive_type() -> ObjectType {
    ObjectType::new("__Directive")
        .description(
            "A Directive provides a way to describe alternate runtime execution and type \
             validation behavior in a GraphQL document.\n\nIn some cases, you need to provide \
             options to alter GraphQL's execution behavior in ways field arguments will not \
             suffice, such as conditionally including or skipping a field. Directives provide \
             this by describing additional information to the executor.",
        )
        .field(Field::new("name", TypeRef::named_non_null("String")).resolve_with(|args| {
            let directive = IntrospectionValue::from_source(&args)?.as_directive()?;
            Ok(FieldValue::from(directive.name()))
        }))
        .field(Field::new("description", TypeRef::named("String")).resolve_with(|args| {
            let directive = IntrospectionValue::from_source(&args)?.as_directive()?;
            Ok(optional_string(directive.get_description()))
        }))
        .field(Field::new("isRepeatable", TypeRef::named_non_null("Boolean")).resolve_with(
            |args| {
                let directive = IntrospectionValue::from_source(&args)?.as_directive()?;
                Ok(FieldValue::from(directive.is_repeatable()))
            },
        ))
        .field(
            Field::new(
                "locations",
                TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("__DirectiveLocation"))),
            )
            .resolve_with(|args| {
                let directive = IntrospectionValue::from_source(&args)?.as_directive()?;
                let locations = directive.locations().iter();
                Ok(list(locations.map(|location| FieldValue::from(location.as_str()))))
            }),
        )
        .field(
            Field::new(
                "args",
                TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("__InputValue"))),
            )
            .argument(include_deprecated_arg())
            .resolve_with(|args| {
                let directive = IntrospectionValue::from_source(&args)?.as_directive()?;
                Ok(input_values(directive.args().values(), include_deprecated(&args)))
            }),
        )
}

fn directive_location_type() -> EnumType {
    DirectiveLocation::ALL.into_iter().fold(
        EnumType::new("__DirectiveLocation").description(
            "A Directive can be adjacent to many parts of the GraphQL language, a \
             __DirectiveLocation describes one such possible adjacencies.",
        ),
        |enum_type, location| {
            enum_type.value(
                EnumValue::new(location.as_str())
                    .description(directive_location_description(location)),
            )
        },
    )
}

fn directive_location_description(location: DirectiveLocation) -> &'static str {
    match location {
        DirectiveLocation::Query => "Location adjacent to a query operation.",
        DirectiveLocation::Mutation => "Location adjacent to a mutation operation.",
        DirectiveLocation::Subscription => "Location adjacent to a subscription operation.",
        DirectiveLocation::Field => "Location adjacent to a field.",
        DirectiveLocation::FragmentDefinition => "Location adjacent to a fragment definition.",
        DirectiveLocation::FragmentSpread => "Location adjacent to a fragment spread.",
        DirectiveLocation::InlineFragment => "Location adjacent to an inline fragment.",
        DirectiveLocation::VariableDefinition => "Location adjacent to a variable definition.",
        DirectiveLocation::Schema => "Location adjacent to a schema definition.",
        DirectiveLocation::Scalar => "Location adjacent to a scalar definition.",
        DirectiveLocation::Object => "Location adjacent to an object type definition.",
        DirectiveLocation::FieldDefinition => "Location adjacent to a field definition.",
        DirectiveLocation::ArgumentDefinition => "Location adjacent to an argument definition.",
        DirectiveLocation::Interface => "Location adjacent to an interface definition.",
        DirectiveLocation::Union => "Location adjacent to a union definition.",
        DirectiveLocation::Enum => "Location adjacent to an enum definition.",
        DirectiveLocation::EnumValue => "Location adjacent to an enum value definition.",
        DirectiveLocation::InputObject => "Location adjacent to an input object type definition.",
        DirectiveLocation::InputFieldDefinition => {
            "Location adjacent to an input object field definition."
        },
    }
}

// =============================================================================
// __Type
// =============================================================================

fn type_type() -> ObjectType {
    ObjectType::new("__Type")
        .description(
            "The fundamental unit of any GraphQL Schema is the type. There are many kinds of \
             types in GraphQL as represented by the `__TypeKind` enum.\n\nDepending on the kind \
             of a type, certain fields describe information about that type. Scalar types \
             provide no information beyond a name, description and optional `specifiedByURL`, \
             while Enum types provide their values. Object and Interface types provide the \
             fields they describe. Abstract types, Union and Interface, provide the Object \
             types possible at runtime. List and NonNull types compose other types.",
        )
        .field(Field::new("kind", TypeRef::named_non_null("__TypeKind")).resolve_with(resolve_kind))
        .field(Field::new("name", TypeRef::named("String")).resolve_with(|args| {
            Ok(optional_string(source_named_type(&args)?.map(GraphQLType::name)))
        }))
        .field(Field::new("description", TypeRef::named("String")).resolve_with(|args| {
            Ok(optional_string(source_named_type(&args)?.and_then(GraphQLType::description)))
        }))
        .field(Field::new("specifiedByURL", TypeRef::named("String")).resolve_with(|args| {
            let scalar = source_named_type(&args)?.and_then(GraphQLType::as_scalar);
            Ok(optional_string(scalar.and_then(|scalar| scalar.get_specified_by_url())))
        }))
        .field(
            Field::new("fields", TypeRef::list(TypeRef::named_non_null("__Field")))
                .argument(include_deprecated_arg())
                .resolve_with(|args| {
                    let Some(fields) = source_named_type(&args)?.and_then(GraphQLType::fields)
                    else {
                        return Ok(FieldValue::Null);
                    };
                    let include_deprecated = include_deprecated(&args);
                    Ok(list(
                        fields
                            .values()
                            .filter(|field| include_deprecated || !field.is_deprecated())
                            .map(|field| IntrospectionValue::Field(field.clone()).into_field_value()),
                    ))
                }),
        )
        .field(
            Field::new("interfaces", TypeRef::list(TypeRef::named_non_null("__Type")))
                .resolve_with(|args| {
                    let interfaces = match source_named_type(&args)? {
                        Some(GraphQLType::Object(object)) => object.interfaces(),
                        Some(GraphQLType::Interface(iface)) => iface.interfaces(),
                        _ => return Ok(FieldValue::Null),
                    };
                    Ok(list(interfaces.iter().map(|name| named_type_value(name))))
                }),
        )
        .field(
            Field::new("possibleTypes", TypeRef::list(TypeRef::named_non_null("__Type")))
                .resolve_with(|args| {
                    let Some(abstract_type) =
                        source_named_type(&args)?.filter(|type_| type_.is_abstract_type())
                    else {
                        return Ok(FieldValue::Null);
                    };
                    let possible_types = args.info.schema.get_possible_types(abstract_type);
                    Ok(list(
                        possible_types
                            .into_iter()
                            .map(|object| named_type_value(object.name())),
                    ))
                }),
        )
        .field(
            Field::new("enumValues", TypeRef::list(TypeRef::named_non_null("__EnumValue")))
                .argument(include_deprecated_arg())
                .resolve_with(|args| {
                    let Some(enum_type) = source_named_type(&args)?.and_then(GraphQLType::as_enum)
                    else {
                        return Ok(FieldValue::Null);
                    };
                    let include_deprecated = include_deprecated(&args);
                    Ok(list(
                        enum_type
                            .values()
                            .values()
                            .filter(|value| include_deprecated || !value.is_deprecated())
                            .map(|value| {
                                IntrospectionValue::EnumValue(value.clone()).into_field_value()
                            }),
                    ))
                }),
        )
        .field(
            Field::new("inputFields", TypeRef::list(TypeRef::named_non_null("__InputValue")))
                .argument(include_deprecated_arg())
                .resolve_with(|args| {
                    let Some(input) = source_named_type(&args)?.and_then(GraphQLType::as_input_object)
                    else {
                        return Ok(FieldValue::Null);
                    };
                    Ok(input_values(input.fields().values(), include_deprecated(&args)))
                }),
        )
        .field(Field::new("ofType", TypeRef::named("__Type")).resolve_with(|args| {
            let type_ref = IntrospectionValue::from_source(&args)?.as_type_ref()?;
            Ok(type_ref.of_type().map_or(FieldValue::Null, |inner| type_value(inner.clone())))
        }))
}

fn resolve_kind(args: ResolverArgs<'_>) -> FieldResult {
    let kind = match IntrospectionValue::from_source(&args)?.as_type_ref()? {
        TypeRef::NonNull(_) => TypeKind::NonNull,
        TypeRef::List(_) => TypeKind::List,
        TypeRef::Named(_) => match source_named_type(&args)? {
            Some(type_) => type_.kind(),
            None => return Err(FieldError::new("Unknown kind of type.")),
        },
    };
    Ok(FieldValue::from(kind.as_str()))
}

fn type_kind_type() -> EnumType {
    let kinds = [
        (TypeKind::Scalar, "Indicates this type is a scalar."),
        (
            TypeKind::Object,
            "Indicates this type is an object. `fields` and `interfaces` are valid fields.",
        ),
        (
            TypeKind::Interface,
            "Indicates this type is an interface. `fields`, `interfaces`, and `possibleTypes` \
             are valid fields.",
        ),
        (TypeKind::Union, "Indicates this type is a union. `possibleTypes` is a valid field."),
        (TypeKind::Enum, "Indicates this type is an enum. `enumValues` is a valid field."),
        (
            TypeKind::InputObject,
            "Indicates this type is an input object. `inputFields` is a valid field.",
        ),
        (TypeKind::List, "Indicates this type is a list. `ofType` is a valid field."),
        (TypeKind::NonNull, "Indicates this type is a non-null. `ofType` is a valid field."),
    ];
    kinds.into_iter().fold(
        EnumType::new("__TypeKind")
            .description("An enum describing what kind of type a given `__Type` is."),
        |enum_type, (kind, description)| {
            enum_type.value(EnumValue::new(kind.as_str()).description(description))
        },
    )
}

// =============================================================================
// __Field, __InputValue, __EnumValue
// =============================================================================

fn field_type() -> ObjectType {
    ObjectType::new("__Field")
        .description(
            "Object and Interface types are described by a list of Fields, each of which has a \
             name, potentially a list of arguments, and a return type.",
        )
        .field(Field::new("name", TypeRef::named_non_null("String")).resolve_with(|args| {
            let field = IntrospectionValue::from_source(&args)?.as_field()?;
            Ok(FieldValue::from(field.name()))
        }))
        .field(Field::new("description", TypeRef::named("String")).resolve_with(|args| {
            let field = IntrospectionValue::from_source(&args)?.as_field()?;
            Ok(optional_string(field.get_description()))
        }))
        .field(
            Field::new(
                "args",
                TypeRef::non_null(TypeRef::list(TypeRef::named_non_null("__InputValue"))),
            )
            .argument(include_deprecated_arg())
            .resolve_with(|args| {
                let field = IntrospectionValue::from_source(&args)?.as_field()?;
                Ok(input_values(field.args().values(), include_deprecated(&args)))
            }),
        )
        .field(Field::new("type", TypeRef::named_non_null("__Type")).resolve_with(|args| {
            let field = IntrospectionValue::from_source(&args)?.as_field()?;
            Ok(type_value(field.ty().clone()))
        }))
        .field(Field::new("isDeprecated", TypeRef::named_non_null("Boolean")).resolve_with(
            |args| {
                let field = IntrospectionValue::from_source(&args)?.as_field()?;
                Ok(FieldValue::from(field.is_deprecated()))
            },
        ))
        .field(Field::new("deprecationReason", TypeRef::named("String")).resolve_with(|args| {
            let field = IntrospectionValue::from_source(&args)?.as_field()?;
            Ok(optional_string(field.deprecation_reason()))
        }))
}

fn input_value_type() -> ObjectType {
    ObjectType::new("__InputValue")
        .description(
            "Arguments provided to Fields or Directives and the input fields of an InputObject \
             are represented as Input Values which describe their type and optionally a default \
             value.",
        )
        .field(Field::new("name", TypeRef::named_non_null("String")).resolve_with(|args| {
            let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
            Ok(FieldValue::from(input_value.name()))
        }))
        .field(Field::new("description", TypeRef::named("String")).resolve_with(|args| {
            let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
            Ok(optional_string(input_value.get_description()))
        }))
        .field(Field::new("type", TypeRef::named_non_null("__Type")).resolve_with(|args| {
            let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
            Ok(type_value(input_value.ty().clone()))
        }))
        .field(
            Field::new("defaultValue", TypeRef::named("String"))
                .description(
                    "A GraphQL-formatted string representing the default value for this input \
                     value.",
                )
                .resolve_with(|args| {
                    let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
                    let printed = match input_value.get_default_value() {
                        None => None,
                        Some(DefaultValue::Literal(literal)) => Some(literal.print()),
                        Some(DefaultValue::Value(value)) => {
                            ast_from_value(args.info.schema, value, input_value.ty())
                                .map(|literal| literal.print())
                        },
                    };
                    Ok(printed.map_or(FieldValue::Null, FieldValue::from))
                }),
        )
        .field(Field::new("isDeprecated", TypeRef::named_non_null("Boolean")).resolve_with(
            |args| {
                let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
                Ok(FieldValue::from(input_value.is_deprecated()))
            },
        ))
        .field(Field::new("deprecationReason", TypeRef::named("String")).resolve_with(|args| {
            let input_value = IntrospectionValue::from_source(&args)?.as_input_value()?;
            Ok(optional_string(input_value.deprecation_reason()))
        }))
}

fn enum_value_type() -> ObjectType {
    ObjectType::new("__EnumValue")
        .description(
            "One possible value for a given Enum. Enum values are unique values, not a \
             placeholder for a string or numeric value. However an Enum value is returned in a \
             JSON response as a string.",
        )
        .field(Field::new("name", TypeRef::named_non_null("String")).resolve_with(|args| {
            let enum_value = IntrospectionValue::from_source(&args)?.as_enum_value()?;
            Ok(FieldValue::from(enum_value.name()))
        }))
        .field(Field::new("description", TypeRef::named("String")).resolve_with(|args| {
            let enum_value = IntrospectionValue::from_source(&args)?.as_enum_value()?;
            Ok(optional_string(enum_value.get_description()))
        }))
        .field(Field::new("isDeprecated", TypeRef::named_non_null("Boolean")).resolve_with(
            |args| {
                let enum_value = IntrospectionValue::from_source(&args)?.as_enum_value()?;
                Ok(FieldValue::from(enum_value.is_deprecated()))
            },
        ))
        .field(Field::new("deprecationReason", TypeRef::named("String")).resolve_with(|args| {
            let enum_value = IntrospectionValue::from_source(&args)?.as_enum_value()?;
            Ok(optional_string(enum_value.deprecation_reason()))
        }))
}
