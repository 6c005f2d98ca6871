use crate::introspection::introspection_value::IntrospectionValue;
use crate::introspection::introspection_value::named_type_value;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::TypeRef;
use crate::value::FieldValue;
use serde_json::Value as JsonValue;
use std::sync::LazyLock;

/// `__schema: __Schema!`, selectable on the query root type.
pub static SCHEMA_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__schema", TypeRef::named_non_null("__Schema"))
        .description("Access the current type schema of this server.")
        .resolve_with(|_| Ok(IntrospectionValue::Schema.into_field_value()))
});

/// `__type(name: String!): __Type`, selectable on the query root type.
pub static TYPE_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__type", TypeRef::named("__Type"))
        .description("Request the type information of a single type.")
        .argument(InputValue::new("name", TypeRef::named_non_null("String")))
        .resolve_with(|args| {
            let type_ = args
                .arg("name")
                .and_then(JsonValue::as_str)
                .and_then(|name| args.info.schema.get_type(name));
            Ok(type_.map_or(FieldValue::Null, |type_| named_type_value(type_.name())))
        })
});

/// `__typename: String!`, selectable on every composite type.
pub static TYPENAME_META_FIELD: LazyLock<Field> = LazyLock::new(|| {
    Field::new("__typename", TypeRef::named_non_null("String"))
        .description("The name of the current Object type at runtime.")
        .resolve_with(|args| Ok(FieldValue::from(args.info.parent_type.name())))
});
