use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::TypeRef;

/// Whether two type references are structurally the same type.
pub fn is_equal_type(type_a: &TypeRef, type_b: &TypeRef) -> bool {
    type_a == type_b
}

/// Whether a value of `maybe_sub_type` is always also a valid value of
/// `super_type`: non-null is a subtype of nullable, lists compare their item
/// types, and an object or interface is a subtype of the abstract types it
/// belongs to.
pub fn is_type_sub_type_of(schema: &Schema, maybe_sub_type: &TypeRef, super_type: &TypeRef) -> bool {
    if maybe_sub_type == super_type {
        return true;
    }

    match (super_type, maybe_sub_type) {
        (TypeRef::NonNull(super_inner), TypeRef::NonNull(sub_inner)) => {
            is_type_sub_type_of(schema, sub_inner, super_inner)
        },
        (TypeRef::NonNull(_), _) => false,
        (_, TypeRef::NonNull(sub_inner)) => is_type_sub_type_of(schema, sub_inner, super_type),
        (TypeRef::List(super_inner), TypeRef::List(sub_inner)) => {
            is_type_sub_type_of(schema, sub_inner, super_inner)
        },
        (TypeRef::List(_), _) | (_, TypeRef::List(_)) => false,
        (TypeRef::Named(super_name), TypeRef::Named(sub_name)) => {
            let Some(super_named) = schema.get_type(super_name) else {
                return false;
            };
            let sub_is_object_or_interface = schema
                .get_type(sub_name)
                .is_some_and(|type_| type_.as_object().is_some() || type_.as_interface().is_some());
            super_named.is_abstract_type()
                && sub_is_object_or_interface
                && schema.is_sub_type(super_named, sub_name)
        },
    }
}

/// Whether some object type could be both `type_a` and `type_b`.
///
/// Used to decide whether a fragment could ever apply in its parent's
/// context.
pub fn do_types_overlap(schema: &Schema, type_a: &GraphQLType, type_b: &GraphQLType) -> bool {
    if type_a.name() == type_b.name() {
        return true;
    }

    if type_a.is_abstract_type() {
        if type_b.is_abstract_type() {
            return schema
                .get_possible_types(type_a)
                .iter()
                .any(|object| schema.is_sub_type(type_b, object.name()));
        }
        return schema.is_sub_type(type_a, type_b.name());
    }

    if type_b.is_abstract_type() {
        return schema.is_sub_type(type_b, type_a.name());
    }

    false
}
