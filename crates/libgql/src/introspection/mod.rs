//! The `__Schema` family of types and the `__schema`, `__type` and
//! `__typename` meta fields through which a schema describes itself.

mod introspection_types;
mod introspection_value;
mod meta_fields;

pub use introspection_types::INTROSPECTION_TYPE_NAMES;
pub use introspection_types::introspection_types;
pub use introspection_types::is_introspection_type;
pub use meta_fields::SCHEMA_META_FIELD;
pub use meta_fields::TYPE_META_FIELD;
pub use meta_fields::TYPENAME_META_FIELD;

#[cfg(test)]
mod tests;
