use crate::error::FieldError;
use crate::types::Directive;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::InputValue;
use crate::types::ResolverArgs;
use crate::types::TypeRef;
use crate::value::FieldValue;

/// The source values introspection resolvers hand to each other.
///
/// Types are carried as references and looked up in the schema being
/// introspected; definitions are carried as copies.
#[derive(Clone, Debug)]
pub(crate) enum IntrospectionValue {
    Schema,
    Type(TypeRef),
    Field(Field),
    InputValue(InputValue),
    EnumValue(EnumValue),
    Directive(Directive),
}

impl IntrospectionValue {
    pub(crate) fn into_field_value(self) -> FieldValue {
        FieldValue::opaque(self)
    }

    pub(crate) fn from_source<'a>(args: &ResolverArgs<'a>) -> Result<&'a Self, FieldError> {
        args.source.downcast_ref::<IntrospectionValue>().ok_or_else(|| {
            FieldError::new(format!(
                "Introspection field \"{}\" was resolved against a non-introspection value.",
                args.info.field_name,
            ))
        })
    }

    pub(crate) fn as_type_ref(&self) -> Result<&TypeRef, FieldError> {
        match self {
            IntrospectionValue::Type(type_ref) => Ok(type_ref),
            _ => Err(self.mismatch("__Type")),
        }
    }

    pub(crate) fn as_field(&self) -> Result<&Field, FieldError> {
        match self {
            IntrospectionValue::Field(field) => Ok(field),
            _ => Err(self.mismatch("__Field")),
        }
    }

    pub(crate) fn as_input_value(&self) -> Result<&InputValue, FieldError> {
        match self {
            IntrospectionValue::InputValue(input_value) => Ok(input_value),
            _ => Err(self.mismatch("__InputValue")),
        }
    }

    pub(crate) fn as_enum_value(&self) -> Result<&EnumValue, FieldError> {
        match self {
            IntrospectionValue::EnumValue(enum_value) => Ok(enum_value),
            _ => Err(self.mismatch("__EnumValue")),
        }
    }

    pub(crate) fn as_directive(&self) -> Result<&Directive, FieldError> {
        match self {
            IntrospectionValue::Directive(directive) => Ok(directive),
            _ => Err(self.mismatch("__Directive")),
        }
    }

    fn mismatch(&self, expected: &str) -> FieldError {
        let found = match self {
            IntrospectionValue::Schema => "__Schema",
            IntrospectionValue::Type(_) => "__Type",
            IntrospectionValue::Field(_) => "__Field",
            IntrospectionValue::InputValue(_) => "__InputValue",
            IntrospectionValue::EnumValue(_) => "__EnumValue",
            IntrospectionValue::Directive(_) => "__Directive",
        };
        FieldError::new(format!("Expected a {expected} value but found a {found} value."))
    }
}

pub(crate) fn type_value(type_ref: TypeRef) -> FieldValue {
    IntrospectionValue::Type(type_ref).into_field_value()
}

pub(crate) fn named_type_value(name: &str) -> FieldValue {
    type_value(TypeRef::named(name))
}
