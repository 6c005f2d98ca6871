use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value produced by a resolver, or the source value a resolver is handed.
///
/// Most data is plain JSON, but resolvers may also hand back host objects
/// ([`FieldValue::Opaque`]) that only their own child resolvers understand,
/// or defer computing a property until it is selected
/// ([`FieldValue::Lazy`]).
#[derive(Clone, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Json(JsonValue),
    List(Vec<FieldValue>),
    Object(IndexMap<String, FieldValue>),
    Opaque(Arc<dyn Any + Send + Sync>),
    /// A property computed on demand. The default field resolver calls it
    /// when the property is selected.
    Lazy(Arc<dyn Fn() -> FieldValue + Send + Sync>),
    /// A value tagged with the name of its concrete object type.
    Typed {
        type_name: String,
        value: Box<FieldValue>,
    },
}

impl FieldValue {
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        FieldValue::Opaque(Arc::new(value))
    }

    pub fn lazy(f: impl Fn() -> FieldValue + Send + Sync + 'static) -> Self {
        FieldValue::Lazy(Arc::new(f))
    }

    pub fn object<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        FieldValue::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Tags this value with the concrete object type it represents. The
    /// default type resolver reads the tag the same way it reads
    /// `__typename`.
    pub fn with_type(self, type_name: impl Into<String>) -> Self {
        FieldValue::Typed {
            type_name: type_name.into(),
            value: Box::new(self.untyped()),
        }
    }

    /// Strips any [`FieldValue::Typed`] tag.
    pub fn untyped(self) -> Self {
        match self {
            FieldValue::Typed { value, .. } => value.untyped(),
            other => other,
        }
    }

    pub fn as_untyped(&self) -> &FieldValue {
        match self {
            FieldValue::Typed { value, .. } => value.as_untyped(),
            other => other,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(
            self.as_untyped(),
            FieldValue::Null | FieldValue::Json(JsonValue::Null),
        )
    }

    /// The concrete type name carried by this value, either as a
    /// [`FieldValue::Typed`] tag or as a `__typename` property.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            FieldValue::Typed { type_name, .. } => Some(type_name),
            FieldValue::Object(map) => match map.get("__typename")? {
                FieldValue::Json(JsonValue::String(name)) => Some(name),
                _ => None,
            },
            FieldValue::Json(JsonValue::Object(map)) => map.get("__typename")?.as_str(),
            _ => None,
        }
    }

    /// Reads a named property the way the default field resolver does.
    /// Missing properties read as [`FieldValue::Null`]; lazy properties are
    /// evaluated.
    pub fn property(&self, name: &str) -> FieldValue {
        let value = match self.as_untyped() {
            FieldValue::Object(map) => map.get(name).cloned(),
            FieldValue::Json(JsonValue::Object(map)) => map.get(name).cloned().map(FieldValue::Json),
            _ => None,
        };
        match value {
            Some(FieldValue::Lazy(f)) => f(),
            Some(value) => value,
            None => FieldValue::Null,
        }
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self.as_untyped() {
            FieldValue::Opaque(value) => value.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// The elements of a list value, or `None` if this is not a list.
    pub fn list_items(&self) -> Option<Vec<FieldValue>> {
        match self.as_untyped() {
            FieldValue::List(items) => Some(items.clone()),
            FieldValue::Json(JsonValue::Array(items)) => {
                Some(items.iter().cloned().map(FieldValue::Json).collect())
            },
            _ => None,
        }
    }

    /// Converts this value into plain JSON, or `None` if it contains a host
    /// value with no JSON form.
    pub fn to_json(&self) -> Option<JsonValue> {
        match self.as_untyped() {
            FieldValue::Null => Some(JsonValue::Null),
            FieldValue::Json(value) => Some(value.clone()),
            FieldValue::List(items) => items
                .iter()
                .map(FieldValue::to_json)
                .collect::<Option<Vec<_>>>()
                .map(JsonValue::Array),
            FieldValue::Object(map) => map
                .iter()
                .map(|(key, value)| Some((key.clone(), value.to_json()?)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(JsonValue::Object),
            FieldValue::Lazy(f) => f().to_json(),
            FieldValue::Opaque(_) | FieldValue::Typed { .. } => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            FieldValue::List(items) => f.debug_tuple("List").field(items).finish(),
            FieldValue::Object(map) => f.debug_tuple("Object").field(map).finish(),
            FieldValue::Opaque(_) => f.write_str("Opaque(..)"),
            FieldValue::Lazy(_) => f.write_str("Lazy(..)"),
            FieldValue::Typed { type_name, value } => f
                .debug_struct("Typed")
                .field("type_name", type_name)
                .field("value", value)
                .finish(),
        }
    }
}

impl From<JsonValue> for FieldValue {
    fn from(value: JsonValue) -> Self {
        FieldValue::Json(value)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(items: Vec<FieldValue>) -> Self {
        FieldValue::List(items)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Json(JsonValue::String(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Json(JsonValue::String(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Json(JsonValue::Bool(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Json(JsonValue::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Json(JsonValue::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Json(JsonValue::from(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
