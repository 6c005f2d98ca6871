use serde_json::Map;
use serde_json::Value as JsonValue;
use std::fmt;

/// The error a field resolver fails with.
///
/// Anything that implements [`Display`](fmt::Display) converts into a
/// `FieldError`, so resolvers can use `?` on their own error types. For the
/// same reason `FieldError` itself does not implement `Display`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    message: String,
    extensions: Option<Map<String, JsonValue>>,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extensions: None,
        }
    }

    /// Attaches an `extensions` entry that is copied into the response error.
    pub fn with_extension(
        mut self,
        key: impl Into<String>,
        value: impl Into<JsonValue>,
    ) -> Self {
        self.extensions
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extensions(&self) -> Option<&Map<String, JsonValue>> {
        self.extensions.as_ref()
    }

    pub(crate) fn into_parts(self) -> (String, Option<Map<String, JsonValue>>) {
        (self.message, self.extensions)
    }
}

impl<E: fmt::Display> From<E> for FieldError {
    fn from(err: E) -> Self {
        FieldError::new(err.to_string())
    }
}
