use crate::error::GraphQLError;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// The response to an executed (or rejected) request.
///
/// `data` is absent when the request failed before execution started
/// (syntax, validation or variable errors) and `null` when an error
/// propagated all the way to the root. `errors` is omitted from the
/// serialized form when empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ExecutionResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl ExecutionResult {
    /// A result for a request that never reached execution.
    pub fn from_errors(errors: Vec<GraphQLError>) -> Self {
        Self { errors, data: None }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn to_json(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or(JsonValue::Null)
    }
}
