//! Runtime values flowing through execution.

mod field_value;
mod maybe_async;

pub use field_value::FieldValue;
pub use maybe_async::MaybeAsync;

/// Coerced argument and variable values, keyed by name in definition
/// order.
pub type Variables = serde_json::Map<String, serde_json::Value>;
