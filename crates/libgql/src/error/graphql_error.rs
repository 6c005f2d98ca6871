use crate::error::FieldError;
use libgql_parser::GraphQLSyntaxError;
use libgql_parser::ast::Location;
use libgql_parser::print_source_location;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value as JsonValue;
use std::fmt;
use std::sync::Arc;

/// A 1-indexed `{line, column}` pair as it appears in a response's
/// `errors[].locations`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ErrorLocation {
    pub line: usize,
    pub column: usize,
}

/// One step of a response path: a field's response key or a list index.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => f.write_str(key),
            PathSegment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(idx: usize) -> Self {
        PathSegment::Index(idx)
    }
}

/// The one error type reported by schema validation, document validation
/// and execution.
///
/// It serializes to the shape of an entry in a response's `errors` list:
/// `message`, then `locations`, `path` and `extensions` when present. The
/// AST [`Location`]s it was raised against are kept (but not serialized) so
/// that [`GraphQLError::print`] can render source excerpts.
#[derive(Clone, Debug, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct GraphQLError {
    message: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    locations: Vec<ErrorLocation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<PathSegment>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    extensions: Option<Map<String, JsonValue>>,

    #[serde(skip)]
    nodes: Vec<Location>,

    #[serde(skip)]
    original_error: Option<Arc<dyn std::error::Error + Send + Sync>>,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: vec![],
            path: None,
            extensions: None,
            nodes: vec![],
            original_error: None,
        }
    }

    /// Attaches the AST locations this error concerns. Nodes parsed without
    /// locations are ignored.
    pub fn with_nodes<'n>(mut self, nodes: impl IntoIterator<Item = Option<&'n Location>>) -> Self {
        for loc in nodes.into_iter().flatten() {
            let source_loc = loc.start_location();
            self.locations.push(ErrorLocation {
                line: source_loc.line,
                column: source_loc.column,
            });
            self.nodes.push(loc.clone());
        }
        self
    }

    pub fn with_node(self, node: Option<&Location>) -> Self {
        self.with_nodes([node])
    }

    pub fn with_path(mut self, path: Vec<PathSegment>) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_extensions(mut self, extensions: Map<String, JsonValue>) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn with_original_error(
        mut self,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        self.original_error = Some(Arc::new(err));
        self
    }

    /// Wraps a field failure into an error located at `nodes` and `path`.
    ///
    /// An error that already carries a path was located by a deeper field
    /// and is returned unchanged.
    pub fn located<'n>(
        original: impl Into<GraphQLError>,
        nodes: impl IntoIterator<Item = Option<&'n Location>>,
        path: Vec<PathSegment>,
    ) -> Self {
        let err = original.into();
        if err.path.is_some() {
            return err;
        }
        let err = if err.nodes.is_empty() { err.with_nodes(nodes) } else { err };
        err.with_path(path)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn locations(&self) -> &[ErrorLocation] {
        &self.locations
    }

    pub fn path(&self) -> Option<&[PathSegment]> {
        self.path.as_deref()
    }

    pub fn extensions(&self) -> Option<&Map<String, JsonValue>> {
        self.extensions.as_ref()
    }

    pub fn nodes(&self) -> &[Location] {
        &self.nodes
    }

    pub fn original_error(&self) -> Option<&(dyn std::error::Error + Send + Sync)> {
        self.original_error.as_deref()
    }

    /// Renders the message followed by an excerpt of the source around each
    /// location.
    pub fn print(&self) -> String {
        let mut out = self.message.clone();
        for node in &self.nodes {
            out.push_str("\n\n");
            out.push_str(&print_source_location(&node.source, node.start_location()));
        }
        out
    }
}

/// Errors compare by what a client sees: message, locations and path.
impl PartialEq for GraphQLError {
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
            && self.locations == other.locations
            && self.path == other.path
    }
}

impl From<FieldError> for GraphQLError {
    fn from(err: FieldError) -> Self {
        let (message, extensions) = err.into_parts();
        Self {
            extensions,
            ..GraphQLError::new(message)
        }
    }
}

impl From<GraphQLSyntaxError> for GraphQLError {
    fn from(err: GraphQLSyntaxError) -> Self {
        let location = err.location();
        let node = Location::new(err.position(), err.position(), err.source_text().clone());
        Self {
            message: err.to_string(),
            locations: vec![ErrorLocation {
                line: location.line,
                column: location.column,
            }],
            path: None,
            extensions: None,
            nodes: vec![node],
            original_error: Some(Arc::new(err)),
        }
    }
}
