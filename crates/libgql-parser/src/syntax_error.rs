use crate::Source;
use crate::SourceLocation;
use crate::source::print_source_location;
use std::sync::Arc;

/// A lexing or parsing failure.
///
/// Syntax errors are always fatal to a parse: no partial AST is produced.
/// Every syntax error is anchored to a byte offset in its [`Source`] so it
/// can be rendered with a line/column and a source excerpt.
#[derive(Clone, Debug, thiserror::Error)]
#[error("Syntax Error: {description}")]
pub struct GraphQLSyntaxError {
    description: String,
    location: SourceLocation,
    position: usize,
    source_text: Arc<Source>,
}

impl GraphQLSyntaxError {
    pub fn new(
        source: Arc<Source>,
        position: usize,
        description: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            location: source.location_of(position),
            position,
            source_text: source,
        }
    }

    /// The error text without the `Syntax Error:` prefix.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The 1-indexed line/column where the error was detected.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// The byte offset where the error was detected.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn source_text(&self) -> &Arc<Source> {
        &self.source_text
    }

    /// Renders this error together with the offending source line.
    ///
    /// ```text
    /// Syntax Error: Expected Name, found "}".
    ///
    /// GraphQL request:1:9
    /// 1 | { user { }
    ///   |          ^
    /// ```
    pub fn print(&self) -> String {
        format!(
            "{self}\n\n{}",
            print_source_location(&self.source_text, self.location),
        )
    }
}

impl PartialEq for GraphQLSyntaxError {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.position == other.position
    }
}
