use crate::Source;
use crate::SourceLocation;
use std::fmt;
use std::sync::Arc;

/// The byte span of an AST node plus a shared handle to the [`Source`] it
/// was parsed from.
///
/// Two locations compare equal when they cover the same byte range; the
/// source handle is not compared.
#[derive(Clone)]
pub struct Location {
    pub start: usize,
    pub end: usize,
    pub source: Arc<Source>,
}

impl Location {
    pub fn new(start: usize, end: usize, source: Arc<Source>) -> Self {
        Self { start, end, source }
    }

    /// The 1-indexed line/column of `start`.
    pub fn start_location(&self) -> SourceLocation {
        self.source.location_of(self.start)
    }

    /// The source text covered by this location.
    pub fn text(&self) -> &str {
        self.source.body().get(self.start..self.end).unwrap_or("")
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location({}..{})", self.start, self.end)
    }
}

/// Implemented by every AST node.
pub trait Located {
    fn loc(&self) -> Option<&Location>;
}
