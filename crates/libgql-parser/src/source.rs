use std::fmt;
use std::sync::Arc;

/// The text of a GraphQL document along with a human-readable name for it
/// (usually a file path) used when rendering diagnostics.
///
/// A `Source` is shared (via [`Arc`]) by every [`Location`](crate::ast::Location)
/// in the AST that was parsed from it, so errors can always recover the
/// line/column of a node and print the surrounding text.
#[derive(Clone, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    pub const DEFAULT_NAME: &'static str = "GraphQL request";

    /// Creates a new source with the default name.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    /// Creates a new source with an explicit name.
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            name: name.into(),
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn into_shared(self) -> Arc<Source> {
        Arc::new(self)
    }

    /// Computes the 1-indexed line and column of a byte offset into this
    /// source.
    ///
    /// `\r\n`, `\n` and `\r` all count as a single line terminator. Columns
    /// count characters, not bytes.
    pub fn location_of(&self, byte_offset: usize) -> SourceLocation {
        let offset = byte_offset.min(self.body.len());
        let bytes = self.body.as_bytes();
        let mut line = 1;
        let mut line_start = 0;
        let mut idx = 0;
        while idx < offset {
            match bytes[idx] {
                b'\n' => {
                    line += 1;
                    line_start = idx + 1;
                },
                b'\r' => {
                    if bytes.get(idx + 1) == Some(&b'\n') {
                        idx += 1;
                    }
                    line += 1;
                    line_start = idx + 1;
                },
                _ => (),
            }
            idx += 1;
        }

        let line_start = line_start.min(offset);
        let column = self.body
            .get(line_start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(offset - line_start);

        SourceLocation {
            line,
            column: column + 1,
        }
    }

    /// Returns the text of a 1-indexed line, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines().nth(line.checked_sub(1)?)
    }

    /// Iterates over the lines of the body, treating `\r\n`, `\n` and `\r`
    /// as terminators.
    fn lines(&self) -> impl Iterator<Item = &str> {
        let body = self.body.as_str();
        let mut rest = Some(body);
        std::iter::from_fn(move || {
            let text = rest?;
            match memchr::memchr2(b'\n', b'\r', text.as_bytes()) {
                Some(idx) => {
                    let term_len =
                        if text[idx..].starts_with("\r\n") { 2 } else { 1 };
                    rest = Some(&text[idx + term_len..]);
                    Some(&text[..idx])
                },
                None => {
                    rest = None;
                    Some(text)
                },
            }
        })
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("name", &self.name)
            .field("len", &self.body.len())
            .finish()
    }
}

/// A 1-indexed line/column position within a [`Source`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Renders the line containing `location` with a caret under its column,
/// preceded by the previous line for context.
///
/// ```text
/// GraphQL request:2:7
/// 1 | {
/// 2 |   foo(
///   |       ^
/// ```
pub fn print_source_location(source: &Source, location: SourceLocation) -> String {
    let mut out = format!("{}:{}\n", source.name(), location);
    let first_line = location.line.saturating_sub(1).max(1);
    let gutter_width = location.line.to_string().len();
    for line_num in first_line..=location.line {
        let Some(text) = source.line_text(line_num) else {
            continue;
        };
        if line_num != location.line && text.trim().is_empty() {
            continue;
        }
        out.push_str(&format!("{line_num:>gutter_width$} | {text}\n"));
    }
    out.push_str(&format!(
        "{:>gutter_width$} | {}^",
        "",
        " ".repeat(location.column.saturating_sub(1)),
    ));
    out
}
