use crate::token::TokenKind;
use std::borrow::Cow;

/// A lexed token with its byte span and 1-indexed start line/column.
///
/// Names and numbers borrow their text from the source (`Cow::Borrowed`);
/// strings carry their cooked value (escapes expanded, block strings
/// dedented), which usually requires an owned allocation.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: TokenKind,
    /// Byte offset of the first character of this token.
    pub start: usize,
    /// Byte offset immediately after the last character of this token.
    pub end: usize,
    /// 1-indexed line of `start`.
    pub line: usize,
    /// 1-indexed column of `start`.
    pub column: usize,
    pub value: Option<Cow<'src, str>>,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(
        kind: TokenKind,
        start: usize,
        end: usize,
        line: usize,
        column: usize,
        value: Option<Cow<'src, str>>,
    ) -> Self {
        Self {
            kind,
            start,
            end,
            line,
            column,
            value,
        }
    }

    /// Returns the token's value, or `""` for value-less kinds.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Describes this token for error messages: `"{"`, `Name "foo"`,
    /// `<EOF>`, ...
    pub fn description(&self) -> String {
        match (&self.kind, &self.value) {
            (kind, Some(value)) if !kind.is_punctuator() => {
                format!("{} \"{}\"", kind.as_str(), value)
            },
            (kind, _) => kind.description(),
        }
    }
}
