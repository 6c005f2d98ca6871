//! The GraphQL lexer.
//!
//! [`GraphQLLexer`] turns a [`Source`] into a stream of [`GraphQLToken`]s on
//! demand. The parser drives it through [`GraphQLLexer::advance()`] and
//! [`GraphQLLexer::lookahead()`]; comments are skipped by both.
//!
//! Names and numbers borrow from the source text. String values are cooked
//! during lexing: escape sequences are expanded and block strings have their
//! indentation removed.

use crate::GraphQLSyntaxError;
use crate::Source;
use crate::block_string::dedent_block_string_lines;
use crate::token::GraphQLToken;
use crate::token::TokenKind;
use std::borrow::Cow;
use std::sync::Arc;

type LexResult<T> = Result<T, GraphQLSyntaxError>;

pub struct GraphQLLexer<'src> {
    source: &'src Arc<Source>,
    body: &'src str,

    /// The most recently consumed significant token.
    token: GraphQLToken<'src>,

    /// Byte offset of the end of the token consumed before `token`.
    last_token_end: usize,

    /// Memoized result of [`Self::lookahead()`].
    lookahead: Option<GraphQLToken<'src>>,

    // Scanner cursor. This is always positioned after the furthest token
    // read so far (which may be the lookahead token).
    curr_byte_offset: usize,
    curr_line: usize,
    curr_col: usize,
    last_char_was_cr: bool,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &'src Arc<Source>) -> Self {
        Self {
            source,
            body: source.body(),
            token: GraphQLToken::new(TokenKind::Sof, 0, 0, 0, 0, None),
            last_token_end: 0,
            lookahead: None,
            curr_byte_offset: 0,
            curr_line: 1,
            curr_col: 1,
            last_char_was_cr: false,
        }
    }

    pub fn source(&self) -> &'src Arc<Source> {
        self.source
    }

    /// The current (most recently consumed) token.
    pub fn token(&self) -> &GraphQLToken<'src> {
        &self.token
    }

    /// The end offset of the token consumed before the current one. Parsers
    /// use this to close the `Location` of the node they just finished.
    pub fn last_token_end(&self) -> usize {
        self.last_token_end
    }

    /// Advances to the next significant token and returns it.
    ///
    /// Once `<EOF>` is reached, every subsequent call returns `<EOF>` again.
    pub fn advance(&mut self) -> LexResult<&GraphQLToken<'src>> {
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.read_significant_token()?,
        };
        self.last_token_end = self.token.end;
        self.token = next;
        Ok(&self.token)
    }

    /// Peeks at the token after the current one without consuming it.
    ///
    /// The result is memoized so repeated calls do not rescan.
    pub fn lookahead(&mut self) -> LexResult<&GraphQLToken<'src>> {
        if self.token.kind == TokenKind::Eof {
            return Ok(&self.token);
        }
        let next = match self.lookahead.take() {
            Some(token) => token,
            None => self.read_significant_token()?,
        };
        Ok(self.lookahead.insert(next))
    }

    fn read_significant_token(&mut self) -> LexResult<GraphQLToken<'src>> {
        loop {
            let token = self.read_token()?;
            if token.kind != TokenKind::Comment {
                return Ok(token);
            }
        }
    }

    fn syntax_error(&self, position: usize, description: impl Into<String>) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(self.source.clone(), position, description)
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.body[self.curr_byte_offset..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        match ch {
            '\n' if self.last_char_was_cr => {
                self.last_char_was_cr = false;
            },
            '\n' | '\r' => {
                self.curr_line += 1;
                self.curr_col = 1;
                self.last_char_was_cr = ch == '\r';
            },
            _ => {
                self.curr_col += 1;
                self.last_char_was_cr = false;
            },
        }
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn consume_n(&mut self, n: usize) {
        for _ in 0..n {
            self.consume();
        }
    }

    fn make_token(
        &self,
        kind: TokenKind,
        start: usize,
        line: usize,
        column: usize,
        value: Option<Cow<'src, str>>,
    ) -> GraphQLToken<'src> {
        GraphQLToken::new(kind, start, self.curr_byte_offset, line, column, value)
    }

    // =========================================================================
    // Lexer main loop
    // =========================================================================

    fn read_token(&mut self) -> LexResult<GraphQLToken<'src>> {
        self.skip_ignored();

        let start = self.curr_byte_offset;
        let line = self.curr_line;
        let column = self.curr_col;

        let Some(ch) = self.peek_char() else {
            return Ok(self.make_token(TokenKind::Eof, start, line, column, None));
        };

        let punctuator = match ch {
            '!' => Some(TokenKind::Bang),
            '$' => Some(TokenKind::Dollar),
            '&' => Some(TokenKind::Amp),
            '(' => Some(TokenKind::ParenL),
            ')' => Some(TokenKind::ParenR),
            ':' => Some(TokenKind::Colon),
            '=' => Some(TokenKind::Equals),
            '@' => Some(TokenKind::At),
            '[' => Some(TokenKind::BracketL),
            ']' => Some(TokenKind::BracketR),
            '{' => Some(TokenKind::BraceL),
            '|' => Some(TokenKind::Pipe),
            '}' => Some(TokenKind::BraceR),
            _ => None,
        };
        if let Some(kind) = punctuator {
            self.consume();
            return Ok(self.make_token(kind, start, line, column, None));
        }

        match ch {
            '#' => Ok(self.lex_comment(start, line, column)),
            '.' => {
                if self.remaining().starts_with("...") {
                    self.consume_n(3);
                    Ok(self.make_token(TokenKind::Spread, start, line, column, None))
                } else {
                    Err(self.syntax_error(start, format!(
                        "Unexpected character: {}.",
                        describe_char(Some(ch)),
                    )))
                }
            },
            '"' => {
                if self.remaining().starts_with("\"\"\"") {
                    self.lex_block_string(start, line, column)
                } else {
                    self.lex_string(start, line, column)
                }
            },
            c if is_name_start(c) => Ok(self.lex_name(start, line, column)),
            c if c == '-' || c.is_ascii_digit() => self.lex_number(start, line, column),
            '\'' => Err(self.syntax_error(
                start,
                "Unexpected single quote character ('), did you mean to use a double quote (\")?",
            )),
            _ => Err(self.syntax_error(start, format!(
                "Unexpected character: {}.",
                describe_char(Some(ch)),
            ))),
        }
    }

    /// Skips whitespace, line terminators, commas and the byte-order mark.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                _ => break,
            }
        }
    }

    fn lex_comment(&mut self, start: usize, line: usize, column: usize) -> GraphQLToken<'src> {
        self.consume();
        let content_start = self.curr_byte_offset;
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' {
                break;
            }
            self.consume();
        }
        let content = &self.body[content_start..self.curr_byte_offset];
        self.make_token(TokenKind::Comment, start, line, column, Some(Cow::Borrowed(content)))
    }

    fn lex_name(&mut self, start: usize, line: usize, column: usize) -> GraphQLToken<'src> {
        while let Some(ch) = self.peek_char() {
            if is_name_continue(ch) {
                self.consume();
            } else {
                break;
            }
        }
        let name = &self.body[start..self.curr_byte_offset];
        self.make_token(TokenKind::Name, start, line, column, Some(Cow::Borrowed(name)))
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an Int or Float.
    ///
    /// ```text
    /// -?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?
    /// ```
    ///
    /// A number directly followed by `.` or a name-start character is an
    /// error.
    fn lex_number(&mut self, start: usize, line: usize, column: usize) -> LexResult<GraphQLToken<'src>> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if self.peek_char() == Some('0') {
            self.consume();
            if let Some(ch) = self.peek_char()
                && ch.is_ascii_digit() {
                return Err(self.syntax_error(self.curr_byte_offset, format!(
                    "Invalid number, unexpected digit after 0: {}.",
                    describe_char(Some(ch)),
                )));
            }
        } else {
            self.read_digits()?;
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            self.read_digits()?;
        }

        if matches!(self.peek_char(), Some('e') | Some('E')) {
            is_float = true;
            self.consume();
            if matches!(self.peek_char(), Some('+') | Some('-')) {
                self.consume();
            }
            self.read_digits()?;
        }

        if let Some(ch) = self.peek_char()
            && (ch == '.' || is_name_start(ch)) {
            return Err(self.syntax_error(self.curr_byte_offset, format!(
                "Invalid number, expected digit but got: {}.",
                describe_char(Some(ch)),
            )));
        }

        let text = &self.body[start..self.curr_byte_offset];
        let kind = if is_float { TokenKind::Float } else { TokenKind::Int };
        Ok(self.make_token(kind, start, line, column, Some(Cow::Borrowed(text))))
    }

    /// Consumes one or more ASCII digits.
    fn read_digits(&mut self) -> LexResult<()> {
        let first = self.peek_char();
        if !first.is_some_and(|ch| ch.is_ascii_digit()) {
            return Err(self.syntax_error(self.curr_byte_offset, format!(
                "Invalid number, expected digit but got: {}.",
                describe_char(first),
            )));
        }
        while let Some(ch) = self.peek_char() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.consume();
        }
        Ok(())
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    fn lex_string(&mut self, start: usize, line: usize, column: usize) -> LexResult<GraphQLToken<'src>> {
        self.consume();
        let chunk_start = self.curr_byte_offset;

        // Stays `None` (and the value borrows from the source) until the
        // first escape sequence is seen.
        let mut cooked: Option<String> = None;
        let mut segment_start = chunk_start;

        loop {
            let position = self.curr_byte_offset;
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.syntax_error(position, "Unterminated string."));
                },
                Some('"') => {
                    let value = match cooked {
                        Some(mut value) => {
                            value.push_str(&self.body[segment_start..position]);
                            Cow::Owned(value)
                        },
                        None => Cow::Borrowed(&self.body[chunk_start..position]),
                    };
                    self.consume();
                    return Ok(self.make_token(TokenKind::String, start, line, column, Some(value)));
                },
                Some('\\') => {
                    let value = cooked.get_or_insert_with(String::new);
                    value.push_str(&self.body[segment_start..position]);
                    let escaped = self.read_escape_sequence()?;
                    if let Some(value) = cooked.as_mut() {
                        value.push(escaped);
                    }
                    segment_start = self.curr_byte_offset;
                },
                Some(ch) if is_source_control_char(ch) => {
                    return Err(self.syntax_error(position, format!(
                        "Invalid character within String: {}.",
                        describe_char(Some(ch)),
                    )));
                },
                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    /// Reads one escape sequence starting at a `\` and returns the character
    /// it denotes.
    fn read_escape_sequence(&mut self) -> LexResult<char> {
        let position = self.curr_byte_offset;
        self.consume();
        let escaped = match self.peek_char() {
            Some('"') => '"',
            Some('\\') => '\\',
            Some('/') => '/',
            Some('b') => '\u{0008}',
            Some('f') => '\u{000C}',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('u') => return self.read_unicode_escape(position),
            _ => {
                let end = self.remaining()
                    .char_indices()
                    .nth(1)
                    .map(|(idx, _)| self.curr_byte_offset + idx)
                    .unwrap_or(self.body.len());
                return Err(self.syntax_error(position, format!(
                    "Invalid character escape sequence: \"{}\".",
                    &self.body[position..end],
                )));
            },
        };
        self.consume();
        Ok(escaped)
    }

    /// Reads `\uXXXX`, combining a UTF-16 surrogate pair written as two
    /// consecutive escapes.
    fn read_unicode_escape(&mut self, position: usize) -> LexResult<char> {
        // Consume the 'u'.
        self.consume();
        let lead = self.read_hex4(position)?;

        if (0xD800..=0xDBFF).contains(&lead) {
            if self.remaining().starts_with("\\u") {
                let trail_position = self.curr_byte_offset;
                self.consume_n(2);
                let trail = self.read_hex4(trail_position)?;
                if (0xDC00..=0xDFFF).contains(&trail) {
                    let code = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
                    if let Some(ch) = char::from_u32(code) {
                        return Ok(ch);
                    }
                }
            }
            return Err(self.invalid_unicode_escape(position));
        }

        char::from_u32(lead).ok_or_else(|| self.invalid_unicode_escape(position))
    }

    fn read_hex4(&mut self, position: usize) -> LexResult<u32> {
        let digits = self.remaining().get(..4).unwrap_or(self.remaining());
        if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.invalid_unicode_escape(position));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| self.invalid_unicode_escape(position))?;
        self.consume_n(4);
        Ok(value)
    }

    fn invalid_unicode_escape(&self, position: usize) -> GraphQLSyntaxError {
        let text: String = self.body[position..].chars().take(6).collect();
        self.syntax_error(position, format!("Invalid Unicode escape sequence: \"{text}\"."))
    }

    fn lex_block_string(&mut self, start: usize, line: usize, column: usize) -> LexResult<GraphQLToken<'src>> {
        self.consume_n(3);
        let mut raw = String::new();
        let mut segment_start = self.curr_byte_offset;

        loop {
            let position = self.curr_byte_offset;
            match self.peek_char() {
                None => {
                    return Err(self.syntax_error(position, "Unterminated string."));
                },
                Some('"') if self.remaining().starts_with("\"\"\"") => {
                    raw.push_str(&self.body[segment_start..position]);
                    self.consume_n(3);
                    let value = dedent_block_string_lines(&raw);
                    return Ok(self.make_token(
                        TokenKind::BlockString,
                        start,
                        line,
                        column,
                        Some(Cow::Owned(value)),
                    ));
                },
                Some('\\') if self.remaining().starts_with("\\\"\"\"") => {
                    raw.push_str(&self.body[segment_start..position]);
                    raw.push_str("\"\"\"");
                    self.consume_n(4);
                    segment_start = self.curr_byte_offset;
                },
                Some(ch) if is_source_control_char(ch) => {
                    return Err(self.syntax_error(position, format!(
                        "Invalid character within String: {}.",
                        describe_char(Some(ch)),
                    )));
                },
                Some(_) => {
                    self.consume();
                },
            }
        }
    }
}

fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Control characters other than tab and the line terminators.
fn is_source_control_char(ch: char) -> bool {
    ch < '\u{0020}' && ch != '\t' && ch != '\n' && ch != '\r'
}

/// Renders a character for diagnostics: printable characters are quoted,
/// everything else is shown as a `U+XXXX` code point.
fn describe_char(ch: Option<char>) -> String {
    match ch {
        None => TokenKind::Eof.as_str().to_string(),
        Some(ch) if ch == '"' => "'\"'".to_string(),
        Some(ch) if (' '..='~').contains(&ch) => format!("\"{ch}\""),
        Some(ch) => format!("U+{:04X}", ch as u32),
    }
}
