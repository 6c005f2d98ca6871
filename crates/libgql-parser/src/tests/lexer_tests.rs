use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::Source;
use crate::token::TokenKind;
use std::borrow::Cow;

type Result<T> = std::result::Result<T, GraphQLSyntaxError>;

fn lex_all(text: &str) -> Result<Vec<(TokenKind, String)>> {
    let source = Source::new(text).into_shared();
    let mut lexer = GraphQLLexer::new(&source);
    let mut tokens = vec![];
    loop {
        let token = lexer.advance()?;
        if token.kind == TokenKind::Eof {
            return Ok(tokens);
        }
        tokens.push((token.kind, token.value_str().to_string()));
    }
}

fn lex_error(text: &str) -> GraphQLSyntaxError {
    lex_all(text).expect_err("expected a lexing error")
}

fn single_value(text: &str) -> Result<String> {
    let tokens = lex_all(text)?;
    assert_eq!(tokens.len(), 1, "expected exactly one token in {text:?}");
    Ok(tokens[0].1.clone())
}

#[test]
fn punctuators_and_spread() -> Result<()> {
    let kinds: Vec<TokenKind> = lex_all("{ ... } ! $ & ( ) : = @ [ ] |")?
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();
    assert_eq!(kinds, vec![
        TokenKind::BraceL,
        TokenKind::Spread,
        TokenKind::BraceR,
        TokenKind::Bang,
        TokenKind::Dollar,
        TokenKind::Amp,
        TokenKind::ParenL,
        TokenKind::ParenR,
        TokenKind::Colon,
        TokenKind::Equals,
        TokenKind::At,
        TokenKind::BracketL,
        TokenKind::BracketR,
        TokenKind::Pipe,
    ]);
    Ok(())
}

#[test]
fn skips_commas_bom_and_comments() -> Result<()> {
    let tokens = lex_all("\u{FEFF}a,,b # trailing comment\n,c")?;
    assert_eq!(tokens, vec![
        (TokenKind::Name, "a".to_string()),
        (TokenKind::Name, "b".to_string()),
        (TokenKind::Name, "c".to_string()),
    ]);
    Ok(())
}

#[test]
fn tracks_lines_and_columns_across_line_terminators() -> Result<()> {
    let source = Source::new("{\n  foo\r\n  bar\r  baz }").into_shared();
    let mut lexer = GraphQLLexer::new(&source);

    let mut positions = vec![];
    loop {
        let token = lexer.advance()?;
        if token.kind == TokenKind::Eof {
            break;
        }
        positions.push((token.value_str().to_string(), token.line, token.column));
    }
    assert_eq!(positions, vec![
        (String::new(), 1, 1),
        ("foo".to_string(), 2, 3),
        ("bar".to_string(), 3, 3),
        ("baz".to_string(), 4, 3),
        (String::new(), 4, 7),
    ]);
    Ok(())
}

#[test]
fn lookahead_is_memoized_and_does_not_consume() -> Result<()> {
    let source = Source::new("a # skipped\n b").into_shared();
    let mut lexer = GraphQLLexer::new(&source);
    assert_eq!(lexer.token().kind, TokenKind::Sof);

    assert_eq!(lexer.advance()?.value_str(), "a");
    assert_eq!(lexer.lookahead()?.value_str(), "b");
    assert_eq!(lexer.lookahead()?.value_str(), "b");
    assert_eq!(lexer.token().value_str(), "a");

    assert_eq!(lexer.advance()?.value_str(), "b");
    assert_eq!(lexer.last_token_end(), 1);
    assert_eq!(lexer.advance()?.kind, TokenKind::Eof);
    assert_eq!(lexer.advance()?.kind, TokenKind::Eof);
    assert_eq!(lexer.lookahead()?.kind, TokenKind::Eof);
    Ok(())
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn lexes_ints_and_floats() -> Result<()> {
    let tokens = lex_all("0 -1 42 1.5 1e10 -1.2E-3 6.0221e+23")?;
    assert_eq!(tokens, vec![
        (TokenKind::Int, "0".to_string()),
        (TokenKind::Int, "-1".to_string()),
        (TokenKind::Int, "42".to_string()),
        (TokenKind::Float, "1.5".to_string()),
        (TokenKind::Float, "1e10".to_string()),
        (TokenKind::Float, "-1.2E-3".to_string()),
        (TokenKind::Float, "6.0221e+23".to_string()),
    ]);
    Ok(())
}

#[test]
fn rejects_leading_zero() {
    let err = lex_error("01");
    assert_eq!(err.description(), "Invalid number, unexpected digit after 0: \"1\".");
    assert_eq!(err.position(), 1);
}

#[test]
fn rejects_malformed_numbers() {
    assert_eq!(
        lex_error("1.").description(),
        "Invalid number, expected digit but got: <EOF>.",
    );
    assert_eq!(
        lex_error("1.2.3").description(),
        "Invalid number, expected digit but got: \".\".",
    );
    assert_eq!(
        lex_error("123abc").description(),
        "Invalid number, expected digit but got: \"a\".",
    );
    assert_eq!(
        lex_error("1e").description(),
        "Invalid number, expected digit but got: <EOF>.",
    );
    assert_eq!(
        lex_error("-x").description(),
        "Invalid number, expected digit but got: \"x\".",
    );
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn simple_strings_borrow_from_the_source() -> Result<()> {
    let source = Source::new("\"abc\"").into_shared();
    let mut lexer = GraphQLLexer::new(&source);
    let token = lexer.advance()?;
    assert_eq!(token.kind, TokenKind::String);
    assert!(matches!(token.value, Some(Cow::Borrowed("abc"))));
    assert_eq!((token.start, token.end), (0, 5));
    Ok(())
}

#[test]
fn expands_escape_sequences() -> Result<()> {
    assert_eq!(
        single_value(r#""a\nb \u0041 \"q\" \\ \/ \t""#)?,
        "a\nb A \"q\" \\ / \t",
    );
    Ok(())
}

#[test]
fn combines_surrogate_pairs() -> Result<()> {
    assert_eq!(single_value(r#""\uD83D\uDE00""#)?, "\u{1F600}");
    assert_eq!(
        lex_error(r#""\uD83D x""#).description(),
        "Invalid Unicode escape sequence: \"\\uD83D\".",
    );
    Ok(())
}

#[test]
fn string_errors() {
    let err = lex_error("\"abc");
    assert_eq!(err.description(), "Unterminated string.");
    assert_eq!(err.position(), 4);

    assert_eq!(lex_error("\"a\nb\"").description(), "Unterminated string.");
    assert_eq!(
        lex_error("\"a\u{0007}\"").description(),
        "Invalid character within String: U+0007.",
    );
    assert_eq!(
        lex_error(r#""\x""#).description(),
        "Invalid character escape sequence: \"\\x\".",
    );
    assert_eq!(
        lex_error(r#""\u12G4""#).description(),
        "Invalid Unicode escape sequence: \"\\u12G4\".",
    );
}

#[test]
fn block_strings_are_dedented() -> Result<()> {
    let token_value = single_value("\"\"\"\n    hello\n      world\n  \"\"\"")?;
    assert_eq!(token_value, "hello\n  world");

    let tokens = lex_all("\"\"\"a \\\"\"\" b\"\"\"")?;
    assert_eq!(tokens, vec![(TokenKind::BlockString, "a \"\"\" b".to_string())]);
    Ok(())
}

#[test]
fn block_strings_keep_escapes_raw() -> Result<()> {
    assert_eq!(single_value(r#""""no \n escape""""#)?, "no \\n escape");
    Ok(())
}

#[test]
fn unterminated_block_string() {
    assert_eq!(lex_error("\"\"\"abc").description(), "Unterminated string.");
}

// =============================================================================
// Unexpected characters
// =============================================================================

#[test]
fn unexpected_characters() {
    let err = lex_error("{ ? }");
    assert_eq!(err.description(), "Unexpected character: \"?\".");
    assert_eq!(err.position(), 2);
    assert_eq!(err.to_string(), "Syntax Error: Unexpected character: \"?\".");

    assert_eq!(lex_error("..").description(), "Unexpected character: \".\".");
    assert_eq!(lex_error("\u{0007}").description(), "Unexpected character: U+0007.");
}

#[test]
fn single_quotes_get_a_hint() {
    assert_eq!(
        lex_error("'abc'").description(),
        "Unexpected single quote character ('), did you mean to use a double quote (\")?",
    );
}
