use crate::Source;
use crate::SourceLocation;
use crate::print_source_location;

#[test]
fn default_name() {
    let source = Source::new("{ a }");
    assert_eq!(source.name(), "GraphQL request");
    assert_eq!(source.body(), "{ a }");
}

#[test]
fn location_of_counts_lines_and_characters() {
    let source = Source::new("ab\ncd\r\nef\rg");
    assert_eq!(source.location_of(0), SourceLocation { line: 1, column: 1 });
    assert_eq!(source.location_of(4), SourceLocation { line: 2, column: 2 });
    assert_eq!(source.location_of(7), SourceLocation { line: 3, column: 1 });
    assert_eq!(source.location_of(10), SourceLocation { line: 4, column: 1 });
    // Offsets past the end clamp to the end of the body.
    assert_eq!(source.location_of(100), SourceLocation { line: 4, column: 2 });
}

#[test]
fn columns_count_characters_not_bytes() {
    let source = Source::new("\u{e9}\u{e9}{");
    assert_eq!(source.location_of(4), SourceLocation { line: 1, column: 3 });
}

#[test]
fn line_text() {
    let source = Source::new("a\r\nb\rc");
    assert_eq!(source.line_text(1), Some("a"));
    assert_eq!(source.line_text(2), Some("b"));
    assert_eq!(source.line_text(3), Some("c"));
    assert_eq!(source.line_text(0), None);
    assert_eq!(source.line_text(4), None);
}

#[test]
fn prints_location_with_previous_line() {
    let source = Source::with_name("{\n  foo(\n}", "q.graphql");
    assert_eq!(
        print_source_location(&source, SourceLocation { line: 2, column: 7 }),
        "q.graphql:2:7\n1 | {\n2 |   foo(\n  |       ^",
    );
}

#[test]
fn prints_location_on_first_line() {
    let source = Source::new("{ ? }");
    assert_eq!(
        print_source_location(&source, source.location_of(2)),
        "GraphQL request:1:3\n1 | { ? }\n  |   ^",
    );
}
