use crate::dedent_block_string_lines;
use crate::is_printable_as_block_string;
use crate::print_block_string;

#[test]
fn dedent_removes_common_indentation() {
    assert_eq!(dedent_block_string_lines("\n    hello\n      world\n  "), "hello\n  world");
}

#[test]
fn dedent_ignores_first_line_indentation() {
    assert_eq!(dedent_block_string_lines("  first\n    second"), "  first\nsecond");
}

#[test]
fn dedent_ignores_whitespace_only_lines() {
    assert_eq!(dedent_block_string_lines("\n  a\n\n \n  b\n"), "a\n\n\nb");
    assert_eq!(dedent_block_string_lines("   \n\t\n"), "");
}

#[test]
fn dedent_treats_crlf_as_one_line_break() {
    assert_eq!(dedent_block_string_lines("\r\n  a\r\n  b\r\n"), "a\nb");
}

#[test]
fn printable_as_block_string() {
    assert!(is_printable_as_block_string(""));
    assert!(is_printable_as_block_string("one line"));
    assert!(is_printable_as_block_string("a\n  b"));

    // Leading or trailing empty lines are lost by dedenting.
    assert!(!is_printable_as_block_string("\nfoo"));
    assert!(!is_printable_as_block_string("foo\n"));
    // So is indentation shared by every line.
    assert!(!is_printable_as_block_string("  a\n  b"));

    assert!(!is_printable_as_block_string("bell\u{0007}"));
    assert!(!is_printable_as_block_string("a\r\nb"));
}

#[test]
fn prints_single_and_multi_line_block_strings() {
    assert_eq!(print_block_string("hello"), "\"\"\"hello\"\"\"");
    assert_eq!(print_block_string("a\nb"), "\"\"\"\na\nb\n\"\"\"");
    assert_eq!(print_block_string("  indented"), "\"\"\"  indented\"\"\"");
}

#[test]
fn print_block_string_handles_quotes() {
    assert_eq!(print_block_string("a \"\"\" b"), "\"\"\"a \\\"\"\" b\"\"\"");
    assert_eq!(print_block_string("say \"hi\""), "\"\"\"\nsay \"hi\"\n\"\"\"");
}

#[test]
fn long_values_print_on_their_own_line() {
    let long = "x".repeat(71);
    assert_eq!(print_block_string(&long), format!("\"\"\"\n{long}\n\"\"\""));
}
