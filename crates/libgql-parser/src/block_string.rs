//! Helpers for GraphQL block strings (`"""..."""`).

/// Applies the block-string indentation rules to the raw contents of a block
/// string (the text between the triple quotes, with `\"""` already
/// unescaped).
///
/// The common indentation of every line after the first is removed, ignoring
/// lines that contain only whitespace, and leading and trailing blank lines
/// are dropped.
pub fn dedent_block_string_lines(raw: &str) -> String {
    let lines = split_lines(raw);

    let mut common_indent = usize::MAX;
    let mut first_non_empty_line = None;
    let mut last_non_empty_line = None;
    for (idx, line) in lines.iter().enumerate() {
        let indent = leading_whitespace(line);
        if indent == line.len() {
            continue;
        }
        first_non_empty_line.get_or_insert(idx);
        last_non_empty_line = Some(idx);
        if idx != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let (Some(first), Some(last)) = (first_non_empty_line, last_non_empty_line)
    else {
        return String::new();
    };

    lines[first..=last]
        .iter()
        .enumerate()
        .map(|(offset, line)| {
            if first + offset == 0 {
                *line
            } else {
                // Leading whitespace is ASCII so slicing at a char boundary
                // is guaranteed.
                &line[common_indent.min(line.len())..]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Returns `true` when `value` would survive a print-as-block-string and
/// re-parse unchanged.
pub fn is_printable_as_block_string(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let mut is_empty_line = true;
    let mut has_indent = false;
    let mut has_common_indent = true;
    let mut seen_non_empty_line = false;

    for ch in value.chars() {
        match ch {
            '\u{0000}'..='\u{0008}' | '\u{000B}' | '\u{000C}' | '\u{000E}'..='\u{001F}' => {
                return false;
            },
            '\r' => return false,
            '\n' => {
                if is_empty_line && !seen_non_empty_line {
                    return false;
                }
                seen_non_empty_line = true;
                is_empty_line = true;
                has_indent = false;
            },
            '\t' | ' ' => {
                has_indent = has_indent || is_empty_line;
            },
            _ => {
                has_common_indent = has_common_indent && has_indent;
                is_empty_line = false;
            },
        }
    }

    if is_empty_line {
        return false;
    }
    if has_common_indent && seen_non_empty_line {
        return false;
    }
    true
}

/// Prints `value` as a block string literal.
///
/// Multi-line output is chosen for values that span lines, are long, or
/// would otherwise be ambiguous at the closing quotes.
pub fn print_block_string(value: &str) -> String {
    let escaped = value.replace("\"\"\"", "\\\"\"\"");
    let lines = split_lines(&escaped);
    let is_single_line = lines.len() == 1;

    let force_leading_new_line = lines.len() > 1
        && lines[1..].iter().all(|line| {
            line.is_empty() || line.starts_with([' ', '\t'])
        });

    let has_trailing_triple_quotes = escaped.ends_with("\\\"\"\"");
    let has_trailing_quote = value.ends_with('"') && !has_trailing_triple_quotes;
    let has_trailing_slash = value.ends_with('\\');
    let force_trailing_new_line = has_trailing_quote || has_trailing_slash;

    let print_as_multiple_lines = !is_single_line
        || value.chars().count() > 70
        || force_trailing_new_line
        || force_leading_new_line
        || has_trailing_triple_quotes;

    let skip_leading_new_line =
        is_single_line && value.starts_with([' ', '\t']);

    let mut result = String::with_capacity(escaped.len() + 8);
    result.push_str("\"\"\"");
    if (print_as_multiple_lines && !skip_leading_new_line) || force_leading_new_line {
        result.push('\n');
    }
    result.push_str(&escaped);
    if print_as_multiple_lines || force_trailing_new_line {
        result.push('\n');
    }
    result.push_str("\"\"\"");
    result
}

fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}

fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = vec![];
    let mut rest = text;
    while let Some(idx) = rest.find(['\n', '\r']) {
        lines.push(&rest[..idx]);
        let term_len = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + term_len..];
    }
    lines.push(rest);
    lines
}
