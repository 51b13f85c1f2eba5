//! Inverse text transforms for content lines (RFC 5545 §3.1, §3.3.11).
//!
//! The workspace only emits iCalendar; these exist so emitted documents can
//! be checked against the transforms that produced them.

/// Unfolds content lines by removing every CRLF (or bare LF) followed by a
/// single space or tab.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(idx) = rest.find('\n') {
        let (line, tail) = rest.split_at(idx);
        let tail = &tail[1..];
        if tail.starts_with([' ', '\t']) {
            result.push_str(line.strip_suffix('\r').unwrap_or(line));
            rest = &tail[1..];
        } else {
            result.push_str(line);
            result.push('\n');
            rest = tail;
        }
    }
    result.push_str(rest);
    result
}

/// Unescapes a TEXT value (RFC 5545 §3.3.11).
///
/// Escape sequences: `\\` `\,` `\;` `\n` `\N`. Unknown sequences are kept.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => result.push('\n'),
            Some(escaped @ (',' | ';' | '\\')) => result.push(escaped),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
