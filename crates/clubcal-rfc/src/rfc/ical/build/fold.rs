//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Maximum line length in octets (not including CRLF).
const MAX_LINE_OCTETS: usize = 75;

/// Folds a logical content line and terminates it with CRLF.
///
/// Physical lines never exceed 75 octets. Continuation lines start with a
/// single space, which counts toward the limit. Breaks fall only on UTF-8
/// character boundaries.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return format!("{line}\r\n");
    }

    let mut result = String::with_capacity(line.len() + (line.len() / MAX_LINE_OCTETS + 1) * 3);
    let mut rest = line;
    let mut budget = MAX_LINE_OCTETS;

    while rest.len() > budget {
        let mut split = budget;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        let (head, tail) = rest.split_at(split);
        result.push_str(head);
        result.push_str("\r\n ");
        rest = tail;
        budget = MAX_LINE_OCTETS - 1;
    }

    result.push_str(rest);
    result.push_str("\r\n");
    result
}
