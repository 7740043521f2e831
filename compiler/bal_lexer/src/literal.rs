//! Post-match validation of literal bodies.
//!
//! The default-mode DFA accepts any `\x` pair inside a string and any text
//! between a blob's backticks; these checks decide whether the match is a
//! literal or an `Error` token.

/// Whether every escape in a quoted string (quotes included) is one of
/// `\b \t \n \f \r \" \' \\ \uXXXX`.
pub(crate) fn has_valid_escapes(literal: &str) -> bool {
    let mut bytes = literal.bytes();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            continue;
        }
        match bytes.next() {
            Some(b'b' | b't' | b'n' | b'f' | b'r' | b'"' | b'\'' | b'\\') => {}
            Some(b'u') => {
                for _ in 0..4 {
                    if !bytes.next().is_some_and(|h| h.is_ascii_hexdigit()) {
                        return false;
                    }
                }
            }
            _ => return false,
        }
    }
    true
}

/// Content between the backticks of a blob literal.
pub(crate) fn blob_content(literal: &str) -> &str {
    let open = literal.find('`').map_or(0, |i| i + 1);
    let close = literal.len().saturating_sub(1).max(open);
    &literal[open..close]
}

fn is_blob_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0C)
}

/// `base16` content: hex digits in pairs, whitespace anywhere.
pub(crate) fn is_valid_base16(content: &str) -> bool {
    let mut digits = 0usize;
    for b in content.bytes() {
        if b.is_ascii_hexdigit() {
            digits += 1;
        } else if !is_blob_space(b) {
            return false;
        }
    }
    digits % 2 == 0
}

/// `base64` content: groups of four from `[A-Za-z0-9+/]`, with at most two
/// `=` padding characters closing the final group. Whitespace is ignored.
pub(crate) fn is_valid_base64(content: &str) -> bool {
    let mut count = 0usize;
    let mut padding = 0usize;
    for b in content.bytes() {
        if is_blob_space(b) {
            continue;
        }
        if b == b'=' {
            padding += 1;
        } else if padding > 0 || !(b.is_ascii_alphanumeric() || b == b'+' || b == b'/') {
            return false;
        }
        count += 1;
    }
    padding <= 2 && count % 4 == 0
}
