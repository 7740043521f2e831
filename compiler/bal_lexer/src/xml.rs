//! XML literal scanning.
//!
//! Covers the literal body ([`LexMode::Xml`]) and the nested modes entered
//! from it: tags, quoted attribute values, processing instructions and
//! comments. Each of these accepts `${` and hands the expression to a
//! default-mode frame.

use bal_ir::{LexMode, TokenKind};
use bal_lexer_core::Cursor;

use crate::lex_error::LexErrorKind;
use crate::scan::{self, Scan};

/// Scan one token in any XML mode. `cursor` is not at EOF.
pub(crate) fn scan(cursor: Cursor<'_>, mode: LexMode) -> Scan {
    if cursor.starts_with(b"${") {
        return Scan::interpolate();
    }
    match mode {
        LexMode::XmlTag => tag(cursor),
        LexMode::XmlDoubleQuotedString => quoted(cursor, b'"'),
        LexMode::XmlSingleQuotedString => quoted(cursor, b'\''),
        LexMode::XmlPi => processing_instruction(cursor),
        LexMode::XmlComment => comment(cursor),
        _ => content(cursor),
    }
}

#[inline]
fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

#[inline]
fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit() || b == b'-' || b == b'.'
}

#[inline]
fn len_since(start: u32, cursor: &Cursor<'_>) -> u32 {
    cursor.pos() - start
}

/// Literal body: text, markup openers, references and the closing backtick.
fn content(mut cursor: Cursor<'_>) -> Scan {
    let start = cursor.pos();
    match cursor.current() {
        b'`' => return Scan::pop(TokenKind::XmlLiteralEnd, 1),
        b'<' => return markup(cursor),
        b'&' => return reference(cursor),
        _ => {}
    }

    loop {
        match cursor.skip_to_any(b"<&`$") {
            b'$' if cursor.peek() != b'{' => cursor.advance(),
            _ => break,
        }
    }
    scan::text_since(TokenKind::XmlText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

/// Everything that starts with `<` in the literal body.
fn markup(mut cursor: Cursor<'_>) -> Scan {
    let start = cursor.pos();

    if cursor.eat_str(b"<!--") {
        return Scan::push(TokenKind::XmlCommentStart, 4, LexMode::XmlComment);
    }

    if cursor.eat_str(b"<![CDATA[") {
        return match memchr::memmem::find(cursor.rest(), b"]]>") {
            Some(offset) => {
                cursor.advance_n(offset_u32(offset) + 3);
                Scan::token(TokenKind::XmlCdata, len_since(start, &cursor))
            }
            None => Scan::error(LexErrorKind::UnterminatedCdata, cursor.source_len() - start),
        };
    }

    if cursor.starts_with(b"<!") {
        return match memchr::memchr2(b'>', b'`', cursor.rest()) {
            Some(offset) if cursor.rest()[offset] == b'>' => {
                Scan::token(TokenKind::XmlDtd, offset_u32(offset) + 1)
            }
            _ => Scan::invalid_char(&cursor),
        };
    }

    if cursor.starts_with(b"<?") {
        return pi_open(cursor);
    }

    if cursor.starts_with(b"</") {
        return Scan::push(TokenKind::XmlTagOpenSlash, 2, LexMode::XmlTag);
    }
    Scan::push(TokenKind::XmlTagOpen, 1, LexMode::XmlTag)
}

/// `<?target` plus trailing whitespace. The target may carry a prefix.
fn pi_open(open: Cursor<'_>) -> Scan {
    let mut cursor = open;
    cursor.advance_n(2);
    if !is_name_start(cursor.current()) {
        return Scan::invalid_char(&open);
    }
    cursor.eat_while(is_name_char);
    if cursor.current() == b':' && is_name_start(cursor.peek()) {
        cursor.advance();
        cursor.eat_while(is_name_char);
    }
    cursor.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    Scan::push(
        TokenKind::XmlTagSpecialOpen,
        len_since(open.pos(), &cursor),
        LexMode::XmlPi,
    )
}

/// `&name;`, `&#digits;` or `&#xhex;`.
fn reference(cursor: Cursor<'_>) -> Scan {
    let rest = cursor.rest();
    let stop = rest
        .iter()
        .skip(1)
        .position(|&b| is_reference_stop(b))
        .map(|i| i + 1);
    let Some(end) = stop.filter(|&i| rest[i] == b';') else {
        return Scan::invalid_char(&cursor);
    };
    let body = &rest[1..end];
    let len = offset_u32(end) + 1;

    let kind = match body {
        [b'#', b'x' | b'X', hex @ ..] if !hex.is_empty() && hex.iter().all(u8::is_ascii_hexdigit) => {
            TokenKind::XmlCharRef
        }
        [b'#', digits @ ..] if !digits.is_empty() && digits.iter().all(u8::is_ascii_digit) => {
            TokenKind::XmlCharRef
        }
        [first, tail @ ..] if is_name_start(*first) && tail.iter().all(|b| is_name_char(*b)) => {
            TokenKind::XmlEntityRef
        }
        _ => return Scan::invalid_char(&cursor),
    };
    Scan::token(kind, len)
}

/// Bytes that end a reference scan: its `;` or anything that cannot appear
/// in one.
fn is_reference_stop(b: u8) -> bool {
    matches!(b, b';' | b'<' | b'`' | b'&' | b' ' | b'\t' | b'\n' | b'\r')
}

/// Inside `<...>`: names, `=`, `:`, `/`, quotes and the closers.
fn tag(mut cursor: Cursor<'_>) -> Scan {
    if let Some(trivia) = scan::trivia(&cursor) {
        return trivia;
    }
    match cursor.current() {
        b'>' => Scan::pop(TokenKind::XmlTagClose, 1),
        b'/' if cursor.peek() == b'>' => Scan::pop(TokenKind::XmlTagSlashClose, 2),
        b'/' => Scan::token(TokenKind::XmlSlash, 1),
        b':' => Scan::token(TokenKind::XmlQnameSeparator, 1),
        b'=' => Scan::token(TokenKind::XmlTagEquals, 1),
        b'"' => Scan::push(
            TokenKind::XmlDoubleQuoteStart,
            1,
            LexMode::XmlDoubleQuotedString,
        ),
        b'\'' => Scan::push(
            TokenKind::XmlSingleQuoteStart,
            1,
            LexMode::XmlSingleQuotedString,
        ),
        b if is_name_start(b) => {
            let start = cursor.pos();
            cursor.eat_while(is_name_char);
            Scan::token(TokenKind::XmlQname, len_since(start, &cursor))
        }
        _ => Scan::invalid_char(&cursor),
    }
}

/// Attribute value text up to the closing `quote`.
fn quoted(mut cursor: Cursor<'_>, quote: u8) -> Scan {
    if cursor.current() == quote {
        return Scan::pop(TokenKind::XmlQuoteEnd, 1);
    }
    let start = cursor.pos();
    loop {
        match cursor.skip_to_any(&[quote, b'$']) {
            b'$' if cursor.peek() != b'{' => cursor.advance(),
            _ => break,
        }
    }
    scan::text_since(TokenKind::XmlQuotedStringText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

/// Processing instruction body up to `?>`.
fn processing_instruction(mut cursor: Cursor<'_>) -> Scan {
    if cursor.starts_with(b"?>") {
        return Scan::pop(TokenKind::XmlTagSpecialClose, 2);
    }
    let start = cursor.pos();
    loop {
        match cursor.skip_to_any(b"?$") {
            b'?' if cursor.peek() != b'>' => cursor.advance(),
            b'$' if cursor.peek() != b'{' => cursor.advance(),
            _ => break,
        }
    }
    scan::text_since(TokenKind::XmlPiText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

/// Comment body up to `-->`.
fn comment(mut cursor: Cursor<'_>) -> Scan {
    if cursor.starts_with(b"-->") {
        return Scan::pop(TokenKind::XmlCommentEnd, 3);
    }
    let start = cursor.pos();
    loop {
        match cursor.skip_to_any(b"-$") {
            b'-' if !cursor.starts_with(b"-->") => cursor.advance(),
            b'$' if cursor.peek() != b'{' => cursor.advance(),
            _ => break,
        }
    }
    scan::text_since(TokenKind::XmlCommentText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "offsets are bounded by the source length"
)]
fn offset_u32(offset: usize) -> u32 {
    offset as u32
}
