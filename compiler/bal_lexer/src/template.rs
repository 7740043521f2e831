//! String template scanning: the body of `` string `...` ``.
//!
//! Text runs until a backtick or an unescaped `${`. A backslash escapes the
//! following character, so `` \` `` and `\$` stay in the text.

use bal_ir::TokenKind;
use bal_lexer_core::Cursor;

use crate::scan::{self, Scan};

pub(crate) fn scan(mut cursor: Cursor<'_>) -> Scan {
    match cursor.current() {
        b'`' => return Scan::pop(TokenKind::StringTemplateEnd, 1),
        b'$' if cursor.peek() == b'{' => return Scan::interpolate(),
        _ => {}
    }

    let start = cursor.pos();
    loop {
        match cursor.skip_to_any(b"`$\\") {
            b'\\' => {
                cursor.advance();
                cursor.advance_char();
            }
            b'$' if cursor.peek() != b'{' => cursor.advance(),
            _ => break,
        }
    }
    scan::text_since(TokenKind::StringTemplateText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}
