//! `deprecated { ... }` blocks and their inline code spans.

use bal_ir::{LexMode, TokenKind};
use bal_lexer_core::Cursor;

use crate::scan::{self, Scan};

/// Scan one token in a deprecated-block mode. `cursor` is not at EOF.
pub(crate) fn scan(cursor: Cursor<'_>, mode: LexMode) -> Scan {
    match mode.backtick_run() {
        Some(run) => inline_code(cursor, run),
        None => block(cursor),
    }
}

fn block(mut cursor: Cursor<'_>) -> Scan {
    match cursor.current() {
        b'}' => return Scan::pop(TokenKind::DeprecatedTemplateEnd, 1),
        b'`' => {
            let run = cursor.count_run(b'`').min(3);
            if let Some(mode) = LexMode::inline_code(run) {
                return Scan::push(TokenKind::InlineCodeStart, run_len(run), mode);
            }
        }
        _ => {}
    }

    let start = cursor.pos();
    while cursor.skip_to_any(b"}`\\") == b'\\' {
        cursor.advance();
        cursor.advance_char();
    }
    scan::text_since(TokenKind::DeprecatedTemplateText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

/// Inline code opened by `run` backticks; a run at least as long closes it.
fn inline_code(mut cursor: Cursor<'_>, run: usize) -> Scan {
    if cursor.count_run(b'`') >= run {
        return Scan::pop(TokenKind::InlineCodeEnd, run_len(run));
    }
    let start = cursor.pos();
    while cursor.skip_to_any(b"`") == b'`' && cursor.count_run(b'`') < run {
        cursor.eat_while(|b| b == b'`');
    }
    scan::text_since(TokenKind::InlineCodeContent, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "backtick runs are capped at three"
)]
fn run_len(run: usize) -> u32 {
    run as u32
}
