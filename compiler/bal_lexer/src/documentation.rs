//! Documentation line scanning.
//!
//! A `#` line is scanned in [`LexMode::MarkdownDocumentation`] until its line
//! break. `# + name - description` starts in
//! [`LexMode::MarkdownDocumentationParam`], which yields the parameter name
//! and then swaps itself for the plain documentation mode at the `-`.
//!
//! Backtick runs of one to three open a code span that the same run closes.
//! Single and double spans cannot cross a line break; triple spans can.

use bal_ir::{LexMode, TokenKind};
use bal_lexer_core::Cursor;

use crate::scan::{self, Scan};

/// Words that turn a following code span into a definition reference, as in
/// ``function `add` ``.
const REFERENCE_TYPES: &[&[u8]] = &[
    b"type",
    b"service",
    b"variable",
    b"var",
    b"annotation",
    b"module",
    b"function",
    b"parameter",
    b"typedesc",
];

/// Scan one token in a documentation mode. `cursor` is not at EOF.
pub(crate) fn scan(cursor: Cursor<'_>, mode: LexMode) -> Scan {
    match mode {
        LexMode::MarkdownDocumentationParam => parameter(cursor),
        LexMode::SingleBacktickedDocumentation
        | LexMode::DoubleBacktickedDocumentation
        | LexMode::TripleBacktickedDocumentation => code_span(cursor, mode),
        _ => line(cursor),
    }
}

fn backtick_run(cursor: &Cursor<'_>) -> usize {
    cursor.count_run(b'`').min(3)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}

/// Length of a definition reference (`word` plus the spaces before its
/// backtick) at the cursor, if there is one.
#[allow(
    clippy::cast_possible_truncation,
    reason = "reference words are short literals"
)]
fn definition_reference(cursor: &Cursor<'_>) -> Option<u32> {
    let rest = cursor.rest();
    REFERENCE_TYPES.iter().find_map(|word| {
        let after = rest.strip_prefix(*word)?;
        let spaces = after.iter().take_while(|b| matches!(b, b' ' | b'\t')).count();
        (spaces > 0 && after.get(spaces) == Some(&b'`')).then(|| (word.len() + spaces) as u32)
    })
}

/// Body of a documentation line.
fn line(mut cursor: Cursor<'_>) -> Scan {
    if let Some(len) = scan::line_break_len(&cursor) {
        return Scan::pop(TokenKind::DocumentationLineEnd, len);
    }
    let run = backtick_run(&cursor);
    if let Some(mode) = LexMode::backticked_documentation(run) {
        return Scan::push(TokenKind::DocBacktickStart, run_len(run), mode);
    }
    if let Some(len) = definition_reference(&cursor) {
        return Scan::token(TokenKind::DefinitionReference, len);
    }

    let start = cursor.pos();
    let mut prev = 0u8;
    loop {
        let b = cursor.current();
        if cursor.is_eof() || b == b'\n' || b == b'\r' || b == b'`' {
            break;
        }
        if b == b'\\' && cursor.peek() == b'`' {
            cursor.advance_n(2);
            prev = b'`';
            continue;
        }
        if cursor.pos() > start && !is_word_byte(prev) && definition_reference(&cursor).is_some() {
            break;
        }
        prev = b;
        cursor.advance();
    }
    scan::text_since(TokenKind::DocumentationText, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

/// `# + name - `: the name, then the separator that switches to plain text.
fn parameter(mut cursor: Cursor<'_>) -> Scan {
    if let Some(trivia) = scan::trivia(&cursor) {
        return match trivia.kind {
            TokenKind::NewLine => Scan::pop(TokenKind::DocumentationLineEnd, trivia.len),
            _ => trivia,
        };
    }
    let start = cursor.pos();
    match cursor.current() {
        b'-' => {
            cursor.advance();
            cursor.eat_while(|b| b == b' ' || b == b'\t');
            Scan {
                action: scan::ModeAction::Replace(LexMode::MarkdownDocumentation),
                ..Scan::token(TokenKind::DescriptionSeparator, cursor.pos() - start)
            }
        }
        b if is_word_byte(b) && !b.is_ascii_digit() => {
            cursor.eat_while(is_word_byte);
            Scan::token(TokenKind::ParameterName, cursor.pos() - start)
        }
        _ => Scan::invalid_char(&cursor),
    }
}

/// Inside a code span opened by `mode.backtick_run()` backticks.
fn code_span(mut cursor: Cursor<'_>, mode: LexMode) -> Scan {
    let run = mode.backtick_run().unwrap_or(1);
    let multiline = run == 3;

    if cursor.count_run(b'`') >= run {
        return Scan::pop(TokenKind::DocBacktickEnd, run_len(run));
    }
    if !multiline && scan::line_break_len(&cursor).is_some() {
        return Scan::abandon();
    }

    let start = cursor.pos();
    let stops: &[u8] = if multiline { b"`" } else { b"`\n\r" };
    loop {
        match cursor.skip_to_any(stops) {
            b'`' if cursor.count_run(b'`') < run => {
                cursor.eat_while(|b| b == b'`');
            }
            _ => break,
        }
    }
    scan::text_since(TokenKind::DocBacktickContent, start, &cursor)
        .unwrap_or_else(|| Scan::invalid_char(&cursor))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "backtick runs are capped at three"
)]
fn run_len(run: usize) -> u32 {
    run as u32
}
