//! The result of one scan step in any mode.

use bal_ir::{LexMode, TokenKind};
use bal_lexer_core::Cursor;

use crate::lex_error::LexErrorKind;

/// Mode-stack effect of a scanned token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum ModeAction {
    Stay,
    Push(LexMode),
    Pop,
    /// Swap the top frame's mode, keeping its opening position.
    Replace(LexMode),
    /// `${`: push a default frame with brace depth 0.
    Interpolate,
    /// The top frame can no longer close (a code span reached the end of its
    /// line). Pop it and report it unterminated; the token is zero-length.
    Abandon,
}

/// One token's worth of scanning: what it is, how long, and what it does to
/// the mode stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scan {
    pub kind: TokenKind,
    pub len: u32,
    pub action: ModeAction,
    pub error: Option<LexErrorKind>,
}

impl Scan {
    #[inline]
    pub fn token(kind: TokenKind, len: u32) -> Self {
        Scan {
            kind,
            len,
            action: ModeAction::Stay,
            error: None,
        }
    }

    #[inline]
    pub fn push(kind: TokenKind, len: u32, mode: LexMode) -> Self {
        Scan {
            action: ModeAction::Push(mode),
            ..Scan::token(kind, len)
        }
    }

    #[inline]
    pub fn pop(kind: TokenKind, len: u32) -> Self {
        Scan {
            action: ModeAction::Pop,
            ..Scan::token(kind, len)
        }
    }

    #[inline]
    pub fn interpolate() -> Self {
        Scan {
            action: ModeAction::Interpolate,
            ..Scan::token(TokenKind::InterpolationStart, 2)
        }
    }

    #[inline]
    pub fn abandon() -> Self {
        Scan {
            action: ModeAction::Abandon,
            ..Scan::token(TokenKind::Error, 0)
        }
    }

    /// An `Error` token of `len` bytes.
    #[cold]
    pub fn error(error: LexErrorKind, len: u32) -> Self {
        Scan {
            error: Some(error),
            ..Scan::token(TokenKind::Error, len)
        }
    }

    /// An `Error` token covering the single character under `cursor`.
    #[cold]
    pub fn invalid_char(cursor: &Cursor<'_>) -> Self {
        let width = Cursor::utf8_char_width(cursor.current());
        Scan::error(LexErrorKind::InvalidCharacter, width)
    }
}

/// Text token from `start` to the cursor, or `None` if nothing was consumed.
#[inline]
pub(crate) fn text_since(kind: TokenKind, start: u32, cursor: &Cursor<'_>) -> Option<Scan> {
    let len = cursor.pos() - start;
    (len > 0).then(|| Scan::token(kind, len))
}

/// Line break at the cursor: `\r\n`, `\n` or `\r`. Returns its length.
#[inline]
pub(crate) fn line_break_len(cursor: &Cursor<'_>) -> Option<u32> {
    match cursor.current() {
        b'\r' if cursor.peek() == b'\n' => Some(2),
        b'\r' | b'\n' => Some(1),
        _ => None,
    }
}

/// Whitespace or a line break at the cursor, scanned as trivia.
pub(crate) fn trivia(cursor: &Cursor<'_>) -> Option<Scan> {
    if let Some(len) = line_break_len(cursor) {
        return Some(Scan::token(TokenKind::NewLine, len));
    }
    let mut c = *cursor;
    let start = c.pos();
    c.eat_whitespace();
    text_since(TokenKind::Whitespace, start, &c)
}
