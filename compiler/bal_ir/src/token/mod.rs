//! Tokens produced by the lexer.

mod kind;

pub use kind::TokenKind;

use std::fmt;

use crate::{Position, Span};

/// A token borrowed from its source unit.
///
/// `span` is the byte range; `start`/`end` carry the same range as
/// line/column positions so consumers never recompute them.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
    pub start: Position,
    pub end: Position,
}

impl<'src> Token<'src> {
    #[inline]
    pub fn new(kind: TokenKind, text: &'src str, start: Position, end: Position) -> Self {
        Token {
            kind,
            text,
            span: Span::new(start.offset, end.offset),
            start,
            end,
        }
    }

    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {}", self.kind, self.text, self.span)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
