//! Bal IR - shared lexical types
//!
//! This crate contains the data structures exchanged between the lexer and
//! its consumers:
//! - Spans for byte ranges
//! - Positions (line/column) and the `LineOffsetTable` used by diagnostics
//! - Tokens and the closed `TokenKind` enumeration
//! - Lexer modes
//!
//! Everything here is `Copy` and borrows from the source unit; nothing is
//! interned.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod mode;
mod position;
mod span;
mod token;

pub use mode::LexMode;
pub use position::{LineOffsetTable, Position};
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind};
