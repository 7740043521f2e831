//! Low-level scanning primitives for the Ballerina lexer.
//!
//! [`SourceBuffer`] copies a source unit into a zero-padded buffer so that
//! [`Cursor`] can read the current byte and look a few bytes ahead without
//! bounds checks. End of input is the first `0x00` at or past the source
//! length.
//!
//! The mode-aware token recognition lives in `bal_lexer`; this crate only
//! knows about bytes.

mod cursor;
mod source_buffer;

pub use cursor::Cursor;
pub use source_buffer::SourceBuffer;
