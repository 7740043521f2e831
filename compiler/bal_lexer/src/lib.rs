//! Mode-stacked lexer for Ballerina source.
//!
//! # Architecture
//!
//! The lexer keeps an explicit stack of modes. The default mode runs a
//! logos-generated DFA over ordinary code; string templates, XML literals,
//! documentation lines and `deprecated` blocks each have a hand-written
//! sub-lexer over the sentinel-terminated [`bal_lexer_core::Cursor`].
//!
//! Query syntax reuses ordinary words as keywords. Whether `select` or
//! `minutes` is a keyword depends on [`ContextFlags`] set by earlier
//! keywords, as listed in [`SOFT_KEYWORDS`].
//!
//! # Usage
//!
//! ```
//! use bal_ir::TokenKind;
//!
//! let output = bal_lexer::lex("from orders select id");
//! let kinds: Vec<_> = output.significant().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::From,
//!         TokenKind::Identifier,
//!         TokenKind::Select,
//!         TokenKind::Identifier,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(output.errors.is_empty());
//! ```

mod config;
mod context;
mod default_mode;
mod deprecated;
mod documentation;
mod keywords;
mod lex_error;
mod lexer;
mod literal;
mod mode_stack;
mod scan;
mod template;
mod xml;

pub use config::{ErrorPolicy, LexerConfig};
pub use context::{soft_keyword, ContextFlags, SoftKeyword, SOFT_KEYWORDS};
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::{lex, lex_with_config, LexOutput, Lexer};
pub use mode_stack::ModeFrame;
