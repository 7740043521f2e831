//! Lexer error types.
//!
//! Every error carries WHERE (`span`, plus `start` as a line/column
//! position) and WHAT (`kind`). For unterminated constructs the span starts
//! at the construct's opening delimiter, never at end of input.
//! [`LexError::help`] supplies the HOW for diagnostic rendering.

use bal_ir::{LexMode, Position, Span};

/// A lexical error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {start}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    pub start: Position,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// No rule of the active mode accepts this character.
    #[error("unexpected character")]
    InvalidCharacter,
    /// A `"` string with no closing quote on the same line.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Escape sequence outside `\b \t \n \f \r \" \' \\ \uXXXX`.
    #[error("invalid escape sequence in string literal")]
    InvalidEscape,
    /// Blob literal content that is not valid base16/base64.
    #[error("malformed {encoding} blob literal")]
    MalformedBlob { encoding: &'static str },
    /// A mode frame still open at end of input (or at the end of a
    /// documentation line, for single/double backtick spans).
    #[error("unterminated {}", describe_construct(.mode))]
    UnterminatedTemplate { mode: LexMode },
    /// `<![CDATA[` without `]]>`.
    #[error("unterminated CDATA section")]
    UnterminatedCdata,
    /// Push refused because the mode stack reached its configured limit.
    #[error("literals nested deeper than {limit} levels")]
    NestingTooDeep { limit: u32 },
    /// Source unit exceeds the 4 GiB addressable limit; the excess is not lexed.
    #[error("source is larger than {} bytes", u32::MAX)]
    SourceTooLarge,
}

fn describe_construct(mode: &LexMode) -> &'static str {
    match *mode {
        LexMode::Default => "`${` interpolation",
        other => other.name(),
    }
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span, start: Position) -> Self {
        LexError { kind, span, start }
    }

    /// Actionable hint for the error, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LexErrorKind::InvalidCharacter => None,
            LexErrorKind::UnterminatedString => Some("add a closing `\"` before the end of the line"),
            LexErrorKind::InvalidEscape => {
                Some(r#"valid escapes are \b, \t, \n, \f, \r, \", \', \\ and \uXXXX"#)
            }
            LexErrorKind::MalformedBlob { encoding: "base16" } => {
                Some("base16 blobs need an even number of hex digits")
            }
            LexErrorKind::MalformedBlob { .. } => {
                Some("base64 blobs need groups of four characters, with `=` padding only at the end")
            }
            LexErrorKind::UnterminatedTemplate { mode } => Some(closing_hint(mode)),
            LexErrorKind::UnterminatedCdata => Some("add `]]>` to close the CDATA section"),
            LexErrorKind::NestingTooDeep { .. } => {
                Some("split the literal or raise the limit with `--max-nesting`")
            }
            LexErrorKind::SourceTooLarge => None,
        }
    }
}

fn closing_hint(mode: LexMode) -> &'static str {
    match mode {
        LexMode::Default => "add `}` to close the interpolation",
        LexMode::StringTemplate | LexMode::Xml => "add a closing backtick",
        LexMode::XmlTag => "add `>` to close the tag",
        LexMode::XmlDoubleQuotedString => "add a closing `\"`",
        LexMode::XmlSingleQuotedString => "add a closing `'`",
        LexMode::XmlPi => "add `?>` to close the processing instruction",
        LexMode::XmlComment => "add `-->` to close the comment",
        LexMode::DeprecatedTemplate => "add `}` to close the deprecated block",
        LexMode::SingleBacktickInlineCode | LexMode::SingleBacktickedDocumentation => {
            "add a closing backtick"
        }
        LexMode::DoubleBacktickInlineCode | LexMode::DoubleBacktickedDocumentation => {
            "add two closing backticks"
        }
        LexMode::TripleBacktickInlineCode | LexMode::TripleBacktickedDocumentation => {
            "add three closing backticks"
        }
        LexMode::MarkdownDocumentation | LexMode::MarkdownDocumentationParam => {
            "end the documentation line"
        }
    }
}
