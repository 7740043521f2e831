//! Lexer modes.

use std::fmt;

/// The sub-lexer that is active on top of the mode stack.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LexMode {
    /// Ordinary code, also used inside `${ ... }` interpolations.
    Default,
    StringTemplate,
    Xml,
    XmlTag,
    XmlDoubleQuotedString,
    XmlSingleQuotedString,
    XmlPi,
    XmlComment,
    TripleBacktickInlineCode,
    DoubleBacktickInlineCode,
    SingleBacktickInlineCode,
    DeprecatedTemplate,
    MarkdownDocumentation,
    MarkdownDocumentationParam,
    SingleBacktickedDocumentation,
    DoubleBacktickedDocumentation,
    TripleBacktickedDocumentation,
}

impl LexMode {
    pub const fn name(self) -> &'static str {
        match self {
            LexMode::Default => "default",
            LexMode::StringTemplate => "string template",
            LexMode::Xml => "XML literal",
            LexMode::XmlTag => "XML tag",
            LexMode::XmlDoubleQuotedString => "XML double-quoted string",
            LexMode::XmlSingleQuotedString => "XML single-quoted string",
            LexMode::XmlPi => "XML processing instruction",
            LexMode::XmlComment => "XML comment",
            LexMode::TripleBacktickInlineCode => "triple-backtick inline code",
            LexMode::DoubleBacktickInlineCode => "double-backtick inline code",
            LexMode::SingleBacktickInlineCode => "single-backtick inline code",
            LexMode::DeprecatedTemplate => "deprecated template",
            LexMode::MarkdownDocumentation => "documentation line",
            LexMode::MarkdownDocumentationParam => "parameter documentation",
            LexMode::SingleBacktickedDocumentation => "single-backtick code span",
            LexMode::DoubleBacktickedDocumentation => "double-backtick code span",
            LexMode::TripleBacktickedDocumentation => "triple-backtick code span",
        }
    }

    /// Backtick inline-code mode for a run of `n` backticks (1..=3).
    pub const fn inline_code(n: usize) -> Option<LexMode> {
        match n {
            1 => Some(LexMode::SingleBacktickInlineCode),
            2 => Some(LexMode::DoubleBacktickInlineCode),
            3 => Some(LexMode::TripleBacktickInlineCode),
            _ => None,
        }
    }

    /// Backticked-documentation mode for a run of `n` backticks (1..=3).
    pub const fn backticked_documentation(n: usize) -> Option<LexMode> {
        match n {
            1 => Some(LexMode::SingleBacktickedDocumentation),
            2 => Some(LexMode::DoubleBacktickedDocumentation),
            3 => Some(LexMode::TripleBacktickedDocumentation),
            _ => None,
        }
    }

    /// Length of the backtick run that opens and closes this mode, if any.
    pub const fn backtick_run(self) -> Option<usize> {
        match self {
            LexMode::SingleBacktickInlineCode | LexMode::SingleBacktickedDocumentation => Some(1),
            LexMode::DoubleBacktickInlineCode | LexMode::DoubleBacktickedDocumentation => Some(2),
            LexMode::TripleBacktickInlineCode | LexMode::TripleBacktickedDocumentation => Some(3),
            _ => None,
        }
    }
}

impl fmt::Display for LexMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
