//! Default-mode scanning.
//!
//! Most fixed rules run through a logos-generated DFA ([`DefaultRule`]):
//! longest match wins, so `..<` beats `..` and `->>` beats `->`.
//!
//! The DFA only backs off a single byte on a failed extension, so forms that
//! need longer lookahead are scanned by hand before it: words, numbers,
//! quoted identifiers, the `>` family and documentation line starts. Words
//! decide whether they open a template or blob, then resolve against the
//! reserved table and the soft-keyword guard table.
//!
//! Braces are not tracked here; the lexer owns interpolation depth.

use bal_ir::{LexMode, TokenKind};
use logos::Logos;

use crate::context::{self, ContextFlags};
use crate::lex_error::LexErrorKind;
use crate::literal;
use crate::scan::Scan;

/// Raw default-mode rule, before keyword resolution.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DefaultRule {
    // === Trivia ===
    #[regex(r"[ \t\x0C]+")]
    Whitespace,
    #[regex(r"\r\n|\n|\r")]
    NewLine,
    #[regex(r"//[^\r\n]*")]
    LineComment,

    // === String literals ===
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*""#)]
    QuotedString,
    #[regex(r#""([^"\\\r\n]|\\[^\r\n])*\\?"#)]
    UnterminatedString,

    // === Operators and punctuation ===
    #[token(";")]
    Semicolon,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("?")]
    QuestionMark,
    #[token("=")]
    Assign,
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,
    #[token("!")]
    Not,
    #[token("==")]
    Equal,
    #[token("!=")]
    NotEqual,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token("&&")]
    And,
    #[token("||")]
    Or,
    #[token("===")]
    RefEqual,
    #[token("!==")]
    RefNotEqual,
    #[token("&")]
    BitAnd,
    #[token("^")]
    BitXor,
    #[token("~")]
    BitComplement,
    #[token("->")]
    RArrow,
    #[token("<-")]
    LArrow,
    #[token("@")]
    At,
    #[token("`")]
    Backtick,
    #[token("..")]
    Range,
    #[token("...")]
    Ellipsis,
    #[token("|")]
    Pipe,
    #[token("=>")]
    EqualGt,
    #[token("?:")]
    Elvis,
    #[token("->>")]
    SyncRArrow,
    #[token("+=")]
    CompoundAdd,
    #[token("-=")]
    CompoundSub,
    #[token("*=")]
    CompoundMul,
    #[token("/=")]
    CompoundDiv,
    #[token("&=")]
    CompoundBitAnd,
    #[token("|=")]
    CompoundBitOr,
    #[token("^=")]
    CompoundBitXor,
    #[token("<<=")]
    CompoundLeftShift,
    #[token("..<")]
    HalfOpenRange,
}

/// Scan one default-mode token from `rest`, the unconsumed source.
///
/// `rest` must be non-empty. Soft-keyword side effects are applied to
/// `flags` immediately.
pub(crate) fn scan(rest: &str, flags: &mut ContextFlags) -> Scan {
    let bytes = rest.as_bytes();
    match bytes {
        [b'#', ..] => return documentation_start(bytes),
        [b'>', ..] => return greater_than(bytes),
        [b'0'..=b'9', ..] | [b'.', b'0'..=b'9', ..] => return number(bytes),
        [b'^', b'"', ..] => {
            if let Some(len) = quoted_identifier(bytes) {
                return Scan::token(TokenKind::Identifier, width(len));
            }
        }
        _ => {}
    }
    let len = word_len(rest);
    if len > 0 {
        return word(&rest[..len], rest, flags);
    }

    let mut lexer = DefaultRule::lexer(rest);
    let Some(Ok(rule)) = lexer.next() else {
        let len = rest.chars().next().map_or(1, char::len_utf8);
        return Scan::error(LexErrorKind::InvalidCharacter, width(len));
    };
    let text = lexer.slice();

    match rule {
        DefaultRule::QuotedString => {
            if literal::has_valid_escapes(text) {
                Scan::token(TokenKind::QuotedStringLiteral, width(text.len()))
            } else {
                Scan::error(LexErrorKind::InvalidEscape, width(text.len()))
            }
        }
        DefaultRule::UnterminatedString => {
            Scan::error(LexErrorKind::UnterminatedString, width(text.len()))
        }
        other => Scan::token(fixed_kind(other), width(text.len())),
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "token lengths are bounded by the source length, which fits in u32"
)]
fn width(len: usize) -> u32 {
    len as u32
}

/// Length of the run of bytes from `from` that satisfy `pred`.
fn run(bytes: &[u8], from: usize, pred: impl Fn(u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|&&b| pred(b)).count())
}

fn is_inline_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0C)
}

/// Byte length of the word at the start of `rest`: a letter or `_`, then
/// letters, digits and `_`. Zero when no word starts here.
fn word_len(rest: &str) -> usize {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c == '_' || c.is_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|&(_, c)| !(c == '_' || c.is_alphanumeric()))
        .map_or(rest.len(), |(i, _)| i)
}

/// A word, or the template or blob it opens.
///
/// `string`, `xml`, `deprecated`, `base16` and `base64` open a construct
/// only when the next non-blank byte on the line is its delimiter; otherwise
/// they are ordinary words.
fn word(text: &str, rest: &str, flags: &mut ContextFlags) -> Scan {
    let bytes = rest.as_bytes();
    let delimiter = text.len() + run(bytes, text.len(), is_inline_space);
    let next = bytes.get(delimiter).copied();
    let opened = width(delimiter + 1);

    match (text, next) {
        ("string", Some(b'`')) => {
            return Scan::push(TokenKind::StringTemplateStart, opened, LexMode::StringTemplate);
        }
        ("xml", Some(b'`')) => {
            return Scan::push(TokenKind::XmlLiteralStart, opened, LexMode::Xml);
        }
        ("deprecated", Some(b'{')) => {
            return Scan::push(
                TokenKind::DeprecatedTemplateStart,
                opened,
                LexMode::DeprecatedTemplate,
            );
        }
        ("base16", Some(b'`')) => {
            if let Some(scan) = blob(rest, delimiter, "base16") {
                return scan;
            }
        }
        ("base64", Some(b'`')) => {
            if let Some(scan) = blob(rest, delimiter, "base64") {
                return scan;
            }
        }
        _ => {}
    }
    Scan::token(context::resolve_word(text, flags), width(text.len()))
}

/// A `base16` or `base64` literal whose opening backtick is at `open`,
/// validated. `None` when the backtick never closes.
fn blob(rest: &str, open: usize, encoding: &'static str) -> Option<Scan> {
    let close = memchr::memchr(b'`', &rest.as_bytes()[open + 1..])?;
    let literal_text = &rest[..open + close + 2];
    let content = literal::blob_content(literal_text);
    let len = width(literal_text.len());
    let (valid, kind) = if encoding == "base16" {
        (literal::is_valid_base16(content), TokenKind::Base16BlobLiteral)
    } else {
        (literal::is_valid_base64(content), TokenKind::Base64BlobLiteral)
    };
    Some(if valid {
        Scan::token(kind, len)
    } else {
        Scan::error(LexErrorKind::MalformedBlob { encoding }, len)
    })
}

/// `#` opens a documentation line: `# `, `# + name`, or `# + return - `.
fn documentation_start(bytes: &[u8]) -> Scan {
    let mut end = 1 + usize::from(matches!(bytes.get(1), Some(b' ' | b'\t')));
    if bytes.get(end) != Some(&b'+') {
        return Scan::push(
            TokenKind::DocumentationLineStart,
            width(end),
            LexMode::MarkdownDocumentation,
        );
    }
    end += 1;
    end += run(bytes, end, |b| matches!(b, b' ' | b'\t'));

    if let Some(after) = return_marker(bytes, end) {
        return Scan::push(
            TokenKind::ReturnParameterDocumentationStart,
            width(after),
            LexMode::MarkdownDocumentation,
        );
    }
    Scan::push(
        TokenKind::ParameterDocumentationStart,
        width(end),
        LexMode::MarkdownDocumentationParam,
    )
}

/// `return[ \t]*-[ \t]*` at `at`, returning the offset past it.
fn return_marker(bytes: &[u8], at: usize) -> Option<usize> {
    let blank = |b: u8| matches!(b, b' ' | b'\t');
    let tail = bytes.get(at..)?.strip_prefix(b"return")?;
    let dash = at + 6 + run(tail, 0, blank);
    (bytes.get(dash) == Some(&b'-')).then(|| dash + 1 + run(bytes, dash + 1, blank))
}

/// `>`, `>=`, `>>=` or `>>>=`. A bare `>>` is two `Gt` tokens.
fn greater_than(bytes: &[u8]) -> Scan {
    let (kind, len) = if bytes.starts_with(b">>>=") {
        (TokenKind::CompoundLogicalShift, 4)
    } else if bytes.starts_with(b">>=") {
        (TokenKind::CompoundRightShift, 3)
    } else if bytes.starts_with(b">=") {
        (TokenKind::GtEq, 2)
    } else {
        (TokenKind::Gt, 1)
    };
    Scan::token(kind, len)
}

/// `[eE][+-]?[0-9]+` (or `[pP]...` for hex) at `at`, returning the offset
/// past it.
fn exponent(bytes: &[u8], at: usize, marker: u8) -> Option<usize> {
    if !bytes.get(at).is_some_and(|b| b.to_ascii_lowercase() == marker) {
        return None;
    }
    let mut end = at + 1;
    if matches!(bytes.get(end), Some(b'+' | b'-')) {
        end += 1;
    }
    let digits = run(bytes, end, |b| b.is_ascii_digit());
    (digits > 0).then_some(end + digits)
}

/// Integer and floating-point literals, decimal and hex.
///
/// A `.` belongs to the literal only when a digit follows it, so `1..<5`
/// and `1.foo` both start with the integer `1`. Decimal integers have no
/// leading zeros: `007` scans as `0`.
fn number(bytes: &[u8]) -> Scan {
    if bytes.starts_with(b"0x") || bytes.starts_with(b"0X") {
        if let Some(scan) = hex_number(bytes) {
            return scan;
        }
    }

    let mut end = match bytes.first() {
        Some(b'0') => 1,
        _ => run(bytes, 0, |b| b.is_ascii_digit()),
    };
    let mut float = false;
    if bytes.get(end) == Some(&b'.') {
        let fraction = run(bytes, end + 1, |b| b.is_ascii_digit());
        if fraction > 0 {
            end += 1 + fraction;
            float = true;
        }
    }
    if let Some(after) = exponent(bytes, end, b'e') {
        end = after;
        float = true;
    }

    let kind = if float {
        TokenKind::DecimalFloatingPointLiteral
    } else {
        TokenKind::DecimalIntegerLiteral
    };
    Scan::token(kind, width(end))
}

/// `0x` literals. `None` when no hex digit follows, leaving the `0`.
fn hex_number(bytes: &[u8]) -> Option<Scan> {
    let digits = run(bytes, 2, |b| b.is_ascii_hexdigit());
    let mut end = 2 + digits;
    let mut float = false;
    if bytes.get(end) == Some(&b'.') {
        let fraction = run(bytes, end + 1, |b| b.is_ascii_hexdigit());
        if fraction > 0 {
            end += 1 + fraction;
            float = true;
        }
    }
    if digits == 0 && !float {
        return None;
    }
    if let Some(after) = exponent(bytes, end, b'p') {
        end = after;
        float = true;
    }

    let kind = if float {
        TokenKind::HexFloatingPointLiteral
    } else {
        TokenKind::HexIntegerLiteral
    };
    Some(Scan::token(kind, width(end)))
}

/// `^"..."`: a quoted identifier. `None` when the quote never closes or a
/// forbidden character intervenes, leaving `^` as `BitXor`.
fn quoted_identifier(bytes: &[u8]) -> Option<usize> {
    let mut i = 2;
    loop {
        match *bytes.get(i)? {
            b'"' => return (i > 2).then_some(i + 1),
            b'\\' => {
                if !matches!(bytes.get(i + 1)?, b'|' | b'"' | b'\\' | b'/') {
                    return None;
                }
                i += 2;
            }
            b'|' | 0x08 | 0x0C | b'\n' | b'\r' | b'\t' => return None,
            _ => i += 1,
        }
    }
}

/// Token kind for rules that need no post-processing.
fn fixed_kind(rule: DefaultRule) -> TokenKind {
    match rule {
        DefaultRule::Whitespace => TokenKind::Whitespace,
        DefaultRule::NewLine => TokenKind::NewLine,
        DefaultRule::LineComment => TokenKind::LineComment,
        DefaultRule::Semicolon => TokenKind::Semicolon,
        DefaultRule::Colon => TokenKind::Colon,
        DefaultRule::Dot => TokenKind::Dot,
        DefaultRule::Comma => TokenKind::Comma,
        DefaultRule::LeftBrace => TokenKind::LeftBrace,
        DefaultRule::RightBrace => TokenKind::RightBrace,
        DefaultRule::LeftParen => TokenKind::LeftParen,
        DefaultRule::RightParen => TokenKind::RightParen,
        DefaultRule::LeftBracket => TokenKind::LeftBracket,
        DefaultRule::RightBracket => TokenKind::RightBracket,
        DefaultRule::QuestionMark => TokenKind::QuestionMark,
        DefaultRule::Assign => TokenKind::Assign,
        DefaultRule::Add => TokenKind::Add,
        DefaultRule::Sub => TokenKind::Sub,
        DefaultRule::Mul => TokenKind::Mul,
        DefaultRule::Div => TokenKind::Div,
        DefaultRule::Mod => TokenKind::Mod,
        DefaultRule::Not => TokenKind::Not,
        DefaultRule::Equal => TokenKind::Equal,
        DefaultRule::NotEqual => TokenKind::NotEqual,
        DefaultRule::Lt => TokenKind::Lt,
        DefaultRule::LtEq => TokenKind::LtEq,
        DefaultRule::And => TokenKind::And,
        DefaultRule::Or => TokenKind::Or,
        DefaultRule::RefEqual => TokenKind::RefEqual,
        DefaultRule::RefNotEqual => TokenKind::RefNotEqual,
        DefaultRule::BitAnd => TokenKind::BitAnd,
        DefaultRule::BitXor => TokenKind::BitXor,
        DefaultRule::BitComplement => TokenKind::BitComplement,
        DefaultRule::RArrow => TokenKind::RArrow,
        DefaultRule::LArrow => TokenKind::LArrow,
        DefaultRule::At => TokenKind::At,
        DefaultRule::Backtick => TokenKind::Backtick,
        DefaultRule::Range => TokenKind::Range,
        DefaultRule::Ellipsis => TokenKind::Ellipsis,
        DefaultRule::Pipe => TokenKind::Pipe,
        DefaultRule::EqualGt => TokenKind::EqualGt,
        DefaultRule::Elvis => TokenKind::Elvis,
        DefaultRule::SyncRArrow => TokenKind::SyncRArrow,
        DefaultRule::CompoundAdd => TokenKind::CompoundAdd,
        DefaultRule::CompoundSub => TokenKind::CompoundSub,
        DefaultRule::CompoundMul => TokenKind::CompoundMul,
        DefaultRule::CompoundDiv => TokenKind::CompoundDiv,
        DefaultRule::CompoundBitAnd => TokenKind::CompoundBitAnd,
        DefaultRule::CompoundBitOr => TokenKind::CompoundBitOr,
        DefaultRule::CompoundBitXor => TokenKind::CompoundBitXor,
        DefaultRule::CompoundLeftShift => TokenKind::CompoundLeftShift,
        DefaultRule::HalfOpenRange => TokenKind::HalfOpenRange,
        // Resolved in `scan` before reaching here.
        DefaultRule::QuotedString | DefaultRule::UnterminatedString => TokenKind::Error,
    }
}

#[cfg(test)]
mod tests;
