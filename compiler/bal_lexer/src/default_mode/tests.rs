use super::*;
use pretty_assertions::assert_eq;

use crate::scan::ModeAction;

fn first(source: &str) -> (TokenKind, &str) {
    let mut flags = ContextFlags::empty();
    let scan = scan(source, &mut flags);
    (scan.kind, &source[..scan.len as usize])
}

#[test]
fn numbers() {
    assert_eq!(first("42;"), (TokenKind::DecimalIntegerLiteral, "42"));
    assert_eq!(first("0;"), (TokenKind::DecimalIntegerLiteral, "0"));
    assert_eq!(first("007"), (TokenKind::DecimalIntegerLiteral, "0"));
    assert_eq!(first("0xFF)"), (TokenKind::HexIntegerLiteral, "0xFF"));
    assert_eq!(first("1.5)"), (TokenKind::DecimalFloatingPointLiteral, "1.5"));
    assert_eq!(first(".5e-3"), (TokenKind::DecimalFloatingPointLiteral, ".5e-3"));
    assert_eq!(first("2E10"), (TokenKind::DecimalFloatingPointLiteral, "2E10"));
    assert_eq!(first("0x1.8p3"), (TokenKind::HexFloatingPointLiteral, "0x1.8p3"));
    assert_eq!(first("0xAp-2"), (TokenKind::HexFloatingPointLiteral, "0xAp-2"));
    assert_eq!(first("0x.8"), (TokenKind::HexFloatingPointLiteral, "0x.8"));
}

#[test]
fn dot_must_be_followed_by_a_digit() {
    assert_eq!(first("1..<5"), (TokenKind::DecimalIntegerLiteral, "1"));
    assert_eq!(first("1.foo"), (TokenKind::DecimalIntegerLiteral, "1"));
    assert_eq!(first("..<5"), (TokenKind::HalfOpenRange, "..<"));
    assert_eq!(first("...x"), (TokenKind::Ellipsis, "..."));
}

#[test]
fn strings() {
    assert_eq!(
        first(r#""a\tbé" x"#),
        (TokenKind::QuotedStringLiteral, r#""a\tbé""#)
    );
    assert_eq!(first(r#""a\qb" x"#), (TokenKind::Error, r#""a\qb""#));
    assert_eq!(first("\"abc\nx"), (TokenKind::Error, "\"abc"));
    assert_eq!(first("\"abc"), (TokenKind::Error, "\"abc"));
}

#[test]
fn string_errors_carry_their_kind() {
    let mut flags = ContextFlags::empty();
    assert_eq!(
        scan("\"abc", &mut flags).error,
        Some(LexErrorKind::UnterminatedString)
    );
    assert_eq!(
        scan(r#""\q""#, &mut flags).error,
        Some(LexErrorKind::InvalidEscape)
    );
}

#[test]
fn blobs() {
    assert_eq!(
        first("base16 `aa bb`;"),
        (TokenKind::Base16BlobLiteral, "base16 `aa bb`")
    );
    assert_eq!(first("base64`QUJD`"), (TokenKind::Base64BlobLiteral, "base64`QUJD`"));
    assert_eq!(first("base16 `abc`"), (TokenKind::Error, "base16 `abc`"));
    assert_eq!(first("base16x"), (TokenKind::Identifier, "base16x"));
}

#[test]
fn identifiers() {
    assert_eq!(first("café = 1"), (TokenKind::Identifier, "café"));
    assert_eq!(first("_tmp1+"), (TokenKind::Identifier, "_tmp1"));
    assert_eq!(first(r#"^"a b" x"#), (TokenKind::Identifier, r#"^"a b""#));
    assert_eq!(first("^x"), (TokenKind::BitXor, "^"));
    assert_eq!(first("a€"), (TokenKind::Identifier, "a"));
    assert_eq!(first("x١٢ y"), (TokenKind::Identifier, "x١٢"));
}

#[test]
fn keywords_and_literals_from_words() {
    assert_eq!(first("function f"), (TokenKind::Function, "function"));
    assert_eq!(first("true)"), (TokenKind::BooleanLiteral, "true"));
    assert_eq!(first("null;"), (TokenKind::NullLiteral, "null"));
    assert_eq!(first("select"), (TokenKind::Identifier, "select"));
}

#[test]
fn operators_longest_match() {
    assert_eq!(first(">>>= 1"), (TokenKind::CompoundLogicalShift, ">>>="));
    assert_eq!(first(">>= 1"), (TokenKind::CompoundRightShift, ">>="));
    assert_eq!(first(">> 1"), (TokenKind::Gt, ">"));
    assert_eq!(first("<<= 1"), (TokenKind::CompoundLeftShift, "<<="));
    assert_eq!(first("->> w"), (TokenKind::SyncRArrow, "->>"));
    assert_eq!(first("-> w"), (TokenKind::RArrow, "->"));
    assert_eq!(first("<- w"), (TokenKind::LArrow, "<-"));
    assert_eq!(first("!== b"), (TokenKind::RefNotEqual, "!=="));
    assert_eq!(first("?: b"), (TokenKind::Elvis, "?:"));
    assert_eq!(first("=> b"), (TokenKind::EqualGt, "=>"));
}

#[test]
fn trivia() {
    assert_eq!(first(" \t x"), (TokenKind::Whitespace, " \t "));
    assert_eq!(first("\r\nx"), (TokenKind::NewLine, "\r\n"));
    assert_eq!(first("\rx"), (TokenKind::NewLine, "\r"));
    assert_eq!(first("// note\nx"), (TokenKind::LineComment, "// note"));
}

#[test]
fn template_starts_push_modes() {
    let mut flags = ContextFlags::empty();
    let s = scan("string `hi`", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::StringTemplateStart, 8));
    assert_eq!(s.action, ModeAction::Push(LexMode::StringTemplate));

    let s = scan("xml`<a/>`", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::XmlLiteralStart, 4));
    assert_eq!(s.action, ModeAction::Push(LexMode::Xml));

    let s = scan("deprecated {", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::DeprecatedTemplateStart, 12));
    assert_eq!(s.action, ModeAction::Push(LexMode::DeprecatedTemplate));

    assert_eq!(first("string s"), (TokenKind::TypeString, "string"));
    assert_eq!(first("deprecated;"), (TokenKind::Deprecated, "deprecated"));
}

#[test]
fn documentation_starts() {
    let mut flags = ContextFlags::empty();
    let s = scan("# Adds", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::DocumentationLineStart, 2));
    assert_eq!(s.action, ModeAction::Push(LexMode::MarkdownDocumentation));

    let s = scan("# + a - x", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::ParameterDocumentationStart, 4));
    assert_eq!(s.action, ModeAction::Push(LexMode::MarkdownDocumentationParam));

    let s = scan("# + return - sum", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::ReturnParameterDocumentationStart, 13));
    assert_eq!(s.action, ModeAction::Push(LexMode::MarkdownDocumentation));

    let s = scan("# + returned - x", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::ParameterDocumentationStart, 4));
}

#[test]
fn opener_words_without_their_delimiter_stay_words() {
    assert_eq!(first("string s = \"a\";"), (TokenKind::TypeString, "string"));
    assert_eq!(first("string\n`"), (TokenKind::TypeString, "string"));
    assert_eq!(first("xml x"), (TokenKind::TypeXml, "xml"));
    assert_eq!(first("deprecated x"), (TokenKind::Deprecated, "deprecated"));
    assert_eq!(first("base16 x"), (TokenKind::Identifier, "base16"));
    assert_eq!(first("base64 `open"), (TokenKind::Identifier, "base64"));
    assert_eq!(first("strings `x`"), (TokenKind::Identifier, "strings"));
}

#[test]
fn return_needs_its_dash() {
    let mut flags = ContextFlags::empty();
    let s = scan("#+ return", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::ParameterDocumentationStart, 3));

    let s = scan("#+return-x", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::ReturnParameterDocumentationStart, 9));

    let s = scan("#\tplain", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::DocumentationLineStart, 2));
}

#[test]
fn numbers_back_off_incomplete_exponents_and_prefixes() {
    assert_eq!(first("1e+x"), (TokenKind::DecimalIntegerLiteral, "1"));
    assert_eq!(first("1.5e-"), (TokenKind::DecimalFloatingPointLiteral, "1.5"));
    assert_eq!(first("0x."), (TokenKind::DecimalIntegerLiteral, "0"));
    assert_eq!(first("0xg"), (TokenKind::DecimalIntegerLiteral, "0"));
    assert_eq!(first("0x1p+"), (TokenKind::HexIntegerLiteral, "0x1"));
    assert_eq!(first("0x1."), (TokenKind::HexIntegerLiteral, "0x1"));
}

#[test]
fn shifts_and_unclosed_quoted_identifiers() {
    assert_eq!(first(">>> 1"), (TokenKind::Gt, ">"));
    assert_eq!(first(">= 1"), (TokenKind::GtEq, ">="));
    assert_eq!(first("^\"ab\n"), (TokenKind::BitXor, "^"));
    assert_eq!(first("^\"\""), (TokenKind::BitXor, "^"));
    assert_eq!(first(r#"^"a\"b" x"#), (TokenKind::Identifier, r#"^"a\"b""#));
}

#[test]
fn invalid_character_is_one_char() {
    let mut flags = ContextFlags::empty();
    let s = scan("$x", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::Error, 1));
    assert_eq!(s.error, Some(LexErrorKind::InvalidCharacter));

    let s = scan("€", &mut flags);
    assert_eq!((s.kind, s.len), (TokenKind::Error, 3));
}
