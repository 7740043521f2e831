use bal_ir::{LexMode, Position, Span, TokenKind};
use pretty_assertions::assert_eq;

use super::{lex, lex_with_config, Lexer};
use crate::config::LexerConfig;
use crate::context::ContextFlags;
use crate::lex_error::LexErrorKind;

/// Every token, trivia included, as `(kind, text)`.
fn tokens(source: &str) -> Vec<(TokenKind, &str)> {
    lex(source).tokens.iter().map(|t| (t.kind, t.text)).collect()
}

#[test]
fn empty_source_is_eof_forever() {
    let mut lexer = Lexer::new("");
    for _ in 0..3 {
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Eof);
        assert_eq!(token.span, Span::point(0));
    }
    assert_eq!(lexer.next(), None);
}

#[test]
fn positions_follow_lines_and_chars() {
    let output = lex("é\r\nb");
    let starts: Vec<Position> = output.tokens.iter().map(|t| t.start).collect();
    assert_eq!(
        starts,
        [
            Position { offset: 0, line: 1, column: 1 },
            Position { offset: 2, line: 1, column: 2 },
            Position { offset: 4, line: 2, column: 1 },
            Position { offset: 5, line: 2, column: 2 },
        ]
    );
}

// === Interpolation braces ===

#[test]
fn braces_inside_interpolation_are_counted() {
    assert_eq!(
        tokens("string `Value: ${ {1,2}.length }`"),
        [
            (TokenKind::StringTemplateStart, "string `"),
            (TokenKind::StringTemplateText, "Value: "),
            (TokenKind::InterpolationStart, "${"),
            (TokenKind::Whitespace, " "),
            (TokenKind::LeftBrace, "{"),
            (TokenKind::DecimalIntegerLiteral, "1"),
            (TokenKind::Comma, ","),
            (TokenKind::DecimalIntegerLiteral, "2"),
            (TokenKind::RightBrace, "}"),
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "length"),
            (TokenKind::Whitespace, " "),
            (TokenKind::InterpolationEnd, "}"),
            (TokenKind::StringTemplateEnd, "`"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn right_brace_in_bottom_frame_is_plain() {
    let mut lexer = Lexer::new("}");
    assert_eq!(lexer.next_token().kind, TokenKind::RightBrace);
    assert_eq!(lexer.mode_depth(), 1);
}

#[test]
fn template_flag_tracks_the_literal() {
    let mut lexer = Lexer::new("xml `<a/>` x");
    assert_eq!(lexer.next_token().kind, TokenKind::XmlLiteralStart);
    assert!(lexer.flags().contains(ContextFlags::IN_STRING_TEMPLATE));
    assert_eq!(lexer.mode(), LexMode::Xml);

    let rest: Vec<TokenKind> = lexer.by_ref().map(|t| t.kind).collect();
    assert_eq!(
        rest,
        [
            TokenKind::XmlTagOpen,
            TokenKind::XmlQname,
            TokenKind::XmlTagSlashClose,
            TokenKind::XmlLiteralEnd,
            TokenKind::Whitespace,
            TokenKind::Identifier,
        ]
    );
    assert!(lexer.flags().is_empty());
}

#[test]
fn frames_remember_their_opening() {
    let mut lexer = Lexer::new("a = string `x${");
    while lexer.mode_depth() < 3 {
        lexer.next_token();
    }
    let frames = lexer.mode_stack();
    assert_eq!(frames[1].mode, LexMode::StringTemplate);
    assert_eq!(frames[1].opened_at.offset, 4);
    assert_eq!(frames[2].mode, LexMode::Default);
    assert_eq!(frames[2].opened_at.offset, 13);
}

// === Nesting limit ===

#[test]
fn push_past_the_limit_is_refused() {
    let output = lex_with_config("string `x`", LexerConfig::default().with_max_nesting(1));
    let kinds: Vec<(TokenKind, &str)> = output.tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        kinds,
        [
            (TokenKind::Error, "string `"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Backtick, "`"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::NestingTooDeep { limit: 1 });
    assert_eq!(output.errors[0].span, Span::new(0, 8));
}

#[test]
fn nested_push_past_the_limit_stays_in_the_outer_mode() {
    let output = lex_with_config("xml `<a>`", LexerConfig::default().with_max_nesting(2));
    let kinds: Vec<(TokenKind, &str)> = output.tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        kinds,
        [
            (TokenKind::XmlLiteralStart, "xml `"),
            (TokenKind::Error, "<"),
            (TokenKind::XmlText, "a>"),
            (TokenKind::XmlLiteralEnd, "`"),
            (TokenKind::Eof, ""),
        ]
    );
}

// === End of input ===

#[test]
fn open_frames_unwind_innermost_first() {
    let output = lex("string `abc ${ x");
    let tail: Vec<(TokenKind, Span)> = output.tokens[4..]
        .iter()
        .map(|t| (t.kind, t.span))
        .collect();
    assert_eq!(
        tail,
        [
            (TokenKind::Identifier, Span::new(15, 16)),
            (TokenKind::Error, Span::point(16)),
            (TokenKind::Error, Span::point(16)),
            (TokenKind::Eof, Span::point(16)),
        ]
    );

    let errors: Vec<(LexErrorKind, Span)> =
        output.errors.iter().map(|e| (e.kind, e.span)).collect();
    assert_eq!(
        errors,
        [
            (
                LexErrorKind::UnterminatedTemplate { mode: LexMode::Default },
                Span::new(12, 16)
            ),
            (
                LexErrorKind::UnterminatedTemplate {
                    mode: LexMode::StringTemplate
                },
                Span::new(0, 16)
            ),
        ]
    );
}

#[test]
fn stack_and_flags_are_clean_after_unwinding() {
    let mut lexer = Lexer::new("deprecated { `code");
    while !lexer.next_token().is_eof() {}
    assert_eq!(lexer.mode_depth(), 1);
    assert!(lexer.flags().is_empty());
    assert_eq!(lexer.errors().len(), 2);
}

#[test]
fn documentation_line_may_end_with_the_source() {
    let output = lex("# note");
    assert!(output.errors.is_empty());
    assert_eq!(
        output.tokens.last().map(|t| t.kind),
        Some(TokenKind::Eof)
    );
}

#[test]
fn code_span_at_end_of_line_is_abandoned() {
    let output = lex("# `code\nx");
    let kinds: Vec<(TokenKind, &str)> = output.tokens.iter().map(|t| (t.kind, t.text)).collect();
    assert_eq!(
        kinds,
        [
            (TokenKind::DocumentationLineStart, "# "),
            (TokenKind::DocBacktickStart, "`"),
            (TokenKind::DocBacktickContent, "code"),
            (TokenKind::Error, ""),
            (TokenKind::DocumentationLineEnd, "\n"),
            (TokenKind::Identifier, "x"),
            (TokenKind::Eof, ""),
        ]
    );
    assert_eq!(
        output.errors[0].kind,
        LexErrorKind::UnterminatedTemplate {
            mode: LexMode::SingleBacktickedDocumentation
        }
    );
    assert_eq!(output.errors[0].span, Span::new(2, 7));
}

// === Error policy ===

#[test]
fn recover_skips_one_character() {
    assert_eq!(
        tokens("a ¤ b"),
        [
            (TokenKind::Identifier, "a"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Error, "¤"),
            (TokenKind::Whitespace, " "),
            (TokenKind::Identifier, "b"),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn halt_stops_after_the_first_error() {
    let mut lexer = Lexer::with_config("a ¤ b", LexerConfig::default().halting());
    let kinds: Vec<TokenKind> = (0..5).map(|_| lexer.next_token().kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::Error,
            TokenKind::Eof,
            TokenKind::Eof,
        ]
    );
    assert_eq!(lexer.errors().len(), 1);
    assert_eq!(lexer.position().offset, 4);
}

#[test]
fn iterator_excludes_eof_and_significant_skips_trivia() {
    let all: Vec<TokenKind> = Lexer::new("a // c\n").map(|t| t.kind).collect();
    assert_eq!(
        all,
        [
            TokenKind::Identifier,
            TokenKind::Whitespace,
            TokenKind::LineComment,
            TokenKind::NewLine,
        ]
    );
    let significant: Vec<&str> = Lexer::new("a // c\n").significant().map(|t| t.text).collect();
    assert_eq!(significant, ["a"]);
}
