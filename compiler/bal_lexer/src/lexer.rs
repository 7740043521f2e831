//! The mode-stacked lexer.
//!
//! Each call to [`Lexer::next_token`] asks the sub-lexer of the top mode for
//! one [`Scan`], then applies its [`ModeAction`] to the stack. Sub-lexers
//! never touch the stack themselves; brace depth, the nesting limit, template
//! flags and error recording all live here.

use bal_ir::{LexMode, Position, Span, Token, TokenKind};
use bal_lexer_core::SourceBuffer;
use tracing::{debug, trace};

use crate::config::{ErrorPolicy, LexerConfig};
use crate::context::ContextFlags;
use crate::lex_error::{LexError, LexErrorKind};
use crate::mode_stack::{ModeFrame, ModeStack};
use crate::scan::{ModeAction, Scan};
use crate::{default_mode, deprecated, documentation, template, xml};

/// Lexer over one source unit.
///
/// Whitespace, newlines and comments are returned as trivia tokens, so the
/// concatenated token texts reproduce the source. Use
/// [`significant`](Lexer::significant) to skip them.
pub struct Lexer<'src> {
    source: &'src str,
    buf: SourceBuffer,
    pos: Position,
    stack: ModeStack,
    flags: ContextFlags,
    config: LexerConfig,
    errors: Vec<LexError>,
    /// Set once `Eof` is the only remaining answer.
    done: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    pub fn with_config(source: &'src str, config: LexerConfig) -> Self {
        let (source, too_large) = addressable_prefix(source);
        let mut lexer = Lexer {
            source,
            buf: SourceBuffer::new(source),
            pos: Position::START,
            stack: ModeStack::new(),
            flags: ContextFlags::empty(),
            config,
            errors: Vec::new(),
            done: false,
        };
        if too_large {
            let end = Position::START.advanced(source);
            lexer.record(LexErrorKind::SourceTooLarge, Span::point(end.offset), end);
        }
        lexer
    }

    /// Produce the next token. Returns `Eof` forever once input is exhausted.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.done {
            return self.eof_token();
        }
        if self.pos.offset >= self.buf.len() {
            return self.end_of_input();
        }

        let source = self.source;
        let mode = self.stack.mode();
        let cursor = self.buf.cursor_at(self.pos.offset);
        let scan = match mode {
            LexMode::Default => {
                default_mode::scan(&source[self.pos.offset as usize..], &mut self.flags)
            }
            LexMode::StringTemplate => template::scan(cursor),
            LexMode::Xml
            | LexMode::XmlTag
            | LexMode::XmlDoubleQuotedString
            | LexMode::XmlSingleQuotedString
            | LexMode::XmlPi
            | LexMode::XmlComment => xml::scan(cursor, mode),
            LexMode::DeprecatedTemplate
            | LexMode::SingleBacktickInlineCode
            | LexMode::DoubleBacktickInlineCode
            | LexMode::TripleBacktickInlineCode => deprecated::scan(cursor, mode),
            LexMode::MarkdownDocumentation
            | LexMode::MarkdownDocumentationParam
            | LexMode::SingleBacktickedDocumentation
            | LexMode::DoubleBacktickedDocumentation
            | LexMode::TripleBacktickedDocumentation => documentation::scan(cursor, mode),
        };
        self.apply(scan)
    }

    /// Consume the scanned text and apply the scan's effect on the stack.
    fn apply(&mut self, scan: Scan) -> Token<'src> {
        let source = self.source;
        let start = self.pos;
        let text = &source[start.offset as usize..(start.offset + scan.len) as usize];
        let end = start.advanced(text);
        let mut kind = scan.kind;

        if let Some(error) = scan.error {
            self.record(error, Span::new(start.offset, end.offset), start);
        }

        match scan.action {
            ModeAction::Stay => kind = self.track_braces(kind),
            ModeAction::Push(mode) => kind = self.push(kind, mode, start, end),
            ModeAction::Interpolate => kind = self.push(kind, LexMode::Default, start, end),
            ModeAction::Pop => self.pop(kind),
            ModeAction::Replace(mode) => {
                trace!(from = %self.stack.mode(), to = %mode, "replace mode");
                self.stack.replace(mode);
            }
            ModeAction::Abandon => {
                if let Some(frame) = self.stack.pop() {
                    trace!(mode = %frame.mode, "abandon mode");
                    self.unterminated(frame, start);
                }
            }
        }

        if kind == TokenKind::Error && self.config.error_policy == ErrorPolicy::Halt {
            self.done = true;
        }
        self.pos = end;
        Token::new(kind, text, start, end)
    }

    /// `{` and `}` inside an interpolation frame.
    fn track_braces(&mut self, kind: TokenKind) -> TokenKind {
        if !self.stack.in_interpolation() {
            return kind;
        }
        match kind {
            TokenKind::LeftBrace => {
                self.stack.top_mut().brace_depth += 1;
                kind
            }
            TokenKind::RightBrace if self.stack.top().brace_depth == 0 => {
                self.pop(TokenKind::InterpolationEnd);
                TokenKind::InterpolationEnd
            }
            TokenKind::RightBrace => {
                self.stack.top_mut().brace_depth -= 1;
                kind
            }
            _ => kind,
        }
    }

    /// Push `mode` for a start token, or turn the token into an error when
    /// the stack is already at its limit.
    fn push(
        &mut self,
        kind: TokenKind,
        mode: LexMode,
        start: Position,
        end: Position,
    ) -> TokenKind {
        let limit = self.config.max_nesting;
        if self.stack.depth() >= limit {
            self.record(
                LexErrorKind::NestingTooDeep { limit },
                Span::new(start.offset, end.offset),
                start,
            );
            return TokenKind::Error;
        }

        trace!(%mode, depth = self.stack.depth() + 1, "push mode");
        self.stack.push(ModeFrame::new(mode, start));
        match kind {
            TokenKind::StringTemplateStart | TokenKind::XmlLiteralStart => {
                self.flags.insert(ContextFlags::IN_STRING_TEMPLATE);
            }
            TokenKind::DeprecatedTemplateStart => {
                self.flags.insert(ContextFlags::IN_DEPRECATED_TEMPLATE);
            }
            _ => {}
        }
        kind
    }

    fn pop(&mut self, kind: TokenKind) {
        if let Some(frame) = self.stack.pop() {
            trace!(mode = %frame.mode, depth = self.stack.depth(), "pop mode");
        }
        match kind {
            TokenKind::StringTemplateEnd | TokenKind::XmlLiteralEnd => {
                self.flags.remove(ContextFlags::IN_STRING_TEMPLATE);
            }
            TokenKind::DeprecatedTemplateEnd => {
                self.flags.remove(ContextFlags::IN_DEPRECATED_TEMPLATE);
            }
            _ => {}
        }
    }

    /// Unwind frames left open at end of input, one `Error` token per frame.
    fn end_of_input(&mut self) -> Token<'src> {
        while let Some(frame) = self.stack.pop() {
            match frame.mode {
                // A documentation line may end with the source.
                LexMode::MarkdownDocumentation | LexMode::MarkdownDocumentationParam => {
                    trace!(mode = %frame.mode, "close documentation at end of input");
                }
                mode => {
                    trace!(%mode, "unterminated at end of input");
                    match mode {
                        LexMode::StringTemplate | LexMode::Xml => {
                            self.flags.remove(ContextFlags::IN_STRING_TEMPLATE);
                        }
                        LexMode::DeprecatedTemplate => {
                            self.flags.remove(ContextFlags::IN_DEPRECATED_TEMPLATE);
                        }
                        _ => {}
                    }
                    self.unterminated(frame, self.pos);
                    if self.config.error_policy == ErrorPolicy::Halt {
                        self.done = true;
                    }
                    return Token::new(TokenKind::Error, self.eof_text(), self.pos, self.pos);
                }
            }
        }
        self.done = true;
        self.eof_token()
    }

    /// Record an unterminated-construct error spanning from the frame's
    /// opening delimiter to `at`.
    fn unterminated(&mut self, frame: ModeFrame, at: Position) {
        self.record(
            LexErrorKind::UnterminatedTemplate { mode: frame.mode },
            Span::new(frame.opened_at.offset, at.offset),
            frame.opened_at,
        );
    }

    #[cold]
    fn record(&mut self, kind: LexErrorKind, span: Span, start: Position) {
        debug!(%kind, %span, at = %start, "lex error");
        self.errors.push(LexError::new(kind, span, start));
    }

    fn eof_text(&self) -> &'src str {
        &self.source[self.source.len()..]
    }

    fn eof_token(&self) -> Token<'src> {
        Token::new(TokenKind::Eof, self.eof_text(), self.pos, self.pos)
    }

    /// Position of the next unconsumed byte.
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Mode on top of the stack.
    pub fn mode(&self) -> LexMode {
        self.stack.mode()
    }

    /// Number of frames on the stack, including the bottom default frame.
    pub fn mode_depth(&self) -> u32 {
        self.stack.depth()
    }

    /// The whole stack, bottom frame first.
    pub fn mode_stack(&self) -> &[ModeFrame] {
        self.stack.frames()
    }

    pub fn flags(&self) -> ContextFlags {
        self.flags
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Errors recorded so far, in source order of detection.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// Tokens up to `Eof`, skipping trivia.
    pub fn significant(self) -> impl Iterator<Item = Token<'src>> {
        self.filter(|token| !token.is_trivia())
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields tokens up to, but not including, `Eof`.
    fn next(&mut self) -> Option<Token<'src>> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// The longest prefix of `source` that spans can address, and whether
/// anything was cut.
fn addressable_prefix(source: &str) -> (&str, bool) {
    let limit = u32::MAX as usize;
    if source.len() <= limit {
        return (source, false);
    }
    let mut end = limit;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    (&source[..end], true)
}

/// All tokens of a source unit, plus the errors found while producing them.
#[derive(Clone, Debug, Default)]
pub struct LexOutput<'src> {
    /// Every token including trivia, ending with `Eof`.
    pub tokens: Vec<Token<'src>>,
    pub errors: Vec<LexError>,
}

impl<'src> LexOutput<'src> {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Tokens that are not trivia, `Eof` included.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|token| !token.is_trivia())
    }
}

/// Lex a whole source unit with the default configuration.
pub fn lex(source: &str) -> LexOutput<'_> {
    lex_with_config(source, LexerConfig::default())
}

/// Lex a whole source unit.
pub fn lex_with_config(source: &str, config: LexerConfig) -> LexOutput<'_> {
    let mut lexer = Lexer::with_config(source, config);
    let mut tokens = Vec::with_capacity(source.len() / 4 + 1);
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.is_eof() {
            break;
        }
    }
    LexOutput {
        tokens,
        errors: lexer.into_errors(),
    }
}

#[cfg(test)]
mod tests;
