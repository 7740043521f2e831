//! The lexer's mode stack.
//!
//! The bottom frame is always [`LexMode::Default`] and is never popped, so
//! the stack is never empty. Frames remember where they were opened so that
//! an unterminated construct can be reported at its opening delimiter.

use bal_ir::{LexMode, Position};
use smallvec::SmallVec;

/// One entry on the mode stack.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModeFrame {
    pub mode: LexMode,
    /// Start of the token that pushed this frame.
    pub opened_at: Position,
    /// Unmatched `{` seen inside an interpolation frame.
    pub brace_depth: u32,
}

impl ModeFrame {
    pub const fn new(mode: LexMode, opened_at: Position) -> Self {
        ModeFrame {
            mode,
            opened_at,
            brace_depth: 0,
        }
    }
}

/// Most sources nest a handful of frames at most.
pub(crate) struct ModeStack {
    frames: SmallVec<[ModeFrame; 8]>,
}

impl ModeStack {
    pub fn new() -> Self {
        let mut frames = SmallVec::new();
        frames.push(ModeFrame::new(LexMode::Default, Position::START));
        ModeStack { frames }
    }

    #[inline]
    pub fn top(&self) -> &ModeFrame {
        // The bottom frame is never popped.
        &self.frames[self.frames.len() - 1]
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut ModeFrame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    #[inline]
    pub fn mode(&self) -> LexMode {
        self.top().mode
    }

    /// Number of frames, including the bottom frame.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "depth is bounded by LexerConfig::max_nesting"
    )]
    #[inline]
    pub fn depth(&self) -> u32 {
        self.frames.len() as u32
    }

    /// `true` when the top frame is a `${ ... }` interpolation.
    #[inline]
    pub fn in_interpolation(&self) -> bool {
        self.frames.len() > 1 && self.mode() == LexMode::Default
    }

    pub fn frames(&self) -> &[ModeFrame] {
        &self.frames
    }

    pub fn push(&mut self, frame: ModeFrame) {
        self.frames.push(frame);
    }

    /// Pop the top frame. The bottom frame stays; popping it returns `None`.
    pub fn pop(&mut self) -> Option<ModeFrame> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    /// Swap the top frame's mode, keeping its opening position.
    pub fn replace(&mut self, mode: LexMode) {
        if self.frames.len() > 1 {
            self.top_mut().mode = mode;
        }
    }
}
