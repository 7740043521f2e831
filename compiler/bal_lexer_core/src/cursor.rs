//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is detected when the current byte is the sentinel (`0x00`) and the
//! position has reached the source length. A `0x00` before that point is an
//! interior null byte and is scanned like any other invalid character.

/// Earliest of two optional match offsets.
///
/// Combines separate `memchr` searches when more needles are needed than a
/// single `memchr3` call accepts.
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// `Copy`, so a scanner can snapshot it to try a speculative match and fall
/// back by keeping the old value.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Only [`SourceBuffer`](crate::SourceBuffer) creates cursors, which
    /// guarantees the sentinel and padding.
    pub(crate) fn new(buf: &'a [u8], pos: u32, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Cursor {
            buf,
            pos,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == 0 && self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes from the current position to the end of input.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos as usize..self.source_len as usize]
    }

    /// Whether the remaining input starts with `pat`.
    #[inline]
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.rest().starts_with(pat)
    }

    /// Consume `pat` if the remaining input starts with it.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "patterns are short literals"
    )]
    pub fn eat_str(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.pos += pat.len() as u32;
            true
        } else {
            false
        }
    }

    /// Consume the current byte if it equals `byte`.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        if self.current() == byte && !self.is_eof() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must be `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 character whose leading byte is `byte`.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character. No-op at EOF.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.source_len);
    }

    /// Advance to the next `\n` or `\r`, or to EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance to the first byte in `needles`, returning it, or to EOF,
    /// returning `0`.
    ///
    /// Needles are searched three at a time with `memchr3`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_any(&mut self, needles: &[u8]) -> u8 {
        let remaining = self.rest();
        let mut found = None;
        for chunk in needles.chunks(3) {
            let hit = match *chunk {
                [a] => memchr::memchr(a, remaining),
                [a, b] => memchr::memchr2(a, b, remaining),
                [a, b, c] => memchr::memchr3(a, b, c, remaining),
                _ => None,
            };
            found = earliest_of(found, hit);
        }
        match found {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len;
                0
            }
        }
    }

    /// Advance past spaces, tabs and form feeds.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | 0x0C));
    }

    /// Count consecutive occurrences of `byte` at the current position
    /// without consuming them.
    pub fn count_run(&self, byte: u8) -> usize {
        self.rest().iter().take_while(|b| **b == byte).count()
    }
}

#[cfg(test)]
mod tests;
