//! Sentinel-terminated source buffer.
//!
//! # Layout
//!
//! ```text
//! [source_bytes..., 0x00, padding_zeros...]
//!  ^                ^     ^
//!  0                |     rounded up to a 64-byte boundary
//!              source_len (sentinel)
//! ```
//!
//! At least one full cache line of zeros follows the source, so a cursor can
//! look up to 63 bytes past the end without leaving the allocation.

use crate::Cursor;

/// Cache line size in bytes, used for padding.
const CACHE_LINE: usize = 64;

/// Owned copy of a source unit followed by zero padding.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a padded buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `len()`; the lexer
    /// rejects them before constructing a buffer.
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let source_len = bytes.len();

        let padded_len = (source_len + CACHE_LINE + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(bytes);

        SourceBuffer {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Source bytes without the sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Cursor at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        self.cursor_at(0)
    }

    /// Cursor at byte `pos`, which must not exceed [`len()`](Self::len).
    pub fn cursor_at(&self, pos: u32) -> Cursor<'_> {
        Cursor::new(&self.buf, pos.min(self.source_len), self.source_len)
    }

    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}
