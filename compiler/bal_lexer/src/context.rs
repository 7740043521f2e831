//! Context flags and the soft-keyword guard table.
//!
//! Query syntax reuses ordinary words (`select`, `last`, `minutes`, ...) as
//! keywords. Each such spelling is a keyword only while its guard flag is
//! set; recognising it then clears or sets other flags. The flags form a
//! small state machine over keyword recognition, written down as data in
//! [`SOFT_KEYWORDS`] so every enter/exit pairing is visible in one place.
//!
//! Nothing validates the pairings against the parser. A `from` that is never
//! followed by `select` leaves `IN_TABLE_QUERY` set for the rest of the
//! source unit; a fresh lexer starts clean.

use bitflags::bitflags;
use tracing::trace;

use bal_ir::TokenKind;

use crate::keywords;

bitflags! {
    /// Per-lexer context flags.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ContextFlags: u8 {
        // === Template flags ===
        // Set by a template start token, cleared by its closing delimiter.

        /// Inside a string template or XML literal.
        const IN_STRING_TEMPLATE = 1 << 0;
        /// Inside a `deprecated { ... }` block.
        const IN_DEPRECATED_TEMPLATE = 1 << 1;

        // === Query flags ===
        // Guards for soft keywords.

        /// `select` is a keyword.
        const IN_TABLE_QUERY = 1 << 2;
        /// `events` is a keyword.
        const IN_INSERT_QUERY = 1 << 3;
        /// Time-unit words are keywords.
        const IN_TIME_SCALE_QUERY = 1 << 4;
        /// `first` and `last` are keywords.
        const IN_OUTPUT_RATE_LIMIT = 1 << 5;
    }
}

/// One row of the guard table.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SoftKeyword {
    pub spelling: &'static str,
    pub kind: TokenKind,
    /// Flag that must be set for the spelling to be a keyword; `None` means
    /// the spelling is always a keyword (it is also reserved).
    pub guard: Option<ContextFlags>,
    /// Flags set when the keyword is recognised.
    pub set: ContextFlags,
    /// Flags cleared when the keyword is recognised.
    pub clear: ContextFlags,
}

impl SoftKeyword {
    const fn always(spelling: &'static str, kind: TokenKind, set: ContextFlags) -> Self {
        SoftKeyword {
            spelling,
            kind,
            guard: None,
            set,
            clear: ContextFlags::empty(),
        }
    }

    const fn guarded(spelling: &'static str, kind: TokenKind, guard: ContextFlags) -> Self {
        SoftKeyword {
            spelling,
            kind,
            guard: Some(guard),
            set: ContextFlags::empty(),
            clear: guard,
        }
    }

    /// Whether the spelling is a keyword under `flags`.
    pub fn applies(&self, flags: ContextFlags) -> bool {
        match self.guard {
            Some(guard) => flags.contains(guard),
            None => true,
        }
    }

    /// Run the side effect of recognising this keyword.
    pub fn apply(&self, flags: &mut ContextFlags) {
        flags.insert(self.set);
        flags.remove(self.clear);
    }
}

const TIME_SCALE: ContextFlags = ContextFlags::IN_TIME_SCALE_QUERY;

/// Spelling → guard → side effect.
pub static SOFT_KEYWORDS: [SoftKeyword; 20] = [
    SoftKeyword::always(
        "from",
        TokenKind::From,
        ContextFlags::IN_TABLE_QUERY
            .union(ContextFlags::IN_INSERT_QUERY)
            .union(ContextFlags::IN_OUTPUT_RATE_LIMIT),
    ),
    SoftKeyword::guarded("select", TokenKind::Select, ContextFlags::IN_TABLE_QUERY),
    SoftKeyword::always("for", TokenKind::For, TIME_SCALE),
    SoftKeyword::guarded("events", TokenKind::Events, ContextFlags::IN_INSERT_QUERY),
    SoftKeyword::always("within", TokenKind::Within, TIME_SCALE),
    SoftKeyword::guarded("last", TokenKind::Last, ContextFlags::IN_OUTPUT_RATE_LIMIT),
    SoftKeyword::guarded("first", TokenKind::First, ContextFlags::IN_OUTPUT_RATE_LIMIT),
    SoftKeyword::always("output", TokenKind::Output, TIME_SCALE),
    SoftKeyword::guarded("second", TokenKind::Second, TIME_SCALE),
    SoftKeyword::guarded("minute", TokenKind::Minute, TIME_SCALE),
    SoftKeyword::guarded("hour", TokenKind::Hour, TIME_SCALE),
    SoftKeyword::guarded("day", TokenKind::Day, TIME_SCALE),
    SoftKeyword::guarded("month", TokenKind::Month, TIME_SCALE),
    SoftKeyword::guarded("year", TokenKind::Year, TIME_SCALE),
    SoftKeyword::guarded("seconds", TokenKind::Seconds, TIME_SCALE),
    SoftKeyword::guarded("minutes", TokenKind::Minutes, TIME_SCALE),
    SoftKeyword::guarded("hours", TokenKind::Hours, TIME_SCALE),
    SoftKeyword::guarded("days", TokenKind::Days, TIME_SCALE),
    SoftKeyword::guarded("months", TokenKind::Months, TIME_SCALE),
    SoftKeyword::guarded("years", TokenKind::Years, TIME_SCALE),
];

/// Table row for `spelling`, if it has one.
pub fn soft_keyword(spelling: &str) -> Option<&'static SoftKeyword> {
    // 3..=7 bytes covers every row.
    if !(3..=7).contains(&spelling.len()) {
        return None;
    }
    SOFT_KEYWORDS.iter().find(|row| row.spelling == spelling)
}

/// Classify an identifier-shaped word and run any keyword side effect.
///
/// Reserved spellings win first. A reserved spelling that also has a table
/// row (`from`, `for`, `within`, `output`) still runs its side effect.
pub(crate) fn resolve_word(text: &str, flags: &mut ContextFlags) -> TokenKind {
    let reserved = keywords::lookup(text);
    let Some(row) = soft_keyword(text) else {
        return reserved.unwrap_or(TokenKind::Identifier);
    };

    if !row.applies(*flags) {
        trace!(spelling = text, ?flags, "soft keyword guard closed");
        return reserved.unwrap_or(TokenKind::Identifier);
    }

    row.apply(flags);
    trace!(spelling = text, kind = ?row.kind, ?flags, "soft keyword");
    reserved.unwrap_or(row.kind)
}

#[cfg(test)]
mod tests;
