//! Lexer configuration.

/// What the lexer does after producing an `Error` token.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ErrorPolicy {
    /// Skip the offending input and keep scanning. Suited to IDE tooling,
    /// which wants a best-effort token stream for broken input.
    #[default]
    Recover,
    /// Emit the `Error` token, then `Eof` on every later call.
    Halt,
}

/// Configuration for a [`Lexer`](crate::Lexer).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    pub error_policy: ErrorPolicy,
    /// Maximum number of frames on the mode stack, including the bottom
    /// default frame. A push beyond this is refused with `NestingTooDeep`.
    pub max_nesting: u32,
}

impl LexerConfig {
    pub const DEFAULT_MAX_NESTING: u32 = 256;

    #[must_use]
    pub fn with_error_policy(mut self, error_policy: ErrorPolicy) -> Self {
        self.error_policy = error_policy;
        self
    }

    /// Set the nesting limit; values below 1 are raised to 1 so the bottom
    /// frame always fits.
    #[must_use]
    pub fn with_max_nesting(mut self, max_nesting: u32) -> Self {
        self.max_nesting = max_nesting.max(1);
        self
    }

    /// Shorthand for `with_error_policy(ErrorPolicy::Halt)`.
    #[must_use]
    pub fn halting(self) -> Self {
        self.with_error_policy(ErrorPolicy::Halt)
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            error_policy: ErrorPolicy::Recover,
            max_nesting: Self::DEFAULT_MAX_NESTING,
        }
    }
}

#[cfg(test)]
mod tests;
