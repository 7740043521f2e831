//! Command-line options shared by the `lex`, `check` and `doc` commands.

use std::path::PathBuf;

use bal_lexer::LexerConfig;

use crate::CommandError;

/// Parsed options: lexer configuration, output switches and input files.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub config: LexerConfig,
    /// `lex`: omit whitespace, newline and comment tokens.
    pub skip_trivia: bool,
    /// `lex`: print tokens as JSON.
    pub json: bool,
    pub files: Vec<PathBuf>,
}

impl Options {
    /// Parse the arguments after the command name. Flags may appear before
    /// or after the files.
    pub fn parse(args: &[String]) -> Result<Self, CommandError> {
        let mut options = Options::default();

        for arg in args {
            if arg == "--halt-on-error" {
                options.config = options.config.halting();
            } else if let Some(value) = arg.strip_prefix("--max-nesting=") {
                let limit = value
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| CommandError::InvalidValue {
                        option: "--max-nesting".to_owned(),
                    })?;
                options.config = options.config.with_max_nesting(limit);
            } else if arg == "--skip-trivia" {
                options.skip_trivia = true;
            } else if arg == "--json" {
                options.json = true;
            } else if arg.starts_with('-') {
                return Err(CommandError::UnknownOption(arg.clone()));
            } else {
                options.files.push(PathBuf::from(arg));
            }
        }

        if options.files.is_empty() {
            return Err(CommandError::NoInput);
        }
        Ok(options)
    }
}
