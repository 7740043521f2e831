//! `balc check`: report lexical errors.

use std::io::Write;

use bal_lexer::{lex_with_config, LexError};
use rayon::prelude::*;
use tracing::debug;

use super::read_all;
use crate::diagnostic;
use crate::options::Options;
use crate::CommandError;

/// Lex every file and render its errors to `out`. Returns the total number
/// of errors.
pub fn check_files(
    options: &Options,
    color: bool,
    mut out: impl Write,
) -> Result<usize, CommandError> {
    let files = read_all(&options.files)?;
    let results: Vec<Vec<LexError>> = files
        .par_iter()
        .map(|file| lex_with_config(&file.text, options.config).errors)
        .collect();

    let mut total = 0;
    for (file, errors) in files.iter().zip(&results) {
        let name = file.name();
        debug!(file = %name, errors = errors.len(), "checked");
        for error in errors {
            diagnostic::render(&name, &file.text, error, color, &mut out)?;
        }
        total += errors.len();
    }

    let noun = if total == 1 { "error" } else { "errors" };
    writeln!(out, "{} file(s) checked, {total} {noun}", files.len())?;
    Ok(total)
}
