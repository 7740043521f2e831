//! `balc lex`: print the token stream of each file.

use std::io::Write;

use bal_ir::Token;
use bal_lexer::lex_with_config;
use rayon::prelude::*;

use super::{read_all, SourceFile};
use crate::options::Options;
use crate::CommandError;

pub fn lex_files(options: &Options, mut out: impl Write) -> Result<(), CommandError> {
    let files = read_all(&options.files)?;
    let dumps: Vec<Vec<u8>> = files
        .par_iter()
        .map(|file| dump(file, options))
        .collect::<Result<_, _>>()?;
    for dump in dumps {
        out.write_all(&dump)?;
    }
    Ok(())
}

fn dump(file: &SourceFile, options: &Options) -> Result<Vec<u8>, CommandError> {
    let output = lex_with_config(&file.text, options.config);
    let tokens: Vec<&Token<'_>> = output
        .tokens
        .iter()
        .filter(|t| !(options.skip_trivia && t.is_trivia()))
        .collect();

    let mut buf = Vec::new();
    if options.json {
        serde_json::to_writer_pretty(&mut buf, &tokens)?;
        writeln!(buf)?;
        return Ok(buf);
    }

    writeln!(buf, "Tokens for '{}' ({} tokens):", file.name(), tokens.len())?;
    for token in tokens {
        writeln!(buf, "  {token:?} at {}", token.start)?;
    }
    for error in &output.errors {
        writeln!(buf, "  error: {error}")?;
    }
    Ok(buf)
}
