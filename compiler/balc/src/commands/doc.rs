//! `balc doc`: documented functions as JSON.

use std::io::Write;

use bal_docgen::{document_functions, FunctionDoc};
use bal_lexer::Lexer;
use serde_json::json;

use super::read_all;
use crate::options::Options;
use crate::CommandError;

pub fn document_files(options: &Options, mut out: impl Write) -> Result<(), CommandError> {
    let files = read_all(&options.files)?;
    let mut modules = Vec::with_capacity(files.len());
    for file in &files {
        let functions: Vec<FunctionDoc> =
            document_functions(Lexer::with_config(&file.text, options.config).significant());
        modules.push(json!({ "file": file.name(), "functions": functions }));
    }
    serde_json::to_writer_pretty(&mut out, &modules)?;
    writeln!(out)?;
    Ok(())
}
