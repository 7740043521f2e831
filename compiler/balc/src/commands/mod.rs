//! `balc` commands.
//!
//! Each command reads its input files in parallel, then writes results in
//! argument order so output is deterministic.

mod check;
mod doc;
mod lex;

pub use check::check_files;
pub use doc::document_files;
pub use lex::lex_files;

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::CommandError;

/// A source file read into memory.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn read(path: &Path) -> Result<Self, CommandError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| CommandError::reading(path.to_path_buf(), e))?;
        Ok(SourceFile {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Path as shown in output.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read every file, failing on the first unreadable one in argument order.
pub fn read_all(paths: &[PathBuf]) -> Result<Vec<SourceFile>, CommandError> {
    paths.par_iter().map(|path| SourceFile::read(path)).collect()
}
