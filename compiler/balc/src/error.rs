use std::io;
use std::path::PathBuf;

/// Failure of a `balc` command before or after lexing.
///
/// Lexical errors are not command errors; they are rendered as diagnostics
/// and reflected in the exit status.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for '{option}': expected a positive integer")]
    InvalidValue { option: String },
    #[error("no input files")]
    NoInput,
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
    #[error("cannot serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CommandError {
    pub(crate) fn reading(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound { path },
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Read { path, source },
        }
    }
}
