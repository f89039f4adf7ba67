use std::io;
use std::path::PathBuf;

/// Anything that stops a command before its document is written.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error(
        "include '{key}' is provided by both '{}' and '{}'",
        first.display(),
        second.display()
    )]
    DuplicateInclude {
        key: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("{}: {source}", path.display())]
    Input {
        path: PathBuf,
        source: scriptdefs_core::Error,
    },

    #[error(transparent)]
    Emit(#[from] scriptdefs_codegen::EmitError),
}

pub type Result<T> = std::result::Result<T, CliError>;
