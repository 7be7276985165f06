//! CLI error types

use std::path::PathBuf;
use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Generation error: {0}")]
    Generator(#[from] tsg_generator::GeneratorError),

    #[error("No entry stylesheet importing the framework found under '{0}'; pass --entry")]
    EntryNotFound(PathBuf),

    #[error("{what} not found at '{path}'; ensure the engine is installed or pass {flag}")]
    EngineNotResolved {
        what: &'static str,
        path: PathBuf,
        flag: &'static str,
    },
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
