//! Bridge error types

use std::path::PathBuf;

/// Errors raised at the seam with the external engine.
///
/// All of these are environment errors: they surface before any analysis
/// and abort the run.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Engine executable not found at '{0}'")]
    EngineNotFound(PathBuf),

    #[error("Entry stylesheet not found at '{0}'")]
    EntryNotFound(PathBuf),

    #[error("Engine exited with status {status}: {stderr}")]
    CompileFailed { status: i32, stderr: String },

    #[error("Engine version metadata unreadable at '{path}': {reason}")]
    VersionUnreadable { path: PathBuf, reason: String },

    #[error("Engine version {found} is below the supported minimum {minimum}")]
    VersionBelowMinimum { found: String, minimum: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
