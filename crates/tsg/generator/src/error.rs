//! Error types for the generation orchestrator

use std::path::PathBuf;
use thiserror::Error;

use tsg_bridge::BridgeError;
use tsg_synth::SynthError;

/// Errors surfaced by the orchestrator.
///
/// Bridge and synthesis failures are wrapped so the caller sees which
/// phase failed; the remaining variants are the orchestrator's own.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// `build_types` or a state accessor was called before `init`.
    #[error("Generator not initialized; call init() first")]
    NotInitialized,

    /// The compiled stylesheet yielded no utility descriptors.
    #[error("Compiled stylesheet contains no extractable utility classes")]
    EmptyAnalysis,

    /// Bridge error (engine missing, version gate, compile failure).
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// Synthesis error.
    #[error("Synthesis error: {0}")]
    Synth(#[from] SynthError),

    /// An artifact could not be written to its target path.
    #[error("Writing artifact '{path}' failed: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The analysis store could not be read or written.
    #[error("Store file '{path}' unusable: {reason}")]
    Store { path: PathBuf, reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for orchestrator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;
