//! Synthesizer error types

/// Errors raised while folding descriptors into a schema.
///
/// Synthesis errors are fatal: they abort the run before any artifact is
/// written.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SynthError {
    #[error("Synthesis requires at least one descriptor; analysis produced none")]
    EmptyDescriptors,
}

/// Result type alias for synthesizer operations
pub type SynthResult<T> = Result<T, SynthError>;
