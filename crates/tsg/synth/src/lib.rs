//! Schema synthesizer
//!
//! The pure middle of the pipeline: folds the analyzer's descriptors and
//! the generated variant universe into a [`tsg_types::TypeSchema`] under a
//! fixed set of [`tsg_types::GenerationOptions`]. No I/O, no engine
//! access; given identical inputs the output is byte-identical.

#![deny(unsafe_code)]

pub mod error;
pub mod synthesize;

// Re-export main types
pub use error::{SynthError, SynthResult};
pub use synthesize::synthesize;
