//! Generation orchestrator
//!
//! Ties the pipeline together behind one type: [`TypeGenerator`] gates
//! the engine version, compiles once, analyzes, builds the variant
//! universe, then synthesizes and writes the schema artifacts on demand.
//!
//! The lifecycle is two-phase: `init` performs every fallible environment
//! interaction up front, and `build_types` can then render any number of
//! artifact sets from the in-memory state without touching the engine
//! again.
//!
//! An optional advisory store caches analysis products between runs; it
//! is keyed by engine version + entry identity and never authoritative.

#![deny(unsafe_code)]

pub mod artifact;
pub mod error;
pub mod generator;
pub mod store;

// Re-export main types
pub use artifact::{BuildTargets, NestGroupArtifact};
pub use error::{GeneratorError, GeneratorResult};
pub use generator::TypeGenerator;
pub use store::AnalysisStore;
