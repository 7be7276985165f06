//! Compiler bridge
//!
//! Everything that touches the external utility-class engine lives here:
//! the [`UtilityCompiler`] contract, the CLI adapter that spawns the
//! engine, the version gate, and a fixture implementation for tests.
//!
//! Compilation is delegated wholesale. The pipeline sees only the
//! engine's printed output and its version string.

#![deny(unsafe_code)]

pub mod compiler;
pub mod error;
pub mod version;

// Re-export main types
pub use compiler::{CompiledCss, FixtureCompiler, TailwindCli, UtilityCompiler};
pub use error::{BridgeError, BridgeResult};
pub use version::{
    ensure_supported_version, is_version_sufficient, read_engine_version, MIN_ENGINE_VERSION,
};
