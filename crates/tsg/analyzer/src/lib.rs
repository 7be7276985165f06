//! Rule analyzer
//!
//! Reduces one compiled stylesheet to the facts the schema needs: for
//! every generated utility rule, its verbatim class name, canonical
//! template, semantic property, arbitrary-value capability and observed
//! variant chain.
//!
//! The pass is engine-output driven: it parses whatever block structure
//! the compiler emitted (top-level rules, nested variant bodies, grouping
//! at-rules) and never consults the engine's own source. Rules that do not
//! map to a utility are dropped with a diagnostic; a single bad rule never
//! aborts analysis.

#![deny(unsafe_code)]

pub mod analysis;
pub mod error;
pub mod property;
pub mod scanner;

// Re-export main types
pub use analysis::{analyze, extract_rule, Analysis};
pub use error::{AnalyzerError, AnalyzerResult};
pub use property::{camel_case, doc_url, resolve_property, ResolvedProperty};
pub use scanner::{CssScanner, Declaration, ScannedRule};
