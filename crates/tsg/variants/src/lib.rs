//! Variant universe builder
//!
//! Generates the conditional-application vocabulary for one engine
//! version: the flat kind-tagged catalogue of variant keys and the four
//! combination families of nesting keys. The builder is pure and depends
//! only on its input vocabulary, so it runs independently of compiled CSS
//! and can be regenerated at any time.
//!
//! # Example
//!
//! ```rust
//! use tsg_variants::{build_universe, VariantVocabulary};
//!
//! let universe = build_universe(&VariantVocabulary::default());
//! assert!(!universe.is_empty());
//! ```

#![deny(unsafe_code)]

pub mod builder;
pub mod vocabulary;

// Re-export main types
pub use builder::{build_universe, combination, combination_all, to_state_marker};
pub use vocabulary::{
    VariantVocabulary, DEFAULT_BREAKPOINTS, DEFAULT_CONTAINERS, DEFAULT_STATES, DEFAULT_THEMES,
};
