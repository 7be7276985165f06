//! Generation options: the closed set of switches controlling synthesis.
//!
//! Options are fixed for the lifetime of a run and never mutated by the
//! pipeline.

use serde::{Deserialize, Serialize};

/// Switches controlling how the type schema is synthesized
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Attach documentation metadata to schema entries
    pub use_docs: bool,
    /// Include arbitrary-value templates (`p-[*]`) in the literal sets
    pub use_arbitrary_value: bool,
    /// Accept any vocabulary nesting key under any property ("soft");
    /// when false, each property accepts only its observed keys ("exact")
    pub use_soft_variants: bool,
    /// Emit only the flat string catalogue of variants, dropping the
    /// nest-group catalogue from the schema
    pub use_string_kind_variants_only: bool,
    /// Mark every schema property optional
    pub use_optional_property: bool,
    /// Suppress variants entirely: base alternatives only, empty variant
    /// catalogues, no nesting. Exclusive over the other variant switches.
    pub disable_variants: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            use_docs: true,
            use_arbitrary_value: true,
            use_soft_variants: true,
            use_string_kind_variants_only: false,
            use_optional_property: false,
            disable_variants: false,
        }
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The complementary spelling of the soft switch
    pub fn use_exact_variants(&self) -> bool {
        !self.use_soft_variants
    }

    pub fn with_docs(mut self, on: bool) -> Self {
        self.use_docs = on;
        self
    }

    pub fn with_arbitrary_value(mut self, on: bool) -> Self {
        self.use_arbitrary_value = on;
        self
    }

    pub fn with_soft_variants(mut self, on: bool) -> Self {
        self.use_soft_variants = on;
        self
    }

    pub fn with_string_kind_variants_only(mut self, on: bool) -> Self {
        self.use_string_kind_variants_only = on;
        self
    }

    pub fn with_optional_property(mut self, on: bool) -> Self {
        self.use_optional_property = on;
        self
    }

    pub fn with_disabled_variants(mut self, on: bool) -> Self {
        self.disable_variants = on;
        self
    }
}
