//! Utility descriptors: one compiled rule reduced to its reusable facts.
//!
//! A descriptor is immutable once analyzed. Downstream stages read it,
//! never rewrite it.

use serde::{Deserialize, Serialize};

/// Documentation metadata synthesized per semantic property
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDoc {
    /// The declared CSS properties, comma-joined
    pub summary: String,
    /// Reference URL derived from the first declared property
    pub url: String,
}

impl PropertyDoc {
    pub fn new(summary: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            url: url.into(),
        }
    }
}

/// One generated utility rule, reduced to its class name, canonical
/// template, semantic property, and the variant chain it was observed under
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UtilityDescriptor {
    /// The verbatim class name, unescaped (`hover:bg-red-500`, `p-[10px]`)
    pub class_name: String,
    /// Canonical template of the base token; arbitrary slots collapse to
    /// `[*]` (`bg-red-500`, `p-[*]`)
    pub template: String,
    /// camelCase semantic property; multi-declaration rules resolve to a
    /// group name (`paddingX` for `padding-left` + `padding-right`)
    pub property: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<PropertyDoc>,
    /// Whether the base token carries an arbitrary-value slot
    pub arbitrary: bool,
    /// Variant prefixes observed left to right, bare class-prefix spelling
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variant_chain: Vec<String>,
}

impl UtilityDescriptor {
    pub fn new(
        class_name: impl Into<String>,
        template: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            template: template.into(),
            property: property.into(),
            doc: None,
            arbitrary: false,
            variant_chain: Vec::new(),
        }
    }

    pub fn with_doc(mut self, doc: PropertyDoc) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn with_arbitrary(mut self, arbitrary: bool) -> Self {
        self.arbitrary = arbitrary;
        self
    }

    pub fn with_variant_chain(mut self, chain: Vec<String>) -> Self {
        self.variant_chain = chain;
        self
    }

    /// Whether this rule was generated with no variant prefix
    pub fn is_base(&self) -> bool {
        self.variant_chain.is_empty()
    }

    /// The class template including the variant chain
    /// (`sm:hover:` + template)
    pub fn rendered_template(&self) -> String {
        if self.variant_chain.is_empty() {
            return self.template.clone();
        }
        let mut rendered = self.variant_chain.join(":");
        rendered.push(':');
        rendered.push_str(&self.template);
        rendered
    }

    /// Identity used for de-duplication: property + template + chain
    pub fn dedup_key(&self) -> (&str, &str, &[String]) {
        (&self.property, &self.template, &self.variant_chain)
    }
}
