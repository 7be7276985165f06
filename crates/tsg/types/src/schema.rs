//! The synthesized type schema: the final, deterministic artifact value.
//!
//! A schema is rebuilt from scratch on every run and never mutated after
//! synthesis. Properties are keyed through an ordered map and the variant
//! catalogues are emitted in generation order, so serializing the same
//! schema twice yields byte-identical output.

use crate::{NestGroupDefinition, PropertyDoc, VariantKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a schema property accepts nesting keys
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "keys", rename_all = "kebab-case")]
pub enum NestingRule {
    /// Any vocabulary key may nest under this property
    Open,
    /// Only the listed keys may nest (exact variants)
    Closed(Vec<String>),
    /// Nesting is disabled for this run
    None,
}

impl NestingRule {
    pub fn is_open(&self) -> bool {
        matches!(self, NestingRule::Open)
    }
}

/// One semantic property and its legal class alternatives
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertySchemaEntry {
    /// camelCase property or property-group name
    pub property: String,
    /// Legal class templates, first-seen order, de-duplicated
    pub literals: Vec<String>,
    /// Whether the engine generates an arbitrary-value form for this
    /// property, independent of whether it is included in `literals`
    pub supports_arbitrary: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<PropertyDoc>,
    /// Whether a consumer may omit this property
    pub optional: bool,
    /// Nesting acceptance for this property
    pub nesting: NestingRule,
}

/// The complete synthesized schema for one engine version
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSchema {
    /// The engine version the schema was extracted from
    pub engine_version: String,
    /// Properties keyed by name; ordered map keeps serialization stable
    pub properties: BTreeMap<String, PropertySchemaEntry>,
    /// Flat kind-tagged variant catalogue
    pub variants: Vec<VariantKey>,
    /// Generated nesting-key catalogue, family order
    pub nest_groups: Vec<NestGroupDefinition>,
}

impl TypeSchema {
    pub fn property(&self, name: &str) -> Option<&PropertySchemaEntry> {
        self.properties.get(name)
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// All literal alternatives across every property
    pub fn literal_count(&self) -> usize {
        self.properties.values().map(|e| e.literals.len()).sum()
    }

    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty() || !self.nest_groups.is_empty()
    }
}
